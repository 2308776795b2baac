mod commands;
mod formatter;
mod resolve;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Action, Command};
use crossterm::tty::IsTty;
use formatter::Formatter;
use resolve::Resolution;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;
use verdict::{Domain, Investigation};

#[derive(Parser)]
#[command(name = "verdict")]
#[command(about = "An interactive logic-deduction shell for closed-world whodunits.")]
#[command(
    long_about = "Verdict tracks a fixed cast of suspects, weapons, and rooms in a propositional knowledge base.\nAssert or exclude facts one at a time; the engine reports what is proven, what is still possible,\nand whether the case is uniquely solved."
)]
#[command(version)]
struct Cli {
    /// Load a custom case from a JSON casefile with "suspects", "weapons",
    /// and "rooms" name lists (default: the classic mansion case)
    #[arg(short = 'c', long = "casefile", value_name = "PATH")]
    casefile: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "verdict=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let domain = match &cli.casefile {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read casefile {}", path.display()))?;
            serde_json::from_str::<Domain>(&text)
                .with_context(|| format!("invalid casefile {}", path.display()))?
        }
        None => Domain::classic(),
    };

    let color = !cli.no_color && io::stdout().is_tty();
    run(Investigation::new(domain), Formatter::new(color))
}

fn run(mut case: Investigation, formatter: Formatter) -> Result<()> {
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", formatter.banner())?;
    writeln!(stdout, "{}", formatter.domain_listing(case.domain()))?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match commands::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(stdout, "{}", formatter.error(&e.to_string()))?;
                continue;
            }
        };
        debug!(?command, "dispatching");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(stdout, "{}", formatter.help())?,
            Command::List => writeln!(stdout, "{}", formatter.domain_listing(case.domain()))?,
            Command::Status => writeln!(stdout, "{}", formatter.status(&case.status()))?,
            Command::Candidates => match case.candidates() {
                Ok(candidates) => writeln!(stdout, "{}", formatter.candidates(&candidates))?,
                Err(_) => writeln!(stdout, "{}", formatter.inconsistent())?,
            },
            Command::Solve => match case.solution() {
                Ok(Some(candidate)) => writeln!(stdout, "{}", formatter.solution(&candidate))?,
                Ok(None) => writeln!(stdout, "{}", formatter.undetermined())?,
                Err(_) => writeln!(stdout, "{}", formatter.inconsistent())?,
            },
            Command::Investigate {
                category,
                action,
                names,
            } => {
                for name in names {
                    let item = match resolve::resolve(case.domain(), category, &name) {
                        Resolution::Match(item) => item,
                        Resolution::Ambiguous(matches) => {
                            write!(stdout, "{}", formatter.ambiguous(&name, &matches))?;
                            continue;
                        }
                        Resolution::NoMatch => {
                            writeln!(stdout, "{}", formatter.no_match(&name))?;
                            continue;
                        }
                    };
                    let result = match action {
                        Action::Assert => case.assert_item(category, &item),
                        Action::Exclude => case.exclude_item(category, &item),
                    };
                    match result {
                        Ok(outcome) => writeln!(stdout, "{}", formatter.outcome(&outcome))?,
                        Err(e) => writeln!(stdout, "{}", formatter.error(&e.to_string()))?,
                    }
                }
            }
        }
    }

    writeln!(stdout, "{}", formatter.farewell())?;
    Ok(())
}
