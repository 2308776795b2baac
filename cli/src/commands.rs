//! Command tokenization and parsing for the interactive loop.

use anyhow::{bail, Result};
use verdict::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Assert,
    Exclude,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Status,
    Candidates,
    Solve,
    Quit,
    Investigate {
        category: Category,
        action: Action,
        names: Vec<String>,
    },
}

/// Parse one input line. Blank lines parse to `None`.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let tokens = tokenize(line)?;
    let Some(first) = tokens.first() else {
        return Ok(None);
    };

    let command = match first.to_lowercase().as_str() {
        "help" => Command::Help,
        "list" => Command::List,
        "status" => Command::Status,
        "candidates" | "cand" => Command::Candidates,
        "solve" => Command::Solve,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            let Some((category, action)) = investigation_command(other) else {
                bail!("unknown command '{}'; type 'help' for available commands", other);
            };
            let names = split_names(&tokens[1..]);
            if names.is_empty() {
                bail!("missing name; usage: {} <name>", other);
            }
            Command::Investigate {
                category,
                action,
                names,
            }
        }
    };

    Ok(Some(command))
}

fn investigation_command(word: &str) -> Option<(Category, Action)> {
    let (tag, verb) = word.split_once('.')?;
    let category = match tag {
        "s" => Category::Suspect,
        "w" => Category::Weapon,
        "r" => Category::Room,
        _ => return None,
    };
    let action = match verb {
        "yes" => Action::Assert,
        "no" => Action::Exclude,
        _ => return None,
    };
    Some((category, action))
}

/// Split a line into tokens, honoring single and double quotes.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_token = true;
            }
            None if ch.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(ch);
                in_token = true;
            }
        }
    }

    if quote.is_some() {
        bail!("unterminated quote in input");
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Re-join argument tokens and split on commas, trimming whitespace and
/// dropping case-insensitive duplicates while preserving first-seen order.
pub fn split_names(args: &[String]) -> Vec<String> {
    let joined = args.join(" ");
    let mut seen = std::collections::HashSet::new();
    joined
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter(|part| seen.insert(part.to_lowercase()))
        .map(str::to_string)
        .collect()
}
