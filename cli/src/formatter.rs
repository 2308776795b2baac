//! Rendering of engine reports for the terminal.

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use crossterm::style::Stylize;
use verdict::{Candidate, Category, Classification, Domain, FactOutcome, StatusReport};

pub struct Formatter {
    color: bool,
}

impl Formatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn green(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn red(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn banner(&self) -> String {
        format!(
            "{}\n{}\nUse logical reasoning to solve the crime.\nType 'help' for commands, 'quit' to exit.\n",
            self.bold("THE MANSION MURDER MYSTERY"),
            "=".repeat(50)
        )
    }

    pub fn farewell(&self) -> String {
        "Goodbye, detective.".to_string()
    }

    pub fn domain_listing(&self, domain: &Domain) -> String {
        let mut output = format!("{}\n{}\n", self.bold("The Cast and Props"), "=".repeat(40));
        for category in Category::ALL {
            output.push_str(&format!(
                "{:<8}: {}\n",
                category.heading(),
                domain.items(category).join(", ")
            ));
        }
        output
    }

    pub fn status(&self, report: &StatusReport) -> String {
        if !report.consistent {
            return self.inconsistent();
        }

        let mut output = format!("{}\n{}\n", self.bold("Current Status"), "=".repeat(40));
        for category in &report.categories {
            output.push_str(&format!("\n{}:\n", category.category.heading()));
            for entry in &category.entries {
                let line = match entry.classification {
                    Classification::ForcedTrue => {
                        self.green(&format!("  {}: YES", entry.item))
                    }
                    Classification::Possible => format!("  {}: MAYBE", entry.item),
                };
                output.push_str(&line);
                output.push('\n');
            }
        }
        output
    }

    pub fn candidates(&self, candidates: &[Candidate]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("Suspect"),
            Cell::new("Weapon"),
            Cell::new("Room"),
        ]));
        for (i, candidate) in candidates.iter().enumerate() {
            table.add_row(Row::from(vec![
                Cell::new(i + 1).set_alignment(CellAlignment::Right),
                Cell::new(&candidate.suspect),
                Cell::new(&candidate.weapon),
                Cell::new(&candidate.room),
            ]));
        }
        format!(
            "{} possible solution(s):\n{}\n",
            candidates.len(),
            table
        )
    }

    pub fn solution(&self, candidate: &Candidate) -> String {
        format!(
            "{}\n{}\nCulprit: {}\nWeapon : {}\nScene  : {}\n",
            self.green("CASE SOLVED"),
            "=".repeat(30),
            candidate.suspect,
            candidate.weapon,
            candidate.room
        )
    }

    pub fn undetermined(&self) -> String {
        "Not enough evidence yet. Keep investigating.".to_string()
    }

    pub fn inconsistent(&self) -> String {
        self.red("Knowledge base is inconsistent; no valid solutions exist.")
    }

    pub fn outcome(&self, outcome: &FactOutcome) -> String {
        match outcome {
            FactOutcome::Added(fact) => self.green(&format!("Added: {}", fact)),
            FactOutcome::AlreadyKnown(fact) => format!("Already recorded: {}", fact),
            FactOutcome::Inconsistent(fact) => self.red(&format!(
                "Cannot add {}: it would make the knowledge base inconsistent",
                fact
            )),
        }
    }

    pub fn no_match(&self, text: &str) -> String {
        self.red(&format!("No match found for '{}'", text))
    }

    pub fn ambiguous(&self, text: &str, matches: &[String]) -> String {
        let mut output = format!("Ambiguous name '{}'. Did you mean:\n", text);
        for name in matches {
            output.push_str(&format!("  - {}\n", name));
        }
        output
    }

    pub fn error(&self, message: &str) -> String {
        self.red(message)
    }

    pub fn help(&self) -> String {
        "Commands\n\n\
         Basic:\n\
         \x20 help                 Show this help message\n\
         \x20 list                 List all suspects, weapons, and rooms\n\
         \x20 status               Show current facts (YES/MAYBE)\n\
         \x20 candidates           Show all possible solutions\n\
         \x20 solve                Show solution if uniquely determined\n\
         \x20 quit / exit          Exit the program\n\n\
         Investigation:\n\
         \x20 s.no <name...>       Exclude suspect(s)\n\
         \x20 w.no <name...>       Exclude weapon(s)\n\
         \x20 r.no <name...>       Exclude room(s)\n\
         \x20 s.yes <name>         Assert this suspect is guilty\n\
         \x20 w.yes <name>         Assert this weapon was used\n\
         \x20 r.yes <name>         Assert this room is the crime scene\n\n\
         Tips:\n\
         \x20 - Partial names work: 'w.no wire' excludes 'Piano Wire'\n\
         \x20 - Multiple names with commas: 's.no Alaric, Edwin'\n\
         \x20 - Names are case-insensitive\n"
            .to_string()
    }
}
