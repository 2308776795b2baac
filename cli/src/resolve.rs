//! Fuzzy resolution of user-typed names to exact domain items.
//!
//! The engine only accepts exact item names; everything forgiving lives
//! here. Exact (case-insensitive) matches win outright, otherwise a unique
//! case-insensitive substring match is accepted.

use tracing::debug;
use verdict::{Category, Domain};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one domain item matched; contains its exact name.
    Match(String),
    /// Several items matched the substring; contains all of them.
    Ambiguous(Vec<String>),
    NoMatch,
}

pub fn resolve(domain: &Domain, category: Category, text: &str) -> Resolution {
    let needle = text.to_lowercase();
    let items = domain.items(category);

    if let Some(exact) = items.iter().find(|name| name.to_lowercase() == needle) {
        debug!(%category, %text, item = %exact, "resolved exactly");
        return Resolution::Match(exact.clone());
    }

    let matches: Vec<String> = items
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    debug!(%category, %text, count = matches.len(), "substring matches");
    match matches.len() {
        0 => Resolution::NoMatch,
        1 => Resolution::Match(matches.into_iter().next().unwrap_or_default()),
        _ => Resolution::Ambiguous(matches),
    }
}
