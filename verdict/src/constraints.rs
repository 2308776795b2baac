//! Constraint generation for closed, mutually exclusive categories.

use crate::logic::Sentence;

/// Build the formulas enforcing that exactly one of `symbols` is true.
///
/// Produces a single disjunction ("at least one holds") followed by a negated
/// conjunction for every unordered pair ("no two hold together"), C(n,2)+1
/// formulas in total. The pairwise encoding keeps each formula small enough
/// to read back to the user verbatim.
pub fn exactly_one(symbols: &[Sentence]) -> Vec<Sentence> {
    debug_assert!(!symbols.is_empty(), "exactly_one requires at least one symbol");

    let mut axioms = vec![Sentence::or(symbols.to_vec())];
    for (i, a) in symbols.iter().enumerate() {
        for b in &symbols[i + 1..] {
            axioms.push(Sentence::not(Sentence::and(vec![a.clone(), b.clone()])));
        }
    }
    axioms
}
