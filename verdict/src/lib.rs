//! # Verdict Engine
//!
//! **Deduction for closed-world whodunits**
//!
//! Verdict is a propositional-logic knowledge base for puzzles with a fixed,
//! finite set of mutually exclusive answers: which suspect, which weapon,
//! which room. Facts are asserted or excluded one at a time; the engine
//! reports which items are logically forced, which remain possible, and
//! whether the accumulated facts pin down a unique answer.
//!
//! ## Quick Start
//!
//! ```rust
//! use verdict::{Category, Domain, Investigation, VerdictResult};
//!
//! fn main() -> VerdictResult<()> {
//!     let mut case = Investigation::new(Domain::classic());
//!
//!     // Rule out two suspects; the third is now forced.
//!     case.exclude_item(Category::Suspect, "Lord Alaric")?;
//!     case.exclude_item(Category::Suspect, "Lady Morgana")?;
//!
//!     let report = case.status();
//!     assert!(report.consistent);
//!
//!     // Still undetermined until weapon and room collapse too.
//!     assert!(case.solution()?.is_none());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Sentences
//! Propositional formulas built from atomic symbols with negation,
//! conjunction, and disjunction, evaluated structurally against a truth
//! assignment.
//!
//! ### The knowledge base
//! An ordered, duplicate-free list of sentences: the three "exactly one"
//! constraint groups plus every fact the caller has asserted. It only ever
//! grows, and guarded mutations keep it satisfiable.
//!
//! ### Entailment by enumeration
//! Queries are answered by brute-force model checking over the full symbol
//! universe. The universe is validated to stay small, so the exponential
//! sweep is deliberate and cheap.

pub mod constraints;
pub mod domain;
pub mod error;
pub mod inference;
pub mod investigation;
pub mod logic;

pub use constraints::exactly_one;
pub use domain::{Category, Domain, MAX_UNIVERSE_SYMBOLS};
pub use error::{VerdictError, VerdictResult};
pub use inference::{has_model, model_check};
pub use investigation::{
    Candidate, CategoryStatus, Classification, FactOutcome, Investigation, ItemStatus,
    StatusReport,
};
pub use logic::{Model, Sentence};

#[cfg(test)]
mod tests;
