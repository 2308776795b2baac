//! Propositional sentence model
//!
//! This module contains the core logical vocabulary:
//! - `Sentence` for propositional formulas (symbols, negation, conjunction, disjunction)
//! - `Model` for transient truth assignments used during enumeration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A propositional formula over named atomic symbols.
///
/// Sentences are immutable values with structural equality: two sentences are
/// equal iff they have the same shape and the same operands in the same order.
/// Operand order inside `And`/`Or` is significant for equality and therefore
/// for knowledge-base deduplication, even though it is irrelevant to the
/// truth conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentence {
    /// An atomic proposition, identified by name.
    Symbol(String),
    /// Logical negation.
    Not(Box<Sentence>),
    /// Logical conjunction over one or more operands.
    And(Vec<Sentence>),
    /// Logical disjunction over one or more operands.
    Or(Vec<Sentence>),
}

impl Sentence {
    /// Create an atomic symbol sentence.
    pub fn symbol(name: impl Into<String>) -> Self {
        Sentence::Symbol(name.into())
    }

    /// Negate a sentence.
    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Sentence) -> Self {
        Sentence::Not(Box::new(inner))
    }

    /// Conjoin one or more sentences. Operands must be non-empty.
    pub fn and(operands: Vec<Sentence>) -> Self {
        debug_assert!(!operands.is_empty(), "And requires at least one operand");
        Sentence::And(operands)
    }

    /// Disjoin one or more sentences. Operands must be non-empty.
    pub fn or(operands: Vec<Sentence>) -> Self {
        debug_assert!(!operands.is_empty(), "Or requires at least one operand");
        Sentence::Or(operands)
    }

    /// Evaluate this sentence against a truth assignment.
    ///
    /// Symbols missing from the model are treated as false. The match is
    /// exhaustive over the closed variant set, so there is no "unknown
    /// sentence shape" failure mode.
    pub fn evaluate(&self, model: &Model<'_>) -> bool {
        match self {
            Sentence::Symbol(name) => model.value(name),
            Sentence::Not(inner) => !inner.evaluate(model),
            Sentence::And(operands) => operands.iter().all(|s| s.evaluate(model)),
            Sentence::Or(operands) => operands.iter().any(|s| s.evaluate(model)),
        }
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentence::Symbol(name) => write!(f, "{}", name),
            Sentence::Not(inner) => write!(f, "¬{}", inner),
            Sentence::And(operands) => write_operands(f, operands, " ∧ "),
            Sentence::Or(operands) => write_operands(f, operands, " ∨ "),
        }
    }
}

fn write_operands(f: &mut fmt::Formatter<'_>, operands: &[Sentence], sep: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", sep)?;
        }
        write!(f, "{}", operand)?;
    }
    write!(f, ")")
}

/// A truth assignment for symbols, used transiently during model enumeration.
///
/// Lookups of symbols that were never set return false, matching the
/// evaluation semantics for partial assignments.
#[derive(Debug, Clone, Default)]
pub struct Model<'a> {
    values: HashMap<&'a str, bool>,
}

impl<'a> Model<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: HashMap::with_capacity(capacity),
        }
    }

    /// Set the truth value of a symbol.
    pub fn set(&mut self, name: &'a str, value: bool) {
        self.values.insert(name, value);
    }

    /// Truth value of a symbol, false when unassigned.
    pub fn value(&self, name: &str) -> bool {
        self.values.get(name).copied().unwrap_or(false)
    }
}
