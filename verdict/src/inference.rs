//! Brute-force entailment and satisfiability checking.
//!
//! Both entry points enumerate every truth assignment over the supplied
//! symbol universe. The cost is O(2^n · |KB|) per call, which is the intended
//! design for the small, fixed universes this engine targets; the contract of
//! `model_check` and `has_model` deliberately hides the enumeration so a
//! cleverer procedure could replace it without touching callers.

use crate::logic::{Model, Sentence};

/// Does the knowledge base entail `query`?
///
/// True iff every assignment over `symbols` that satisfies all of `kb` also
/// satisfies `query`. An unsatisfiable knowledge base entails everything
/// vacuously; callers that care must check satisfiability separately.
pub fn model_check(kb: &[Sentence], query: &Sentence, symbols: &[String]) -> bool {
    assignments(symbols).all(|model| {
        if kb.iter().all(|s| s.evaluate(&model)) {
            query.evaluate(&model)
        } else {
            true
        }
    })
}

/// Is there at least one assignment over `symbols` satisfying every sentence?
pub fn has_model<'s, I>(sentences: I, symbols: &[String]) -> bool
where
    I: Iterator<Item = &'s Sentence> + Clone,
{
    assignments(symbols).any(|model| sentences.clone().all(|s| s.evaluate(&model)))
}

/// All 2^n truth assignments over `symbols`, in ascending bit order.
pub(crate) fn assignments(symbols: &[String]) -> impl Iterator<Item = Model<'_>> {
    let n = symbols.len();
    debug_assert!(n < u64::BITS as usize, "universe too large to enumerate");
    (0u64..(1u64 << n)).map(move |bits| {
        let mut model = Model::with_capacity(n);
        for (i, name) in symbols.iter().enumerate() {
            model.set(name, (bits >> i) & 1 == 1);
        }
        model
    })
}
