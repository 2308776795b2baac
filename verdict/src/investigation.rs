//! Investigation state: the knowledge base and the operations over it.

use crate::constraints::exactly_one;
use crate::domain::{Category, Domain};
use crate::error::{VerdictError, VerdictResult};
use crate::inference::{assignments, has_model, model_check};
use crate::logic::{Model, Sentence};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// One investigation session over a fixed domain.
///
/// Owns the knowledge base: an ordered, duplicate-free sequence of sentences,
/// seeded with the three exactly-one constraint groups and grown one guarded
/// fact at a time. The knowledge base only ever grows, and every guarded
/// mutation leaves it satisfiable.
pub struct Investigation {
    domain: Domain,
    universe: Vec<String>,
    kb: Vec<Sentence>,
    /// Number of leading constraint sentences; everything after them is a
    /// user-supplied fact.
    baseline: usize,
}

/// Result of a guarded assert/exclude operation. Each variant carries the
/// fact it concerns so callers can echo it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "fact", rename_all = "snake_case")]
pub enum FactOutcome {
    /// The fact was new and consistent, and is now part of the knowledge base.
    Added(Sentence),
    /// The fact was already present; the knowledge base is unchanged.
    AlreadyKnown(Sentence),
    /// Adding the fact would leave the knowledge base without a satisfying
    /// model; it was refused and the knowledge base is unchanged.
    Inconsistent(Sentence),
}

/// Truth status of a single item across all models of the knowledge base.
/// Items forced false are omitted from reports rather than classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// True in every model: the investigation has pinned this item down.
    ForcedTrue,
    /// True in some models and false in others.
    Possible,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemStatus {
    pub item: String,
    pub classification: Classification,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStatus {
    pub category: Category,
    pub entries: Vec<ItemStatus>,
}

/// Per-item classification for the whole domain, plus a top-level
/// consistency flag. When `consistent` is false the category lists are
/// empty; there is nothing meaningful to classify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub consistent: bool,
    pub categories: Vec<CategoryStatus>,
}

/// One possible answer to the case: a (suspect, weapon, room) triple
/// projected from a satisfying model. Ordering is lexicographic by field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Candidate {
    pub suspect: String,
    pub weapon: String,
    pub room: String,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with {} in {}", self.suspect, self.weapon, self.room)
    }
}

impl Investigation {
    /// Start a fresh investigation: build the symbol universe and seed the
    /// knowledge base with the exactly-one constraints for each category.
    pub fn new(domain: Domain) -> Self {
        let universe = domain.universe();

        let mut kb = Vec::new();
        for category in Category::ALL {
            let symbols: Vec<Sentence> = domain
                .items(category)
                .iter()
                .map(|item| Sentence::symbol(category.symbol_name(item)))
                .collect();
            kb.extend(exactly_one(&symbols));
        }
        let baseline = kb.len();

        Self {
            domain,
            universe,
            kb,
            baseline,
        }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// The user-supplied facts, in insertion order (constraints excluded).
    pub fn facts(&self) -> &[Sentence] {
        &self.kb[self.baseline..]
    }

    /// Append sentences to the knowledge base, skipping structural
    /// duplicates. No consistency guard: callers that need one use
    /// `assert_item`/`exclude_item`, which check before adding.
    pub fn add_facts(&mut self, facts: impl IntoIterator<Item = Sentence>) {
        for fact in facts {
            if !self.kb.contains(&fact) {
                self.kb.push(fact);
            }
        }
    }

    /// Would the knowledge base stay satisfiable with these extra facts?
    pub fn consistent_with(&self, facts: &[Sentence]) -> bool {
        has_model(self.kb.iter().chain(facts.iter()), &self.universe)
    }

    pub fn is_consistent(&self) -> bool {
        self.consistent_with(&[])
    }

    /// Record that `item` is the answer in its category.
    ///
    /// The item must name a domain member exactly; free-text resolution is
    /// the caller's job. Returns `AlreadyKnown` if the positive literal is
    /// already recorded, refuses with `Inconsistent` if adding it would
    /// leave the knowledge base unsatisfiable, and otherwise adds it.
    pub fn assert_item(&mut self, category: Category, item: &str) -> VerdictResult<FactOutcome> {
        let fact = self.symbol_for(category, item)?;
        Ok(self.apply(fact))
    }

    /// Record that `item` is not the answer in its category. Same protocol
    /// as `assert_item`, operating on the negated literal.
    pub fn exclude_item(&mut self, category: Category, item: &str) -> VerdictResult<FactOutcome> {
        let fact = Sentence::not(self.symbol_for(category, item)?);
        Ok(self.apply(fact))
    }

    fn symbol_for(&self, category: Category, item: &str) -> VerdictResult<Sentence> {
        if self.domain.contains(category, item) {
            Ok(Sentence::symbol(category.symbol_name(item)))
        } else {
            Err(VerdictError::UnknownItem {
                category,
                name: item.to_string(),
            })
        }
    }

    fn apply(&mut self, fact: Sentence) -> FactOutcome {
        if self.kb.contains(&fact) {
            return FactOutcome::AlreadyKnown(fact);
        }
        if !self.consistent_with(std::slice::from_ref(&fact)) {
            return FactOutcome::Inconsistent(fact);
        }
        self.kb.push(fact.clone());
        FactOutcome::Added(fact)
    }

    /// Classify every domain item against the current knowledge base.
    ///
    /// Forced-false items (including ones the user excluded) are omitted
    /// rather than listed, so reports only show what is proven or still
    /// open. An unsatisfiable knowledge base yields a bare inconsistent
    /// report with no per-item entries.
    pub fn status(&self) -> StatusReport {
        if !self.is_consistent() {
            return StatusReport {
                consistent: false,
                categories: Vec::new(),
            };
        }

        let categories = Category::ALL
            .iter()
            .map(|&category| {
                let entries = self
                    .domain
                    .items(category)
                    .iter()
                    .filter_map(|item| {
                        let symbol = Sentence::symbol(category.symbol_name(item));
                        let classification = if model_check(&self.kb, &symbol, &self.universe) {
                            Some(Classification::ForcedTrue)
                        } else if !model_check(
                            &self.kb,
                            &Sentence::not(symbol.clone()),
                            &self.universe,
                        ) {
                            Some(Classification::Possible)
                        } else {
                            None
                        };
                        classification.map(|classification| ItemStatus {
                            item: item.clone(),
                            classification,
                        })
                    })
                    .collect();
                CategoryStatus { category, entries }
            })
            .collect();

        StatusReport {
            consistent: true,
            categories,
        }
    }

    /// All (suspect, weapon, room) triples compatible with the knowledge
    /// base, deduplicated and in lexicographic order. An unsatisfiable
    /// knowledge base is reported as an error rather than an empty list.
    pub fn candidates(&self) -> VerdictResult<Vec<Candidate>> {
        let mut found = BTreeSet::new();
        for model in assignments(&self.universe) {
            if self.kb.iter().all(|s| s.evaluate(&model)) {
                if let Some(candidate) = self.project(&model) {
                    found.insert(candidate);
                }
            }
        }
        if found.is_empty() {
            return Err(VerdictError::Inconsistent);
        }
        Ok(found.into_iter().collect())
    }

    /// The unique answer, if the facts pin one down.
    ///
    /// Returns `Some` only when every candidate agrees on the suspect AND
    /// the weapon AND the room; a single collapsed column is not enough.
    pub fn solution(&self) -> VerdictResult<Option<Candidate>> {
        let candidates = self.candidates()?;
        let Some(first) = candidates.first() else {
            return Ok(None);
        };
        let unique = candidates.iter().all(|c| {
            c.suspect == first.suspect && c.weapon == first.weapon && c.room == first.room
        });
        Ok(unique.then(|| first.clone()))
    }

    /// Project a satisfying model to its per-category true item. The
    /// exactly-one constraints guarantee a unique true symbol per category
    /// in any model that satisfies the knowledge base.
    fn project(&self, model: &Model<'_>) -> Option<Candidate> {
        let pick = |category: Category| {
            self.domain
                .items(category)
                .iter()
                .find(|item| model.value(&category.symbol_name(item)))
                .cloned()
        };
        Some(Candidate {
            suspect: pick(Category::Suspect)?,
            weapon: pick(Category::Weapon)?,
            room: pick(Category::Room)?,
        })
    }
}
