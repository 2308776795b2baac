//! Error types for the verdict engine.

use crate::domain::Category;
use thiserror::Error;

/// Error types for engine operations. All are recoverable; an investigation
/// session continues after any of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerdictError {
    /// The named item does not exist in the given category of the domain.
    #[error("no {category} named '{name}' in this case")]
    UnknownItem { category: Category, name: String },

    /// The knowledge base has no satisfying model. Detected lazily when
    /// candidates or a solution are requested; unreachable as long as every
    /// mutation goes through the guarded assert/exclude operations.
    #[error("the knowledge base is inconsistent; no valid solutions exist")]
    Inconsistent,

    /// A domain category was configured with no items.
    #[error("the {0} category has no items")]
    EmptyCategory(Category),

    /// The same item name appears twice in the domain, either within one
    /// category or across categories.
    #[error("item '{0}' appears more than once in the domain")]
    DuplicateItem(String),

    /// The combined symbol universe is too large to enumerate exhaustively.
    #[error("universe of {size} symbols exceeds the supported maximum of {max}")]
    UniverseTooLarge { size: usize, max: usize },
}

/// Result type for verdict operations
pub type VerdictResult<T> = Result<T, VerdictError>;
