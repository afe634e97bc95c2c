use crate::moves::Move;

/// Failures caused by a malformed puzzle or an unplayable move sequence.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("invalid grid: {reason}")]
    InvalidGrid { reason: String },

    #[error("grid has no blank cell")]
    MissingBlank,

    #[error("move {step} ({mv}) takes the blank off the board")]
    IllegalMove { step: usize, mv: Move },
}

impl PuzzleError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        PuzzleError::InvalidGrid {
            reason: reason.into(),
        }
    }
}

/// Terminal outcomes of a search that did not produce a path.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("both frontiers emptied without meeting after {expanded} expansions")]
    SearchExhausted { expanded: usize },

    #[error("no solution within {max_depth} moves ({expanded} expansions)")]
    DepthLimitReached { max_depth: usize, expanded: usize },

    #[error("node budget of {budget} spent without a solution ({expanded} expansions)")]
    NodeBudgetExhausted { budget: usize, expanded: usize },

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}
