use thiserror::Error;

use crate::geometry::Point;

/// Reasons a path query fails
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathfindingError {
    /// Start is out of bounds or an obstacle, no search attempted
    #[error("invalid start {0}: out of bounds or blocked")]
    InvalidStart(Point),

    /// Goal is out of bounds or an obstacle, no search attempted
    #[error("invalid goal {0}: out of bounds or blocked")]
    InvalidGoal(Point),

    /// Search exhausted the reachable space without meeting the goal
    #[error("goal unreachable after expanding {expanded} nodes")]
    Unreachable { expanded: usize },

    /// The configured expansion budget ran out before the goal was reached
    #[error("expansion budget exhausted after {expanded} nodes")]
    BudgetExhausted { expanded: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, PathfindingError>;
