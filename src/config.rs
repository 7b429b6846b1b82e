//! Search configuration.

use crate::errors::{PathfindingError, Result};
use crate::grid::CornerPolicy;
use crate::heuristic::{Heuristic, StepCosts};


/// Parameters of one A* query
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Remaining cost estimate
    pub heuristic: Heuristic,
    /// Heuristic weight, f = g + epsilon * h. Must be >= 1.0
    pub epsilon: f64,
    /// 8-connected when true, 4-connected otherwise
    pub allow_diagonal: bool,
    pub step_costs: StepCosts,
    pub corner_policy: CornerPolicy,
    /// Stop after this many node expansions
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Manhattan,
            epsilon: 1.0,
            allow_diagonal: false,
            step_costs: StepCosts::default(),
            corner_policy: CornerPolicy::Allow,
            max_expansions: None,
        }
    }
}

impl SearchConfig {

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_diagonal(mut self, allow_diagonal: bool) -> Self {
        self.allow_diagonal = allow_diagonal;
        self
    }

    pub fn with_step_costs(mut self, step_costs: StepCosts) -> Self {
        self.step_costs = step_costs;
        self
    }

    pub fn with_corner_policy(mut self, corner_policy: CornerPolicy) -> Self {
        self.corner_policy = corner_policy;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Reject weights and step costs the search cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 1.0 {
            return Err(PathfindingError::InvalidConfig(format!("epsilon must be >= 1.0, got {}", self.epsilon)));
        }
        let StepCosts { cardinal, diagonal } = self.step_costs;
        if !cardinal.is_finite() || cardinal <= 0.0 {
            return Err(PathfindingError::InvalidConfig(format!("cardinal step cost must be > 0, got {cardinal}")));
        }
        if !diagonal.is_finite() || diagonal <= 0.0 {
            return Err(PathfindingError::InvalidConfig(format!("diagonal step cost must be > 0, got {diagonal}")));
        }
        Ok(())
    }
}
