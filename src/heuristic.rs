use crate::geometry::{Point, manhattan_distance, euclidean, octile_distance};


/// Cost of a single move on the grid
/// cardinal = D1, diagonal = D2
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StepCosts {
    pub cardinal: f64,
    pub diagonal: f64,
}

impl StepCosts {

    /// D1 = d1, D2 = sqrt(2) * d1
    pub fn uniform(d1: f64) -> Self {
        Self {
            cardinal: d1,
            diagonal: std::f64::consts::SQRT_2 * d1,
        }
    }

    pub fn edge_cost(&self, diagonal: bool) -> f64 {
        if diagonal { self.diagonal } else { self.cardinal }
    }
}

impl Default for StepCosts {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}


/// Estimate of the remaining cost between two cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// D1 * (|dx| + |dy|)
    #[default]
    Manhattan,
    /// D1 * sqrt(dx^2 + dy^2)
    Euclidean,
    /// D1 * (|dx| + |dy|) + (D2 - 2 * D1) * min(|dx|, |dy|)
    Octile,
}

impl Heuristic {

    pub fn estimate(&self, a: Point, b: Point, costs: &StepCosts) -> f64 {
        let (x1, y1, x2, y2) = (a.x as f64, a.y as f64, b.x as f64, b.y as f64);
        match self {
            Heuristic::Manhattan => costs.cardinal * manhattan_distance(x1, y1, x2, y2),
            Heuristic::Euclidean => costs.cardinal * euclidean(x1, y1, x2, y2),
            Heuristic::Octile => octile_distance(x1, y1, x2, y2, costs.cardinal, costs.diagonal),
        }
    }

    /// Whether the estimate is a consistent lower bound on the remaining cost
    /// for the given movement mode, so A* without reopening returns an optimal route
    ///
    /// 4-connected: the true open-grid cost is D1 * (|dx| + |dy|)
    /// - Manhattan and Euclidean never exceed it
    /// - Octile exceeds it once D2 > 2 * D1 (its min(|dx|, |dy|) term turns positive)
    ///
    /// 8-connected:
    /// - Manhattan needs D2 >= 2 * D1, otherwise a diagonal beats the two cardinal steps it counts
    /// - Euclidean needs D2 >= sqrt(2) * D1, the cheapest cost per unit of distance
    /// - Octile needs D1 <= D2 <= 2 * D1, below D1 a zig-zag of diagonals beats a straight line
    pub fn is_admissible_for(&self, allow_diagonal: bool, costs: &StepCosts) -> bool {
        let StepCosts { cardinal, diagonal } = *costs;
        match (self, allow_diagonal) {
            (Heuristic::Manhattan, false) => true,
            (Heuristic::Manhattan, true) => diagonal >= 2.0 * cardinal,
            (Heuristic::Euclidean, false) => true,
            (Heuristic::Euclidean, true) => diagonal >= std::f64::consts::SQRT_2 * cardinal,
            (Heuristic::Octile, false) => diagonal <= 2.0 * cardinal,
            (Heuristic::Octile, true) => cardinal <= diagonal && diagonal <= 2.0 * cardinal,
        }
    }
}
