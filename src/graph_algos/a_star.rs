use crate::collections::FxIndexMap;
use crate::config::SearchConfig;
use crate::errors::{PathfindingError, Result};
use crate::geometry::Point;
use crate::grid::{neighbors, ObstacleGrid};
use crate::heuristic::StepCosts;
use super::{shortest_path, NodeState, PriorityQueue, SearchKey, SearchNode};

use log::{debug, trace};



/// Route returned by a successful search
#[derive(Clone, Debug, PartialEq)]
pub struct GridPath {
    /// Cells from start to goal, both included
    pub points: Vec<Point>,
    /// Sum of step costs along points, equal to the goal's final g-score
    pub cost: f64,
    /// Number of nodes expanded to find it
    pub expanded: usize,
}

impl GridPath {

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Number of moves, one less than the number of cells
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Re-add the step costs along the path
    pub fn step_cost_sum(&self, costs: &StepCosts) -> f64 {
        self.points
            .windows(2)
            .map(|w| costs.edge_cost(w[0].is_diagonal_to(&w[1])))
            .sum()
    }
}


/// Weighted A* over an obstacle grid
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// f(n) = g(n) + epsilon * h(n)
///
/// Expanded nodes are never reopened. With epsilon = 1.0 the returned path is
/// optimal only if the heuristic is consistent for the movement mode
/// (Manhattan without diagonals, Euclidean, Octile). With epsilon > 1.0 and a
/// consistent heuristic the cost stays within epsilon * optimal.
#[derive(Clone, Debug, Default)]
pub struct AStar {
    pub config: SearchConfig,
}

impl AStar {

    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Lowest cost route from start to goal
    /// Fails fast on a bad configuration or endpoint, before any search
    pub fn find_path<G>(&self, grid: &G, start: Point, goal: Point) -> Result<GridPath>
    where 
        G: ObstacleGrid + ?Sized,
    {
        self.config.validate()?;

        if !grid.is_walkable(start) {
            return Err(PathfindingError::InvalidStart(start));
        }
        if !grid.is_walkable(goal) {
            return Err(PathfindingError::InvalidGoal(goal));
        }

        let (node_map, goal_index, expanded) = self.build_graph(grid, start, goal)?;

        let points = shortest_path(&node_map, goal_index)
            .ok_or(PathfindingError::Unreachable { expanded })?;
        let cost = node_map[goal_index].g;

        debug!("a*: {start} -> {goal} cost {cost:.3}, {} cells, {expanded} expanded", points.len());

        Ok(GridPath { points, cost, expanded })
    }

    /// Cells from start to goal, None if there is no route or the input is invalid
    pub fn find_route<G>(&self, grid: &G, start: Point, goal: Point) -> Option<Vec<Point>>
    where 
        G: ObstacleGrid + ?Sized,
    {
        self.find_path(grid, start, goal).ok().map(|path| path.points)
    }


    /// Runs the search loop
    /// Returns the node arena, the arena index of the goal and the expansion count
    fn build_graph<G>(&self, grid: &G, start: Point, goal: Point) -> Result<(FxIndexMap<Point, SearchNode>, usize, usize)>
    where 
        G: ObstacleGrid + ?Sized,
    {
        let config = &self.config;
        let costs = config.step_costs;
        let h = |p: Point| config.heuristic.estimate(p, goal, &costs) * config.epsilon;

        // Every node discovered so far, the map index is the node handle
        let mut nodes: FxIndexMap<Point, SearchNode> = FxIndexMap::default();

        // Frontier of node handles keyed by (f, h)
        let mut open: PriorityQueue<usize, SearchKey> = PriorityQueue::new();

        let start_node = SearchNode::new(start, 0.0, h(start), None);
        let start_key = start_node.key();
        let start_index = nodes.insert_full(start, start_node).0;
        open.insert(start_index, start_key);

        let mut expanded = 0;

        while let Some((index, _)) = open.extract_min() {
            let current = &mut nodes[index];

            if current.position == goal {
                return Ok((nodes, index, expanded));
            }

            // The indexed queue never holds duplicates, but a closed node must not be expanded twice
            if current.state == NodeState::Closed {
                continue;
            }

            if let Some(limit) = config.max_expansions {
                if expanded >= limit {
                    debug!("a*: {start} -> {goal} gave up after {expanded} expansions");
                    return Err(PathfindingError::BudgetExhausted { expanded });
                }
            }

            current.state = NodeState::Closed;
            expanded += 1;
            let (position, g) = (current.position, current.g);
            trace!("a*: expand {position} g={g:.3} f={:.3}", current.f());

            for (neighbor, diagonal) in neighbors(grid, position, config.allow_diagonal, config.corner_policy) {
                let tentative_g = g + costs.edge_cost(diagonal);

                let entry = nodes.entry(neighbor);
                let neighbor_index = entry.index();
                let node = entry.or_insert_with(|| SearchNode::undiscovered(neighbor));

                if node.state == NodeState::Closed {
                    continue;
                }

                if !node.relax(tentative_g, h(neighbor), index) {
                    continue;
                }

                let key = node.key();
                if node.state == NodeState::Open {
                    open.update_priority(neighbor_index, key);
                } else {
                    node.state = NodeState::Open;
                    open.insert(neighbor_index, key);
                }
            }
        }

        debug!("a*: {start} -> {goal} unreachable, {expanded} expanded");
        Err(PathfindingError::Unreachable { expanded })
    }
}


/// Run A* with `config`, see [`AStar::find_path`]
pub fn find_path<G>(grid: &G, start: Point, goal: Point, config: &SearchConfig) -> Result<GridPath>
where 
    G: ObstacleGrid + ?Sized,
{
    AStar::new(*config).find_path(grid, start, goal)
}
