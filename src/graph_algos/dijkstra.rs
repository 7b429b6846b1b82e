use crate::collections::FxIndexMap;
use crate::config::SearchConfig;
use crate::geometry::Point;
use crate::grid::{neighbors as grid_neighbors, ObstacleGrid};
use super::{shortest_path, GraphNodeMap};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};



/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until node meets goal criteria
/// Returns the path and its cost, None if no node meets the goal
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Option<(Vec<N>, C)>
where 
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + PartialOrd + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Build the graph - terminates when the goal is met
    let (node_map, goal_index) = build_dijkstra_graph(start, neighbors, goal);

    let goal_index = goal_index?;
    let cost = node_map.get_index(goal_index)?.1.1;
    let path = shortest_path(&node_map, goal_index)?;
    Some((path, cost))
}


/// Returns a full map of the graph, includes all (reachable) nodes and costs
///
/// On a grid this is a distance map from one cell to every reachable cell:
///
/// ```
/// use gridnav::{dijkstra_nodes_full, Grid, Point};
/// use gridnav::grid::{neighbors, CornerPolicy};
///
/// let grid = Grid::new(3, 3);
/// let distances = dijkstra_nodes_full(Point::new(0, 0), |p: &Point| {
///     neighbors(&grid, *p, false, CornerPolicy::Allow)
///         .into_iter()
///         .map(|(n, _)| (n, 1u32))
/// });
///
/// assert_eq!(distances.len(), 9);
/// assert_eq!(distances.get(&Point::new(2, 2)).map(|(_, cost)| *cost), Some(4));
/// ```
pub fn dijkstra_nodes_full<N, C, IT, NN>(start: N, neighbors: NN) -> GraphNodeMap<N, C>
where 
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + PartialOrd + Copy + Debug,
    {

    let (node_map, _) = build_dijkstra_graph(start, neighbors, |_| false);
    node_map
}


/// Exact cost of the cheapest route between two grid cells under the movement
/// model of `config` (diagonals, step costs, corner policy)
/// The heuristic and epsilon are ignored
/// None if either endpoint is not walkable or the goal cannot be reached
pub fn grid_dijkstra_cost<G>(grid: &G, start: Point, goal: Point, config: &SearchConfig) -> Option<f64>
where 
    G: ObstacleGrid + ?Sized,
{
    if !grid.is_walkable(start) || !grid.is_walkable(goal) {
        return None;
    }

    let costs = config.step_costs;
    let neighbors = |p: &Point| {
        grid_neighbors(grid, *p, config.allow_diagonal, config.corner_policy)
            .into_iter()
            .map(move |(n, diagonal)| (n, costs.edge_cost(diagonal)))
    };

    dijkstra(start, neighbors, |p| *p == goal).map(|(_, cost)| cost)
}


/// Traverses the graph using Dijkstra's algorithm 
/// Returns a map of nodes with their smallest costs along with the index of the goal node
fn build_dijkstra_graph<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> (FxIndexMap<N, (Option<usize>, C)>, Option<usize>)
where 
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + PartialOrd + Copy + Debug,
    G: Fn(&N) -> bool // Returns true if goal is met
    {

    // Nodes to visit - binary heap sorts Biggest to Smallest
    // Dijkstra's algorithm uses a priority queue to always expand the least costly node first
    // We store the cost from the starting node
    let mut nodes_to_visit: BinaryHeap<NodeId<C>> = BinaryHeap::new();

    // visited nodes - cost is known, no longer need to visit
    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the map
    // the start node has no parent
    let mut nodes_map: FxIndexMap<N, (Option<usize>, C)> = FxIndexMap::default();
    
    // Add start node to the map and queue
    let start_index = nodes_map.insert_full(start, (None, Zero::zero())).0;
    nodes_to_visit.push(NodeId{
        index: start_index,
        cost: Zero::zero(), // This is the cost from the start node
    });

    // Loop over each node to visit, removing the smallest node
    while let Some(NodeId {cost, index}) = nodes_to_visit.pop() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // If cost of new node from BinaryHeap is higher than the best cost, skip it
        // This implies we've already found a better path to this node
        if cost > c {
            continue;
        }

        // Check if we've reached the goal
        if goal_fn(node) {
            return (nodes_map, Some(index));
        }
        
        // loop over neighbors
        for (neighbor, edge_cost) in neighbors(node).into_iter() {

            // new cost to reach this node = edge cost + node cost
            let new_cost = edge_cost + c;

            // Check if we've found a better path to this neighbor
            let neighbor_index;
            
            match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    neighbor_index = e.index();
                    e.insert((Some(index), new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        // We've found a better path to this neighbor
                        neighbor_index = e.index();
                        e.insert((Some(index), new_cost));
                    } else {
                        // The existing path is better, do nothing
                        continue;
                    }
                }
            }
            
            // Only add to the queue if we've found a better path
            nodes_to_visit.push(NodeId {
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }
    
    (nodes_map, None)
}


/// Node identifier 
/// - for ordering we only need cost and a way to identify the node
/// - Nodes can contain additional data, but we only need to identify them
/// - costs that do not compare (NaN) are treated as equal
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T
}

impl<T: PartialOrd> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.partial_cmp(&self.cost).unwrap_or(Ordering::Equal)
    }
}
impl<T: PartialOrd> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialOrd> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: PartialOrd> Eq for NodeId<T> {}
