pub mod a_star;
pub mod dijkstra;
mod priority_queue;
mod search_node;
mod shortest_path;

pub use priority_queue::PriorityQueue;
pub use search_node::{NodeState, SearchKey, SearchNode};
use shortest_path::shortest_path;

use crate::collections::FxIndexMap;

/// Type alias for the node map used by Dijkstra
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map, None for the start node
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (Option<usize>, C)>;
