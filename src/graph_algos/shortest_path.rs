use crate::collections::FxIndexMap;
use super::SearchNode;

/// A node record that knows the map index of its predecessor
pub(crate) trait ParentLink {
    fn parent(&self) -> Option<usize>;
}

impl ParentLink for SearchNode {
    fn parent(&self) -> Option<usize> {
        self.parent
    }
}

impl<C> ParentLink for (Option<usize>, C) {
    fn parent(&self) -> Option<usize> {
        self.0
    }
}

/// Construct the shortest path from the goal node to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: map of nodes to records holding their parent index
/// goal_index: index of the goal node in the node_map
/// None if goal_index or a parent link points outside the map
pub(crate) fn shortest_path<N, V>(node_map: &FxIndexMap<N, V>, goal_index: usize) -> Option<Vec<N>>
where 
    N: Clone,
    V: ParentLink,
{

    let mut path = Vec::new();
    let mut current_index = Some(goal_index);

    // Trace back from goal to start
    while let Some(index) = current_index {
        let (node, record) = node_map.get_index(index)?;
        path.push(node.clone());
        current_index = record.parent();

        // parents form a tree, a longer walk means a cycle
        debug_assert!(path.len() <= node_map.len(), "parent links form a cycle");
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Some(path)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_path_reconstruction() {
        let mut node_map: FxIndexMap<String, (Option<usize>, u32)> = FxIndexMap::default();
        
        let a_index = node_map.insert_full("A".to_string(), (None, 0)).0;
        let b_index = node_map.insert_full("B".to_string(), (Some(a_index), 1)).0;
        let c_index = node_map.insert_full("C".to_string(), (Some(a_index), 3)).0;
        let d_index = node_map.insert_full("D".to_string(), (Some(c_index), 4)).0;
        
        assert_eq!(shortest_path(&node_map, d_index).unwrap(), vec!["A", "C", "D"]);
        assert_eq!(shortest_path(&node_map, b_index).unwrap(), vec!["A", "B"]);
        assert_eq!(shortest_path(&node_map, a_index).unwrap(), vec!["A"]);
        assert_eq!(shortest_path(&node_map, 99), None);
    }

    #[test]
    fn test_search_node_reconstruction() {
        let mut node_map: FxIndexMap<Point, SearchNode> = FxIndexMap::default();
        let points = [Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)];
        let mut parent = None;
        for (i, p) in points.iter().enumerate() {
            node_map.insert(*p, SearchNode::new(*p, i as f64, 0.0, parent));
            parent = Some(i);
        }
        assert_eq!(shortest_path(&node_map, 2).unwrap(), points.to_vec());
    }
}
