use std::cmp::Ordering;

use crate::geometry::Point;


/// Where a node is in the search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
    Undiscovered, // created but never queued
    Open, // on the frontier
    Closed, // expanded, cost is final
}

/// Per-position search state, lives in the node arena for one query
/// parent is the arena index of the predecessor, None for the start node
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub position: Point,
    pub g: f64, // best known cost from start
    pub h: f64, // heuristic to goal, already scaled by epsilon
    pub parent: Option<usize>,
    pub state: NodeState,
}

impl SearchNode {

    pub fn new(position: Point, g: f64, h: f64, parent: Option<usize>) -> Self {
        Self {
            position,
            g,
            h,
            parent,
            state: NodeState::Open,
        }
    }

    /// Node seen for the first time, no known path yet
    pub fn undiscovered(position: Point) -> Self {
        Self {
            state: NodeState::Undiscovered,
            ..Self::new(position, f64::INFINITY, 0.0, None)
        }
    }

    pub fn f(&self) -> f64 {
        self.g + self.h
    }

    /// Heap ordering key of the node
    pub fn key(&self) -> SearchKey {
        SearchKey {
            f: self.f(),
            h: self.h,
            position: self.position,
        }
    }

    /// Record a strictly better path through `parent`
    /// Returns false (and changes nothing) if g_new does not improve on g
    pub fn relax(&mut self, g_new: f64, h: f64, parent: usize) -> bool {
        if g_new < self.g {
            self.g = g_new;
            self.h = h;
            self.parent = Some(parent);
            true
        } else {
            false
        }
    }
}


/// Priority of a frontier entry: f ascending, then h ascending
/// Equal (f, h) pairs fall back to row-major position so the order is total
#[derive(Clone, Copy, Debug)]
pub struct SearchKey {
    pub f: f64,
    pub h: f64,
    pub position: Point,
}

impl Ord for SearchKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f.total_cmp(&other.f)
            .then_with(|| self.h.total_cmp(&other.h))
            .then_with(|| self.position.cmp(&other.position))
    }
}
impl PartialOrd for SearchKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for SearchKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for SearchKey {}


#[cfg(test)]
mod tests {
    use super::*;

    fn key(f: f64, h: f64, x: i32, y: i32) -> SearchKey {
        SearchKey { f, h, position: Point::new(x, y) }
    }

    #[test]
    fn test_key_orders_by_f_then_h() {
        assert!(key(1.0, 5.0, 0, 0) < key(2.0, 0.0, 0, 0));
        // Same f: closer to goal wins
        assert!(key(3.0, 1.0, 9, 9) < key(3.0, 2.0, 0, 0));
        // Same f and h: position decides
        assert!(key(3.0, 1.0, 1, 0) < key(3.0, 1.0, 0, 1));
        assert_eq!(key(3.0, 1.0, 2, 2), key(3.0, 1.0, 2, 2));
    }

    #[test]
    fn test_relax_only_improves() {
        let mut node = SearchNode::undiscovered(Point::new(1, 1));
        assert_eq!(node.g, f64::INFINITY);
        assert_eq!(node.state, NodeState::Undiscovered);

        assert!(node.relax(4.0, 2.0, 0));
        assert_eq!(node.f(), 6.0);
        assert_eq!(node.parent, Some(0));

        // Equal or worse cost leaves the node untouched
        assert!(!node.relax(4.0, 0.0, 7));
        assert!(!node.relax(5.0, 0.0, 7));
        assert_eq!(node.parent, Some(0));
        assert_eq!(node.h, 2.0);

        assert!(node.relax(3.0, 2.0, 3));
        assert_eq!(node.g, 3.0);
        assert_eq!(node.parent, Some(3));
    }

    #[test]
    fn test_key_from_node() {
        let node = SearchNode::new(Point::new(2, 3), 1.5, 2.0, None);
        let k = node.key();
        assert_eq!(k.f, 3.5);
        assert_eq!(k.h, 2.0);
        assert_eq!(k.position, Point::new(2, 3));
        assert_eq!(node.state, NodeState::Open);
    }
}
