//! Weighted A* pathfinding on 2D obstacle grids.
//!
//! ```
//! use gridnav::{find_path, Grid, Heuristic, Point, SearchConfig};
//!
//! let grid = Grid::from_rows(vec![
//!     vec![false, false, false, false],
//!     vec![true,  true,  true,  false],
//!     vec![false, false, false, false],
//! ]).unwrap();
//!
//! let config = SearchConfig::default()
//!     .with_heuristic(Heuristic::Euclidean)
//!     .with_diagonal(true);
//!
//! let path = find_path(&grid, Point::new(0, 0), Point::new(3, 2), &config).unwrap();
//! assert_eq!(path.points.first(), Some(&Point::new(0, 0)));
//! assert_eq!(path.points.last(), Some(&Point::new(3, 2)));
//! ```
//!
//! The search logs through the `log` facade; install any logger to see it.

pub mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod grid;
pub mod heuristic;

pub use config::SearchConfig;
pub use errors::{GridError, PathfindingError, Result};
pub use geometry::Point;
pub use graph_algos::a_star::{find_path, AStar, GridPath};
pub use graph_algos::dijkstra::{dijkstra, dijkstra_nodes_full, grid_dijkstra_cost};
pub use graph_algos::PriorityQueue;
pub use grid::{CornerPolicy, Grid, ObstacleGrid};
pub use heuristic::{Heuristic, StepCosts};
