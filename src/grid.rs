use crate::errors::GridError;
use crate::geometry::{Point, CARDINAL_OFFSETS, DIAGONAL_OFFSETS};


/// Read-only view of an obstacle map the search runs over
/// Cells outside [0, width) x [0, height) do not exist
pub trait ObstacleGrid {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// True if the in-bounds cell at p is blocked
    fn is_obstacle(&self, p: Point) -> bool;

    fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width() && (p.y as usize) < self.height()
    }

    /// In bounds and free
    fn is_walkable(&self, p: Point) -> bool {
        self.in_bounds(p) && !self.is_obstacle(p)
    }
}


/// Whether a diagonal step may pass the corner of an obstacle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CornerPolicy {
    /// Any diagonal step into a walkable cell is legal
    #[default]
    Allow,
    /// Reject a diagonal step when both flanking orthogonal cells are obstacles
    NoSqueeze,
    /// Reject a diagonal step when either flanking orthogonal cell is an obstacle
    NoCutting,
}

impl CornerPolicy {

    /// Checks the two cells flanking a diagonal step from `from` by (dx, dy)
    pub fn permits<G: ObstacleGrid + ?Sized>(&self, grid: &G, from: Point, dx: i32, dy: i32) -> bool {
        let side_a = grid.is_walkable(from.offset(dx, 0));
        let side_b = grid.is_walkable(from.offset(0, dy));
        match self {
            CornerPolicy::Allow => true,
            CornerPolicy::NoSqueeze => side_a || side_b,
            CornerPolicy::NoCutting => side_a && side_b,
        }
    }
}


/// Dense obstacle matrix stored row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>, // true = obstacle
}

impl Grid {

    /// Create an obstacle-free grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Build from a matrix addressed [row][col], true = obstacle
    /// Every row must have the same, non-zero length
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }

        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::Ragged { row, expected: width, found: values.len() });
            }
            cells.extend(values);
        }

        Ok(Self { width, height, cells })
    }

    /// Block or clear a cell, out of bounds points are ignored
    pub fn set_obstacle(&mut self, p: Point, blocked: bool) {
        if let Some(i) = self.cell_index(p) {
            self.cells[i] = blocked;
        }
    }

    fn cell_index(&self, p: Point) -> Option<usize> {
        if self.in_bounds(p) {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }
}

impl ObstacleGrid for Grid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_obstacle(&self, p: Point) -> bool {
        self.cell_index(p).map(|i| self.cells[i]).unwrap_or(true)
    }
}


/// Walkable neighbors of p, cardinals first then diagonals (if allowed)
/// Each entry carries whether the move is diagonal
pub fn neighbors<G: ObstacleGrid + ?Sized>(grid: &G, p: Point, allow_diagonal: bool, corner_policy: CornerPolicy) -> Vec<(Point, bool)> {
    let mut out = Vec::with_capacity(if allow_diagonal { 8 } else { 4 });

    for (dx, dy) in CARDINAL_OFFSETS {
        let n = p.offset(dx, dy);
        if grid.is_walkable(n) {
            out.push((n, false));
        }
    }

    if allow_diagonal {
        for (dx, dy) in DIAGONAL_OFFSETS {
            let n = p.offset(dx, dy);
            if grid.is_walkable(n) && corner_policy.permits(grid, p, dx, dy) {
                out.push((n, true));
            }
        }
    }

    out
}


#[cfg(test)]
pub(crate) mod test_util {
    use super::Grid;

    /// Parse rows of '.' (free) and '#' (obstacle)
    pub(crate) fn ascii_grid(rows: &[&str]) -> Grid {
        let rows = rows
            .iter()
            .map(|r| r.chars().map(|c| c == '#').collect())
            .collect();
        Grid::from_rows(rows).unwrap()
    }
}
