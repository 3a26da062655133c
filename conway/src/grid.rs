// grid.rs - Grid types for Conway's Game of Life

use anyhow::ensure;

/// Visible playing area in cells, plus the offscreen margin kept on every side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,   // Visible columns
    pub height: usize,  // Visible rows
    pub margin: usize,  // Hidden cells on each side
}

impl Viewport {
    pub fn new(width: usize, height: usize, margin: usize) -> anyhow::Result<Self> {
        ensure!(width > 0 && height > 0, "viewport must be at least 1x1 cells, got {width}x{height}");
        Ok(Self { width, height, margin })
    }

    pub fn full_width(&self) -> usize {
        self.width + 2 * self.margin
    }

    pub fn full_height(&self) -> usize {
        self.height + 2 * self.margin
    }

    /// True when `(x, y)` lies inside the visible rectangle.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Maps visible coordinates into the allocated grid.
    pub fn to_full(&self, x: usize, y: usize) -> (usize, usize) {
        (x + self.margin, y + self.margin)
    }
}

/// How neighbour counting treats the edge of the allocated grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Boundary {
    /// Finite universe: the 3x3 block is clipped at each edge.
    #[default]
    Clamped,
    /// Opposite edges are adjacent.
    Toroidal,
}

/// Rectangular boolean matrix, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    pub fn toggle(&mut self, x: usize, y: usize) {
        let idx = self.index(x, y);
        self.cells[idx] = !self.cells[idx];
    }

    pub fn fill(&mut self, alive: bool) {
        self.cells.fill(alive);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Counts live cells in the 3x3 block around `(x, y)`, excluding the cell itself.
    pub fn alive_neighbors(&self, x: usize, y: usize, boundary: Boundary) -> usize {
        match boundary {
            Boundary::Clamped => {
                let mut count = 0;
                for j in y.saturating_sub(1)..(y + 2).min(self.height) {
                    for i in x.saturating_sub(1)..(x + 2).min(self.width) {
                        count += self.get(i, j) as usize;
                    }
                }
                count - self.get(x, y) as usize
            }
            Boundary::Toroidal => {
                let (w, h) = (self.width as isize, self.height as isize);
                let mut count = 0;
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        if (dx, dy) == (0, 0) {
                            continue;
                        }
                        let i = (x as isize + dx).rem_euclid(w) as usize;
                        let j = (y as isize + dy).rem_euclid(h) as usize;
                        count += self.get(i, j) as usize;
                    }
                }
                count
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_viewport_is_rejected() {
        assert!(Viewport::new(0, 5, 2).is_err());
        assert!(Viewport::new(5, 0, 0).is_err());
        assert!(Viewport::new(1, 1, 0).is_ok());
    }

    #[test]
    fn viewport_offsets_by_margin() {
        let vp = Viewport::new(10, 4, 3).unwrap();
        assert_eq!((vp.full_width(), vp.full_height()), (16, 10));
        assert_eq!(vp.to_full(0, 0), (3, 3));
        assert!(vp.contains(9, 3));
        assert!(!vp.contains(10, 0));
        assert!(!vp.contains(0, 4));
    }

    #[test]
    fn clamped_corner_has_three_neighbours() {
        let mut grid = Grid::new(3, 3);
        grid.fill(true);
        assert_eq!(grid.alive_neighbors(0, 0, Boundary::Clamped), 3);
        assert_eq!(grid.alive_neighbors(1, 0, Boundary::Clamped), 5);
        assert_eq!(grid.alive_neighbors(1, 1, Boundary::Clamped), 8);
    }

    #[test]
    fn toroidal_wraps_around_edges() {
        let mut grid = Grid::new(5, 5);
        grid.set(4, 4, true);
        grid.set(0, 4, true);
        assert_eq!(grid.alive_neighbors(0, 0, Boundary::Clamped), 0);
        assert_eq!(grid.alive_neighbors(0, 0, Boundary::Toroidal), 2);
    }

    #[test]
    fn centre_is_not_its_own_neighbour() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, true);
        assert_eq!(grid.alive_neighbors(1, 1, Boundary::Clamped), 0);
        assert_eq!(grid.alive_neighbors(1, 1, Boundary::Toroidal), 0);
        assert_eq!(grid.alive_neighbors(0, 0, Boundary::Clamped), 1);
    }

    #[test]
    #[should_panic(expected = "outside 3x3 grid")]
    fn out_of_bounds_access_panics() {
        Grid::new(3, 3).get(3, 0);
    }
}
