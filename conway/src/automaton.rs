// automaton.rs - Double-buffered Game of Life stepping

use log::{debug, trace};
use rand::Rng;

use crate::grid::{Boundary, Grid, Viewport};

/// Two same-shaped grids: `buffers[active]` is the current generation, the
/// other holds the generation before it and is only read while stepping.
#[derive(Clone, Debug)]
pub struct Automaton {
    buffers: [Grid; 2],
    active: usize,
    viewport: Viewport,
    boundary: Boundary,
    generation: u64,
}

impl Automaton {
    pub fn new(viewport: Viewport, boundary: Boundary) -> Self {
        let (w, h) = (viewport.full_width(), viewport.full_height());
        debug!("allocating {w}x{h} grid for {}x{} viewport", viewport.width, viewport.height);
        Self {
            buffers: [Grid::new(w, h), Grid::new(w, h)],
            active: 0,
            viewport,
            boundary,
            generation: 0,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current generation, margin included.
    pub fn grid(&self) -> &Grid {
        &self.buffers[self.active]
    }

    /// Generation the current one was computed from.
    pub fn previous(&self) -> &Grid {
        &self.buffers[self.active ^ 1]
    }

    fn grid_mut(&mut self) -> &mut Grid {
        &mut self.buffers[self.active]
    }

    /// Render query for visible coordinates.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        let (fx, fy) = self.visible(x, y);
        self.grid().get(fx, fy)
    }

    /// Live cells inside the visible rectangle.
    pub fn population(&self) -> usize {
        let vp = self.viewport;
        (0..vp.height)
            .map(|y| (0..vp.width).filter(|&x| self.is_alive(x, y)).count())
            .sum()
    }

    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        let (fx, fy) = self.visible(x, y);
        self.grid_mut().toggle(fx, fy);
    }

    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) {
        let (fx, fy) = self.visible(x, y);
        self.grid_mut().set(fx, fy, alive);
    }

    pub fn clear(&mut self) {
        self.grid_mut().fill(false);
        self.generation = 0;
        debug!("grid cleared");
    }

    /// Resamples every cell, margin included, alive with probability 0.5.
    pub fn random_fill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let grid = &mut self.buffers[self.active];
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                grid.set(x, y, rng.gen_bool(0.5));
            }
        }
        self.generation = 0;
        debug!("random fill, {} cells alive", grid.population());
    }

    pub fn randomize(&mut self) {
        self.random_fill(&mut rand::thread_rng());
    }

    /// Advances one generation over the whole allocated grid.
    pub fn step(&mut self) {
        self.active ^= 1;
        let boundary = self.boundary;
        let (previous, next) = match self.active {
            0 => {
                let [next, previous] = &mut self.buffers;
                (&*previous, next)
            }
            _ => {
                let [previous, next] = &mut self.buffers;
                (&*previous, next)
            }
        };

        for y in 0..previous.height() {
            for x in 0..previous.width() {
                let alive = match previous.alive_neighbors(x, y, boundary) {
                    n if n < 2 => false,
                    n if n > 3 => false,
                    3 => true,
                    _ => previous.get(x, y),
                };
                next.set(x, y, alive);
            }
        }

        self.generation += 1;
        trace!("generation {}: {} alive", self.generation, next.population());
    }

    fn visible(&self, x: usize, y: usize) -> (usize, usize) {
        assert!(
            self.viewport.contains(x, y),
            "cell ({x}, {y}) outside visible {}x{} area",
            self.viewport.width,
            self.viewport.height
        );
        self.viewport.to_full(x, y)
    }
}
