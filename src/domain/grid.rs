use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Cell, GridError};

/// Grid is the toroidal board the automaton lives on.
/// Dimensions are fixed at construction; cells are stored row-major.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Fresh grid where every cell is alive with `alive_probability`, seeded from the thread RNG
    pub fn random(width: usize, height: usize, alive_probability: f64) -> Self {
        let mut grid = Self::new(width, height);
        grid.randomize_with(&mut rand::rng(), alive_probability);
        grid
    }

    /// Deterministic variant of [`Grid::random`]
    pub fn seeded(width: usize, height: usize, alive_probability: f64, seed: u64) -> Self {
        let mut grid = Self::new(width, height);
        grid.randomize_with(&mut StdRng::seed_from_u64(seed), alive_probability);
        grid
    }

    /// Refill every cell independently from `rng`.
    /// The probability is clamped to `[0, 1]`.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R, alive_probability: f64) {
        let p = if alive_probability.is_nan() {
            0.0
        } else {
            alive_probability.clamp(0.0, 1.0)
        };

        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(p)));
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x < self.width && y < self.height {
            Ok(self.index(x, y))
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        self.checked_index(x, y).map(|idx| self.cells[idx])
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip a single cell and return its new value
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<Cell, GridError> {
        let idx = self.checked_index(x, y)?;
        let flipped = self.cells[idx].toggle();
        self.cells[idx] = flipped;
        Ok(flipped)
    }

    /// The 8 neighbor coordinates of `(x, y)`, wrapped around both edges.
    ///
    /// Out-of-range inputs are reduced modulo the dimensions first, so every yielded
    /// coordinate is inside the grid. An empty grid has no neighbors.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (w, h) = (self.width.max(1), self.height.max(1));
        let count = if self.cells.is_empty() { 0 } else { 8 };
        let (x, y) = (x % w, y % h);
        // Adding `w - 1` instead of subtracting 1 keeps everything unsigned
        let columns = [(x + w - 1) % w, x, (x + 1) % w];
        let rows = [(y + h - 1) % h, y, (y + 1) % h];

        rows.into_iter()
            .enumerate()
            .flat_map(move |(dy, ny)| {
                columns
                    .into_iter()
                    .enumerate()
                    .map(move |(dx, nx)| (dx, dy, nx, ny))
            })
            .filter(|&(dx, dy, _, _)| dx != 1 || dy != 1)
            .map(|(_, _, nx, ny)| (nx, ny))
            .take(count)
    }

    /// Count live neighbors using toroidal wrapping
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        self.neighbors(x, y)
            .filter(|&(nx, ny)| self.cells[self.index(nx, ny)].is_alive())
            .count() as u8
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    /// Row-major view of every cell
    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Assemble a grid from row-major cells, as produced by the rule engine
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }
}
