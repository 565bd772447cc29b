//! B3/S23 generation step over a toroidal [`Grid`].
//!
//! Both entry points read only the prior generation and return a brand new
//! grid, so callers may keep the input around and compare against it.

use rayon::prelude::*;

use super::{Cell, Grid};

/// Boards at least this many cells large are stepped in parallel by [`advance_auto`]
pub const PARALLEL_THRESHOLD: usize = 250_000;

/// Pure serial evolution - returns the next generation
pub fn advance(grid: &Grid) -> Grid {
    let (width, height) = grid.dimensions();
    let cells = grid
        .iter_cells()
        .map(|(x, y, cell)| cell.evolve(grid.live_neighbors(x, y)))
        .collect();

    Grid::from_cells(width, height, cells)
}

/// Same result as [`advance`], rows computed on the rayon pool
pub fn advance_parallel(grid: &Grid) -> Grid {
    let (width, height) = grid.dimensions();
    if width == 0 {
        return grid.clone();
    }

    let cells: Vec<Cell> = grid
        .cells()
        .par_chunks(width)
        .enumerate()
        .flat_map_iter(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &cell)| cell.evolve(grid.live_neighbors(x, y)))
        })
        .collect();

    Grid::from_cells(width, height, cells)
}

/// Pick the serial or parallel path by board size
pub fn advance_auto(grid: &Grid) -> Grid {
    let (width, height) = grid.dimensions();
    if width * height >= PARALLEL_THRESHOLD {
        advance_parallel(grid)
    } else {
        advance(grid)
    }
}
