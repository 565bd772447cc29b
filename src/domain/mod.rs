mod cell;
mod error;
mod grid;
pub mod rules;

pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
pub use rules::{advance, advance_parallel, advance_auto};
