use crate::domain::Grid;

/// Single save slot holding an independent copy of a grid.
///
/// The slot is never empty: it starts out with the board the session began with,
/// so loading before any save restores the initial generation.
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    slot: Grid,
}

impl SnapshotStore {
    pub fn new(initial: &Grid) -> Self {
        Self { slot: initial.clone() }
    }

    /// Overwrite the slot with a copy of `grid`
    pub fn save(&mut self, grid: &Grid) {
        self.slot.clone_from(grid);
    }

    /// Copy of whatever the slot currently holds
    pub fn load(&self) -> Grid {
        self.slot.clone()
    }
}
