// Domain layer - board, cells and the generation rule
pub mod domain;

// Application layer - save slot, tick scheduling and the simulation controller
pub mod application;

// Infrastructure layer - layout, input routing, rendering
pub mod ui;
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError, advance};
pub use application::{Simulation, SimulationConfig, SnapshotStore, TickScheduler};
pub use input::{Action, Control, InputEvent, InputRouter};
pub use ui::{GridLayout, InteractiveRegion};
