mod config;
mod scheduler;
mod simulation;
mod snapshot;

pub use config::SimulationConfig;
pub use scheduler::{SchedulerState, TickScheduler};
pub use simulation::{LoopControl, Simulation};
pub use snapshot::SnapshotStore;
