use std::time::Duration;

use log::{debug, error, info};

use super::{SimulationConfig, SnapshotStore, TickScheduler};
use crate::domain::{Grid, GridError, advance_auto};
use crate::input::{Action, Control, InputEvent, InputRouter};

/// Whether the frame loop should keep going after handling input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Simulation owns everything that changes while the program runs:
/// the live board, the save slot and the tick scheduler.
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    snapshot: SnapshotStore,
    scheduler: TickScheduler,
    generation: u64,
}

impl Simulation {
    /// Random initial board; the save slot starts out holding a copy of it
    pub fn new(config: SimulationConfig) -> Self {
        let (w, h, p) = (config.grid_width, config.grid_height, config.alive_probability);
        let grid = match config.seed {
            Some(seed) => Grid::seeded(w, h, p, seed),
            None => Grid::random(w, h, p),
        };
        info!("{w}x{h} board seeded with {} live cells", grid.alive_count());

        Self {
            snapshot: SnapshotStore::new(&grid),
            scheduler: TickScheduler::new(config.tick_interval),
            grid,
            config,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Generations advanced this session. Loading a save does not rewind it.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the board with its next generation
    pub fn step(&mut self) {
        self.grid = advance_auto(&self.grid);
        self.generation += 1;
        debug!("generation {} has {} live cells", self.generation, self.grid.alive_count());
    }

    /// Apply one resolved action. Only a toggle can fail, and only for coordinates
    /// the router would never produce.
    pub fn apply(&mut self, action: Action, now: Duration) -> Result<(), GridError> {
        match action {
            Action::Control(Control::Start) => {
                info!("simulation started, ticking every {:?}", self.scheduler.interval());
                if self.scheduler.start(now) {
                    self.step();
                }
            }
            Action::Control(Control::Stop) => {
                info!("simulation stopped at generation {}", self.generation);
                self.scheduler.stop();
            }
            Action::Control(Control::Save) => {
                info!("board saved");
                self.snapshot.save(&self.grid);
            }
            Action::Control(Control::Load) => {
                info!("board loaded");
                self.grid = self.snapshot.load();
            }
            Action::ToggleCell { x, y } => {
                let cell = self.grid.toggle(x, y)?;
                debug!("cell ({x}, {y}) is now {cell:?}");
            }
        }
        Ok(())
    }

    /// Drain every queued event in order.
    /// A quit request does not cut the queue short; the rest is still applied.
    pub fn handle_events(&mut self, events: &[InputEvent], router: &InputRouter, now: Duration) -> LoopControl {
        let mut control = LoopControl::Continue;

        for event in events {
            if *event == InputEvent::Quit {
                control = LoopControl::Quit;
                continue;
            }
            if let Some(action) = router.dispatch(event) {
                if let Err(err) = self.apply(action, now) {
                    error!("ignoring {action:?}: {err}");
                }
            }
        }

        control
    }

    /// Advance once if the scheduler says a generation is due
    pub fn tick(&mut self, now: Duration) -> bool {
        let due = self.scheduler.poll(now);
        if due {
            self.step();
        }
        due
    }
}
