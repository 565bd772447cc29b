use std::time::Duration;

/// Compiled-in settings for one simulation session.
/// Nothing here can change once the loop is running.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub window_width: u32,
    pub window_height: u32,
    pub tick_interval: Duration,
    pub alive_probability: f64,
    /// Fixed seed for the initial board; `None` draws from the thread RNG
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub const GRID_WIDTH: usize = 40;
    pub const GRID_HEIGHT: usize = 30;
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 600;
    pub const TICK_INTERVAL: Duration = Duration::from_millis(1500);
    pub const ALIVE_PROBABILITY: f64 = 0.2;

    /// Builder-style seed override, mostly for tests
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_width: Self::GRID_WIDTH,
            grid_height: Self::GRID_HEIGHT,
            window_width: Self::WINDOW_WIDTH,
            window_height: Self::WINDOW_HEIGHT,
            tick_interval: Self::TICK_INTERVAL,
            alive_probability: Self::ALIVE_PROBABILITY,
            seed: None,
        }
    }
}
