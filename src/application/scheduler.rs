use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SchedulerState {
    #[default]
    Stopped,
    Running,
}

/// Decides when the next generation is due.
///
/// Time is passed in explicitly as the duration since the loop started, so the
/// scheduler never reads a clock itself. Due-ness is only checked when polled,
/// which makes tick resolution as coarse as the caller's frame rate.
#[derive(Clone, Debug)]
pub struct TickScheduler {
    state: SchedulerState,
    interval: Duration,
    last_tick: Duration,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            state: SchedulerState::Stopped,
            interval,
            last_tick: Duration::ZERO,
        }
    }

    /// Enter `Running` and restart the interval at `now`.
    ///
    /// Always returns `true`: starting owes one generation immediately, after which
    /// ticks wait a full interval. Starting while already running does the same.
    #[must_use]
    pub fn start(&mut self, now: Duration) -> bool {
        self.state = SchedulerState::Running;
        self.last_tick = now;
        true
    }

    pub fn stop(&mut self) {
        self.state = SchedulerState::Stopped;
    }

    /// Returns `true` when a generation is due, recording `now` as the tick time
    #[must_use]
    pub fn poll(&mut self, now: Duration) -> bool {
        if self.state != SchedulerState::Running {
            return false;
        }

        if now.saturating_sub(self.last_tick) >= self.interval {
            self.last_tick = now;
            true
        } else {
            false
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_tick(&self) -> Duration {
        self.last_tick
    }
}
