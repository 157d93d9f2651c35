use std::time::Duration;

use bevy::prelude::*;
use gravity_core::config::tick_period;

/// Identifies one started timer. Restarting the clock invalidates the previous handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    pub generation: u64,
    pub period: Duration,
}

/// The single repeating timer that paces simulation ticks.
/// A restart replaces the timer outright, so two periods can never be live at once.
#[derive(Resource, Debug)]
pub struct FrameClock {
    timer: Timer,
    generation: u64,
}

impl FrameClock {
    pub fn new(frames_per_second: f32) -> Self {
        Self {
            timer: Timer::new(tick_period(frames_per_second), TimerMode::Repeating),
            generation: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.timer.duration()
    }

    pub fn handle(&self) -> TimerHandle {
        TimerHandle {
            generation: self.generation,
            period: self.period(),
        }
    }

    /// Cancel the running timer and start a fresh one at the new rate.
    /// Progress toward the old period is discarded.
    pub fn restart(&mut self, frames_per_second: f32) -> TimerHandle {
        let old = self.period();
        self.timer = Timer::new(tick_period(frames_per_second), TimerMode::Repeating);
        self.generation += 1;
        info!(
            "Frame timer restarted: {:.3} ms -> {:.3} ms",
            old.as_secs_f64() * 1000.0,
            self.period().as_secs_f64() * 1000.0
        );
        self.handle()
    }

    /// Advance by `delta` of real time; returns how many ticks fell due
    pub fn advance(&mut self, delta: Duration) -> u32 {
        self.timer.tick(delta);
        self.timer.times_finished_this_tick()
    }
}
