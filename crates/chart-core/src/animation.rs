// File: crates/chart-core/src/animation.rs
// Summary: Staggered reveal schedule; one cancelable timer per data point.
//
// The schedule keeps its own logical clock advanced by `tick(dt)`, so the host
// decides how time flows (frame callbacks, tests). Timers are tagged with the
// store generation they were armed for; a timer whose generation no longer
// matches the store is dropped without firing.

use std::collections::BTreeSet;

use tracing::debug;

use crate::types::REVEAL_STEP;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTimer {
    pub index: usize,
    /// Seconds after arming at which the element appears.
    pub delay: f32,
    pub generation: u64,
}

#[derive(Clone, Debug, Default)]
pub struct RevealSchedule {
    timers: Vec<RevealTimer>,
    elapsed: f32,
    generation: u64,
    revealed: BTreeSet<usize>,
}

impl RevealSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel everything pending and start one timer per index, `index * REVEAL_STEP` apart.
    pub fn arm(&mut self, count: usize, generation: u64) {
        self.cancel_all();
        self.revealed.clear();
        self.elapsed = 0.0;
        self.generation = generation;
        self.timers = (0..count)
            .map(|index| RevealTimer { index, delay: index as f32 * REVEAL_STEP, generation })
            .collect();
    }

    pub fn cancel_all(&mut self) {
        if !self.timers.is_empty() {
            debug!(pending = self.timers.len(), generation = self.generation, "reveal timers cancelled");
        }
        self.timers.clear();
    }

    /// Mark every index visible at once (animation disabled).
    pub fn reveal_all(&mut self, count: usize, generation: u64) {
        self.cancel_all();
        self.generation = generation;
        self.revealed = (0..count).collect();
    }

    /// Advance the clock by `dt` seconds and return the indices revealed by this step.
    pub fn tick(&mut self, dt: f32, current_generation: u64) -> Vec<usize> {
        if current_generation != self.generation {
            // Armed for a series that has since been replaced.
            self.cancel_all();
            self.revealed.clear();
            return Vec::new();
        }
        self.elapsed += dt.max(0.0);
        let elapsed = self.elapsed;
        let mut fired = Vec::new();
        self.timers.retain(|t| {
            if t.generation != current_generation {
                return false;
            }
            if t.delay <= elapsed {
                fired.push(t.index);
                return false;
            }
            true
        });
        self.revealed.extend(fired.iter().copied());
        fired
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn pending(&self) -> &[RevealTimer] {
        &self.timers
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }
}
