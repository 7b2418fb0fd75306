// src/application/admission.rs
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Idle,
    Running { release_at: Instant },
}

/// Single-slot admission control for notebook runs.
///
/// Acquiring the slot marks it busy until `window` has elapsed. The slot is
/// released by time only: it does not know when the admitted run finishes,
/// and every caller shares the same slot regardless of which notebooks it
/// runs.
#[derive(Debug)]
pub struct RunGate {
    window: Duration,
    state: Mutex<SlotState>,
}

impl RunGate {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: Mutex::new(SlotState::Idle),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn try_acquire(&self) -> bool {
        self.try_acquire_at(Instant::now())
    }

    /// Take the slot if it is idle or its hold has expired at `now`.
    pub fn try_acquire_at(&self, now: Instant) -> bool {
        let mut state = self.lock();
        match *state {
            SlotState::Running { release_at } if now < release_at => {
                debug!(remaining = ?release_at - now, "Run slot busy");
                false
            }
            _ => {
                *state = SlotState::Running {
                    release_at: now + self.window,
                };
                debug!(window = ?self.window, "Run slot acquired");
                true
            }
        }
    }

    /// Current state as observed at `now`; an expired hold reads as idle.
    pub fn state_at(&self, now: Instant) -> SlotState {
        match *self.lock() {
            SlotState::Running { release_at } if now < release_at => {
                SlotState::Running { release_at }
            }
            _ => SlotState::Idle,
        }
    }

    fn lock(&self) -> MutexGuard<'_, SlotState> {
        // The guarded value is a plain enum; a panic mid-update cannot leave it torn.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
