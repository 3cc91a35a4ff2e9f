//! Slow-module refresh control.
//!
//! The controller owns the cached [`SlowSection`]. It is recomputed at
//! startup, whenever a refresh is pending in [`RunState`], and once more when
//! termination is requested. Refresh requests arriving from signals are only
//! applied here, on the scheduler's own thread, between compositions; a new
//! section is built completely and then swapped in, so composition only ever
//! sees a whole section.

use crate::composer::{Composer, SlowSection};
use crate::state::RunState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    /// The cached slow section is valid and reused each tick.
    Stable,
    /// The slow section is being recomputed.
    Refreshing,
}

#[derive(Debug)]
pub struct RefreshController {
    slow: SlowSection,
    state: RefreshState,
    refreshes: u64,
}

impl RefreshController {
    /// Renders the slow modules for the first time.
    pub fn startup(composer: &Composer) -> Self {
        let mut controller = Self {
            slow: SlowSection::default(),
            state: RefreshState::Refreshing,
            refreshes: 0,
        };
        controller.refresh(composer);
        controller
    }

    /// Recomputes the slow section unconditionally.
    pub fn refresh(&mut self, composer: &Composer) {
        self.state = RefreshState::Refreshing;
        let fresh = composer.render_slow();
        tracing::debug!(len = fresh.len(), "slow modules refreshed");
        self.slow = fresh;
        self.refreshes += 1;
        self.state = RefreshState::Stable;
    }

    /// Applies a pending refresh request, if any. Returns whether it refreshed.
    pub fn apply_pending(&mut self, composer: &Composer, run: &RunState) -> bool {
        if !run.take_refresh() {
            return false;
        }
        self.refresh(composer);
        true
    }

    pub fn slow_section(&self) -> &SlowSection {
        &self.slow
    }

    /// Current slow section length, the start offset for fast modules.
    pub fn initial_len(&self) -> usize {
        self.slow.len()
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    /// Number of slow recomputes performed, including startup.
    pub fn refresh_count(&self) -> u64 {
        self.refreshes
    }
}
