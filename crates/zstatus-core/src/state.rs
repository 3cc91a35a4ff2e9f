//! Process-wide run state shared between the signal listener and the scheduler.
//!
//! Signal delivery only flips flags here and wakes the scheduler. The actual
//! slow refresh runs later in ordinary control flow.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Notify;

#[derive(Debug)]
pub struct RunState {
    done: AtomicBool,
    refresh: AtomicBool,
    stream_only: bool,
    wake: Notify,
}

impl RunState {
    pub fn new(stream_only: bool) -> Self {
        Self {
            done: AtomicBool::new(false),
            refresh: AtomicBool::new(false),
            stream_only,
            wake: Notify::new(),
        }
    }

    /// State for a single-cycle run: already terminal before the first tick.
    pub fn one_shot() -> Self {
        let state = Self::new(true);
        state.done.store(true, Ordering::SeqCst);
        state
    }

    pub fn stream_only(&self) -> bool {
        self.stream_only
    }

    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }

    /// Asks for a slow-module recompute before the next compose.
    pub fn request_refresh(&self) {
        self.refresh.store(true, Ordering::SeqCst);
        self.wake.notify_one();
    }

    /// Asks for a final refresh, then a clean exit after one last publish.
    pub fn request_terminate(&self) {
        self.refresh.store(true, Ordering::SeqCst);
        self.done.store(true, Ordering::SeqCst);
        self.wake.notify_one();
    }

    /// Consumes a pending refresh request.
    pub fn take_refresh(&self) -> bool {
        self.refresh.swap(false, Ordering::SeqCst)
    }

    /// Completes when a refresh or terminate request arrives.
    ///
    /// A request made while nobody is waiting is remembered, so the next
    /// call returns immediately.
    pub async fn woken(&self) {
        self.wake.notified().await;
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new(false)
    }
}
