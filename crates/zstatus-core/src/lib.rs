//! Core zstatus library: collectors, composition, scheduling, and sinks.
//!
//! Data flow per cycle: the scheduler applies pending slow refreshes
//! (`refresh`), composes the line (`composer`), and publishes it (`sink`).

pub mod buffer;
pub mod collectors;
pub mod composer;
pub mod config;
pub mod logging;
pub mod refresh;
pub mod registry;
pub mod scheduler;
pub mod signals;
pub mod sink;
pub mod state;
pub mod template;
