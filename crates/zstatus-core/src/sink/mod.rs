//! Publish targets for the composed status line.
//!
//! - `stream`: one line per cycle on a text stream (stdout)
//! - `property`: the X11 root window name, as read by dwm-style bars

mod property;
mod stream;

use anyhow::Result;

pub use property::PropertySink;
pub use stream::StreamSink;

/// A place the status line is published to.
///
/// Any error returned here is fatal to the process.
pub trait Sink {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn publish(&mut self, line: &str) -> Result<()>;

    /// Clears published state. Called once, on clean termination only.
    fn teardown(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Opens the sink chosen at startup.
pub fn open(stream_only: bool) -> Result<Box<dyn Sink>> {
    if stream_only {
        Ok(Box::new(StreamSink::stdout()))
    } else {
        Ok(Box::new(PropertySink::connect(None)?))
    }
}
