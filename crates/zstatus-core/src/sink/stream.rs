use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};

use super::Sink;

/// Writes each status line followed by a newline, flushing every time.
#[derive(Debug)]
pub struct StreamSink<W: Write> {
    out: W,
}

impl StreamSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StreamSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for StreamSink<W> {
    fn name(&self) -> &'static str {
        "stream"
    }

    fn publish(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}").context("write status line")?;
        self.out.flush().context("flush status line")
    }
}
