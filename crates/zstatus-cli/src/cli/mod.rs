//! CLI entry and dispatch.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use zstatus_core::composer::Composer;
use zstatus_core::config::Config;
use zstatus_core::scheduler::Scheduler;
use zstatus_core::state::RunState;
use zstatus_core::{logging, signals, sink};

#[derive(Parser, Debug)]
#[command(name = "zstatus")]
#[command(version)]
#[command(about = "Status line for the X root window name or stdout")]
struct Cli {
    /// Write lines to stdout instead of setting the root window name
    #[arg(short = 's')]
    stream: bool,

    /// Compose and publish once, then exit (implies -s)
    #[arg(short = '1')]
    once: bool,

    /// Config file to use (default: $ZSTATUS_HOME/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn run_state(&self) -> RunState {
        if self.once {
            RunState::one_shot()
        } else {
            RunState::new(self.stream)
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("load config")?;

    let _logging = logging::init(config.log_file.as_deref())?;

    // single-threaded: collectors, composition and publish never overlap
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("create tokio runtime")?;

    rt.block_on(async move { dispatch(&cli, config).await })
}

async fn dispatch(cli: &Cli, config: Config) -> Result<()> {
    let run = Arc::new(cli.run_state());
    signals::spawn_listener(Arc::clone(&run))?;

    let mut sink = sink::open(run.stream_only())?;
    let composer = Composer::new(
        Arc::new(config.registry()),
        config.max_len,
        config.unknown.clone(),
    );

    Scheduler::new(composer, config.interval(), run)
        .run(sink.as_mut())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_parse_separately_and_combined() {
        let cli = Cli::try_parse_from(["zstatus", "-s"]).unwrap();
        assert!(cli.stream && !cli.once);

        let cli = Cli::try_parse_from(["zstatus", "-s1"]).unwrap();
        assert!(cli.stream && cli.once);
    }

    #[test]
    fn test_once_implies_stream_sink() {
        let cli = Cli::try_parse_from(["zstatus", "-1"]).unwrap();
        let state = cli.run_state();
        assert!(state.stream_only());
        assert!(state.is_done());
    }

    #[test]
    fn test_default_is_window_mode() {
        let cli = Cli::try_parse_from(["zstatus"]).unwrap();
        assert!(!cli.run_state().stream_only());
    }

    #[test]
    fn test_rejects_positional_and_unknown_flags() {
        assert!(Cli::try_parse_from(["zstatus", "extra"]).is_err());
        assert!(Cli::try_parse_from(["zstatus", "-x"]).is_err());
    }
}
