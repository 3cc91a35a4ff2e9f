use anyhow::{Context, Result};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{AtomEnum, ConnectionExt as _, PropMode, Window};
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;

use super::Sink;

/// Sets `WM_NAME` on the root window of the default screen.
pub struct PropertySink {
    conn: RustConnection,
    root: Window,
}

impl PropertySink {
    /// Connects to `display`, or to `$DISPLAY` when `None`.
    pub fn connect(display: Option<&str>) -> Result<Self> {
        let (conn, screen) = x11rb::connect(display).context("open X display")?;
        let root = conn
            .setup()
            .roots
            .get(screen)
            .map(|s| s.root)
            .with_context(|| format!("X display has no screen {screen}"))?;
        tracing::info!(root, "connected to X display");
        Ok(Self { conn, root })
    }
}

impl Sink for PropertySink {
    fn name(&self) -> &'static str {
        "x11-root-name"
    }

    fn publish(&mut self, line: &str) -> Result<()> {
        self.conn
            .change_property8(
                PropMode::REPLACE,
                self.root,
                AtomEnum::WM_NAME,
                AtomEnum::STRING,
                line.as_bytes(),
            )
            .context("set root window name")?;
        self.conn.flush().context("flush X connection")
    }

    fn teardown(&mut self) -> Result<()> {
        self.conn
            .delete_property(self.root, u32::from(AtomEnum::WM_NAME))
            .context("clear root window name")?;
        // round-trip so the delete reaches the server before the socket closes
        self.conn.sync().context("close X connection")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_to_invalid_display_fails() {
        let result = PropertySink::connect(Some("not a display name"));
        assert!(result.is_err());
    }
}
