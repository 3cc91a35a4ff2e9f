//! Config fixture helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Writes `body` as config.toml in `dir` and returns its path.
pub fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, body).unwrap();
    path
}

/// Config with one file-backed slow module and one static fast module.
///
/// Lines look like `S:<contents of slow_file> F:x`.
pub fn slow_file_config(dir: &Path, slow_file: &Path, interval_ms: u64) -> PathBuf {
    write_config(
        dir,
        &format!(
            r#"interval_ms = {interval_ms}

[[modules]]
collector = "read_file"
arg = "{}"
format = "S:%s "
slow = true

[[modules]]
collector = "text"
arg = "x"
format = "F:%s"
"#,
            slow_file.display()
        ),
    )
}
