//! Filesystem and shell collectors.

use std::process::{Command, Stdio};

use super::read_first_line;

pub(super) fn read_file(path: &str) -> Option<String> {
    read_first_line(path)
}

pub(super) fn num_files(dir: &str) -> Option<String> {
    let count = std::fs::read_dir(dir).ok()?.filter_map(Result::ok).count();
    Some(count.to_string())
}

pub(super) fn run_command(cmd: &str) -> Option<String> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(cmd)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout.lines().next()?.trim_end();
    (!line.is_empty()).then(|| line.to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_run_command_first_line() {
        assert_eq!(
            run_command("printf 'one\\ntwo\\n'"),
            Some("one".to_string())
        );
    }

    #[test]
    fn test_run_command_failure_is_absent() {
        assert_eq!(run_command("exit 3"), None);
        assert_eq!(run_command("true"), None);
    }

    #[test]
    fn test_num_files_counts_entries() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a"), "").unwrap();
        fs::write(dir.path().join("b"), "").unwrap();
        fs::create_dir(dir.path().join("c")).unwrap();

        assert_eq!(num_files(dir.path().to_str().unwrap()), Some("3".to_string()));
        assert_eq!(num_files("/zstatus/does/not/exist"), None);
    }
}
