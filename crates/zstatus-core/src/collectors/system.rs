//! Clock, load, and kernel collectors.

use std::fmt::Write as _;

use chrono::Local;

use super::read_first_line;

pub(super) const DEFAULT_DATETIME_FMT: &str = "%F %T";

pub(super) fn datetime(fmt: &str) -> Option<String> {
    // chrono reports bad specifiers as a fmt::Error while rendering
    let mut out = String::new();
    write!(out, "{}", Local::now().format(fmt)).ok()?;
    Some(out)
}

pub(super) fn load_avg() -> Option<String> {
    parse_loadavg(&std::fs::read_to_string("/proc/loadavg").ok()?)
}

fn parse_loadavg(contents: &str) -> Option<String> {
    let fields: Vec<&str> = contents.split_whitespace().take(3).collect();
    (fields.len() == 3).then(|| fields.join(" "))
}

pub(super) fn uptime() -> Option<String> {
    let raw = std::fs::read_to_string("/proc/uptime").ok()?;
    let secs = raw.split_whitespace().next()?.parse::<f64>().ok()?;
    Some(format_uptime(secs as u64))
}

fn format_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    format!("{hours}h {minutes}m")
}

pub(super) fn hostname() -> Option<String> {
    read_first_line("/proc/sys/kernel/hostname")
}

pub(super) fn kernel_release() -> Option<String> {
    read_first_line("/proc/sys/kernel/osrelease")
}

pub(super) fn entropy() -> Option<String> {
    read_first_line("/proc/sys/kernel/random/entropy_avail")
}

pub(super) fn username() -> Option<String> {
    if let Ok(user) = std::env::var("USER")
        && !user.is_empty()
    {
        return Some(user);
    }
    current_uid().map(|uid| uid.to_string())
}

#[cfg(unix)]
fn current_uid() -> Option<u32> {
    // SAFETY: getuid has no preconditions and cannot fail.
    Some(unsafe { libc::getuid() })
}

#[cfg(not(unix))]
fn current_uid() -> Option<u32> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_loadavg_takes_three_fields() {
        assert_eq!(
            parse_loadavg("0.52 0.58 0.59 1/467 12345\n"),
            Some("0.52 0.58 0.59".to_string())
        );
        assert_eq!(parse_loadavg("0.52"), None);
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(59), "0h 0m");
        assert_eq!(format_uptime(3 * 3600 + 12 * 60 + 7), "3h 12m");
        assert_eq!(format_uptime(50 * 3600), "50h 0m");
    }

    #[test]
    fn test_datetime_literal_format() {
        assert_eq!(datetime("clock"), Some("clock".to_string()));
        assert_eq!(datetime("%Y").map(|y| y.len()), Some(4));
    }

    #[test]
    fn test_datetime_invalid_format_is_absent() {
        assert_eq!(datetime("%Q"), None);
    }
}
