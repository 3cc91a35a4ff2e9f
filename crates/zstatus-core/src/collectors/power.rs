//! Battery and thermal collectors backed by sysfs.

use std::path::PathBuf;

use super::read_first_line;

const POWER_SUPPLY_DIR: &str = "/sys/class/power_supply";

fn supply_path(name: &str, attr: &str) -> PathBuf {
    PathBuf::from(POWER_SUPPLY_DIR).join(name).join(attr)
}

pub(super) fn battery_perc(name: &str) -> Option<String> {
    let raw = read_first_line(supply_path(name, "capacity"))?;
    raw.parse::<u8>().ok().map(|v| v.to_string())
}

pub(super) fn battery_state(name: &str) -> Option<String> {
    read_first_line(supply_path(name, "status")).map(|s| state_symbol(&s).to_string())
}

fn state_symbol(status: &str) -> &'static str {
    match status {
        "Charging" => "+",
        "Discharging" => "-",
        "Full" | "Not charging" => "o",
        _ => "?",
    }
}

pub(super) fn temp(path: &str) -> Option<String> {
    let raw = read_first_line(path)?;
    millidegrees_to_celsius(&raw)
}

fn millidegrees_to_celsius(raw: &str) -> Option<String> {
    raw.parse::<i64>().ok().map(|m| (m / 1000).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_symbols() {
        assert_eq!(state_symbol("Charging"), "+");
        assert_eq!(state_symbol("Discharging"), "-");
        assert_eq!(state_symbol("Full"), "o");
        assert_eq!(state_symbol("Not charging"), "o");
        assert_eq!(state_symbol("Unknown"), "?");
    }

    #[test]
    fn test_millidegrees() {
        assert_eq!(millidegrees_to_celsius("47500"), Some("47".to_string()));
        assert_eq!(millidegrees_to_celsius("-2000"), Some("-2".to_string()));
        assert_eq!(millidegrees_to_celsius("hot"), None);
    }

    #[test]
    fn test_unknown_battery_is_absent() {
        assert_eq!(battery_perc("zstatus-test-no-such-battery"), None);
    }
}
