//! Data collectors.
//!
//! Every module in the registry names one `Collector` variant plus an
//! optional argument. Collectors never fail loudly: anything that goes wrong
//! (missing file, bad parse, non-zero exit) yields `None`, which the
//! composer renders as the configured fallback literal.

mod command;
mod memory;
mod power;
mod system;

use serde::Deserialize;

/// The closed set of collectors a module can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collector {
    /// Returns the argument verbatim.
    Text,
    /// Local time formatted with the argument (strftime syntax).
    Datetime,
    LoadAvg,
    Uptime,
    RamPerc,
    RamUsed,
    RamFree,
    RamTotal,
    /// Charge percentage of the power supply named by the argument.
    BatteryPerc,
    /// Charging state symbol of the power supply named by the argument.
    BatteryState,
    Hostname,
    KernelRelease,
    Entropy,
    /// Whole degrees from a sysfs millidegree file given as the argument.
    Temp,
    /// First line of the file given as the argument.
    ReadFile,
    /// Number of entries in the directory given as the argument.
    NumFiles,
    /// First stdout line of `sh -c <arg>`.
    RunCommand,
    Username,
}

impl Collector {
    /// Collects the current value, or `None` when it is unavailable.
    pub fn collect(self, arg: Option<&str>) -> Option<String> {
        match self {
            Self::Text => arg.map(str::to_string),
            Self::Datetime => system::datetime(arg.unwrap_or(system::DEFAULT_DATETIME_FMT)),
            Self::LoadAvg => system::load_avg(),
            Self::Uptime => system::uptime(),
            Self::RamPerc => memory::ram_perc(),
            Self::RamUsed => memory::ram_used(),
            Self::RamFree => memory::ram_free(),
            Self::RamTotal => memory::ram_total(),
            Self::BatteryPerc => power::battery_perc(arg?),
            Self::BatteryState => power::battery_state(arg?),
            Self::Hostname => system::hostname(),
            Self::KernelRelease => system::kernel_release(),
            Self::Entropy => system::entropy(),
            Self::Temp => power::temp(arg?),
            Self::ReadFile => command::read_file(arg?),
            Self::NumFiles => command::num_files(arg?),
            Self::RunCommand => command::run_command(arg?),
            Self::Username => system::username(),
        }
    }
}

/// Reads a small text file and returns its first line, trimmed.
fn read_first_line(path: impl AsRef<std::path::Path>) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    let line = contents.lines().next()?.trim();
    (!line.is_empty()).then(|| line.to_string())
}

/// Formats a byte count with 1024-based prefixes, e.g. `3.2 Gi`.
pub(crate) fn fmt_human(bytes: u64) -> String {
    const PREFIXES: [&str; 7] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei"];

    let mut scaled = bytes as f64;
    let mut idx = 0;
    while scaled >= 1024.0 && idx < PREFIXES.len() - 1 {
        scaled /= 1024.0;
        idx += 1;
    }
    format!("{scaled:.1} {}", PREFIXES[idx])
}
