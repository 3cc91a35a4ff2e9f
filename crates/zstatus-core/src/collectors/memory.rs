//! RAM collectors backed by `/proc/meminfo`.

use super::fmt_human;

const MEMINFO: &str = "/proc/meminfo";

/// Values from `/proc/meminfo`, in bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct MemInfo {
    total: u64,
    free: u64,
    available: u64,
    buffers: u64,
    cached: u64,
}

impl MemInfo {
    fn read() -> Option<Self> {
        parse_meminfo(&std::fs::read_to_string(MEMINFO).ok()?)
    }

    fn used(&self) -> u64 {
        self.total
            .saturating_sub(self.free)
            .saturating_sub(self.buffers)
            .saturating_sub(self.cached)
    }
}

fn parse_meminfo(contents: &str) -> Option<MemInfo> {
    let mut info = MemInfo::default();
    let mut seen_total = false;

    for line in contents.lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let Some(kib) = rest.split_whitespace().next().and_then(|v| v.parse::<u64>().ok())
        else {
            continue;
        };
        let bytes = kib * 1024;
        match key {
            "MemTotal" => {
                info.total = bytes;
                seen_total = true;
            }
            "MemFree" => info.free = bytes,
            "MemAvailable" => info.available = bytes,
            "Buffers" => info.buffers = bytes,
            "Cached" => info.cached = bytes,
            _ => {}
        }
    }

    (seen_total && info.total > 0).then_some(info)
}

pub(super) fn ram_perc() -> Option<String> {
    let info = MemInfo::read()?;
    Some((info.used() * 100 / info.total).to_string())
}

pub(super) fn ram_used() -> Option<String> {
    MemInfo::read().map(|info| fmt_human(info.used()))
}

pub(super) fn ram_free() -> Option<String> {
    MemInfo::read().map(|info| fmt_human(info.available))
}

pub(super) fn ram_total() -> Option<String> {
    MemInfo::read().map(|info| fmt_human(info.total))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "MemTotal:       16000000 kB
MemFree:         4000000 kB
MemAvailable:    9000000 kB
Buffers:         1000000 kB
Cached:          3000000 kB
SwapCached:            0 kB
";

    #[test]
    fn test_parse_meminfo() {
        let info = parse_meminfo(SAMPLE).unwrap();
        assert_eq!(info.total, 16_000_000 * 1024);
        assert_eq!(info.available, 9_000_000 * 1024);
        // SwapCached must not be mistaken for Cached
        assert_eq!(info.cached, 3_000_000 * 1024);
    }

    #[test]
    fn test_used_excludes_buffers_and_cache() {
        let info = parse_meminfo(SAMPLE).unwrap();
        assert_eq!(info.used(), 8_000_000 * 1024);
        assert_eq!(info.used() * 100 / info.total, 50);
    }

    #[test]
    fn test_parse_meminfo_without_total() {
        assert_eq!(parse_meminfo("MemFree: 10 kB\n"), None);
        assert_eq!(parse_meminfo(""), None);
    }
}
