//! Process instance metadata for the health report.
//!
//! Every query here is infallible by construction: the health endpoint must
//! always serialize a report, so hostname falls back to an empty string and
//! memory figures fall back to zero when the OS does not cooperate.

use serde::Serialize;

/// Toolchain version baked in at compile time, reported as the runtime
/// version of this instance.
const RUNTIME_VERSION: &str = env!("CARGO_PKG_RUST_VERSION");

/// Metadata describing this process instance.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceInfo {
    pub hostname: String,
    pub pid: u32,
    pub platform: &'static str,
    pub runtime_version: &'static str,
    pub memory: MemoryUsage,
}

/// Process memory figures in bytes. Zero when unavailable.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    pub rss_bytes: u64,
    pub vm_size_bytes: u64,
}

impl InstanceInfo {
    /// Collect metadata for the running process.
    pub fn collect() -> Self {
        Self {
            hostname: hostname(),
            pid: std::process::id(),
            platform: std::env::consts::OS,
            runtime_version: RUNTIME_VERSION,
            memory: memory_usage(),
        }
    }
}

/// OS hostname, or an empty string if the lookup fails.
fn hostname() -> String {
    #[cfg(target_os = "linux")]
    {
        if let Ok(name) = std::fs::read_to_string("/proc/sys/kernel/hostname") {
            return name.trim().to_string();
        }
    }
    // Containers and CI commonly export one of these even when the kernel
    // interface is unavailable.
    std::env::var("HOSTNAME")
        .or_else(|_| std::env::var("COMPUTERNAME"))
        .unwrap_or_default()
}

/// Current memory usage, read from `/proc/self/status` on Linux.
fn memory_usage() -> MemoryUsage {
    #[cfg(target_os = "linux")]
    {
        if let Ok(status) = std::fs::read_to_string("/proc/self/status") {
            return parse_proc_status(&status);
        }
    }
    MemoryUsage::default()
}

/// Parse `VmRSS` and `VmSize` lines out of `/proc/self/status` content.
/// Values there are reported in kibibytes.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_proc_status(status: &str) -> MemoryUsage {
    let mut usage = MemoryUsage::default();
    for line in status.lines() {
        if let Some(rest) = line.strip_prefix("VmRSS:") {
            usage.rss_bytes = parse_kib_field(rest);
        } else if let Some(rest) = line.strip_prefix("VmSize:") {
            usage.vm_size_bytes = parse_kib_field(rest);
        }
    }
    usage
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_kib_field(rest: &str) -> u64 {
    rest.trim()
        .trim_end_matches(" kB")
        .trim()
        .parse::<u64>()
        .map(|kib| kib * 1024)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_reports_current_pid() {
        let info = InstanceInfo::collect();
        assert_eq!(info.pid, std::process::id());
        assert_eq!(info.platform, std::env::consts::OS);
    }

    #[test]
    fn parses_proc_status_memory_lines() {
        let status = "\
Name:\tcanary
VmPeak:\t  171136 kB
VmSize:\t  171072 kB
VmRSS:\t    9344 kB
Threads:\t9
";
        let usage = parse_proc_status(status);
        assert_eq!(usage.rss_bytes, 9344 * 1024);
        assert_eq!(usage.vm_size_bytes, 171072 * 1024);
    }

    #[test]
    fn malformed_status_degrades_to_zero() {
        let usage = parse_proc_status("VmRSS:\tgarbage kB\n");
        assert_eq!(usage.rss_bytes, 0);
        assert_eq!(usage.vm_size_bytes, 0);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(InstanceInfo::collect()).unwrap();
        assert!(json.get("runtimeVersion").is_some());
        assert!(json["memory"].get("rssBytes").is_some());
        assert!(json["memory"].get("vmSizeBytes").is_some());
    }
}
