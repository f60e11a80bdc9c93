// hostenv - platform/os_version.rs
//
// Major-version extraction from the host-reported OS version string.
// Parsing never raises; every malformed input maps to the sentinel.

use crate::util::constants;

/// Parse the major component of a dotted version string.
///
/// `"17.2.1"` yields `17`; an empty, malformed, or non-numeric leading
/// component yields the sentinel `0`. Never panics.
pub fn major_version(version: &str) -> u32 {
    version
        .split('.')
        .next()
        .unwrap_or("")
        .trim()
        .parse()
        .unwrap_or(constants::VERSION_SENTINEL)
}

/// Read the host-reported OS version string, if the platform exposes one.
#[cfg(target_os = "linux")]
fn os_version_string() -> Option<String> {
    std::fs::read_to_string(constants::OS_RELEASE_PATH).ok()
}

#[cfg(not(target_os = "linux"))]
fn os_version_string() -> Option<String> {
    None
}

/// Major version of the running operating system.
///
/// Returns the sentinel `0` when the platform reports no version
/// string or the string is malformed.
pub fn current_os_major_version() -> u32 {
    match os_version_string() {
        Some(v) => major_version(v.trim()),
        None => constants::VERSION_SENTINEL,
    }
}
