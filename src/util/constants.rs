// hostenv - util/constants.rs
//
// Single source of truth for named constants and defaults.

// =============================================================================
// Crate metadata
// =============================================================================

/// Crate display name, also used for config-directory resolution.
pub const CRATE_NAME: &str = "hostenv";

/// Current crate version.
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Environment variables
// =============================================================================

/// Environment variable carrying the host's production-mode indicator.
pub const PRODUCTION_MODE_VAR: &str = "APP_ENV";

/// Value of [`PRODUCTION_MODE_VAR`] that marks a production process.
pub const PRODUCTION_MODE_VALUE: &str = "production";

/// Environment variable that switches diagnostic logging on or off,
/// overriding the build-mode default.
pub const DIAG_ENV_VAR: &str = "HOSTENV_DIAG";

// =============================================================================
// Application manifest
// =============================================================================

/// File name of the application manifest.
pub const MANIFEST_FILE_NAME: &str = "manifest.toml";

/// Capability key declaring that the application manages its own
/// status-bar appearance.
pub const STATUS_BAR_CAPABILITY: &str = "view_controller_based_status_bar";

/// Maximum manifest file size in bytes. A capability manifest is a few
/// hundred bytes; anything larger is almost certainly the wrong file.
pub const MAX_MANIFEST_SIZE: u64 = 64 * 1024; // 64 KB

// =============================================================================
// OS version
// =============================================================================

/// Kernel release string as reported by procfs.
#[cfg(target_os = "linux")]
pub const OS_RELEASE_PATH: &str = "/proc/sys/kernel/osrelease";

/// Sentinel returned when the OS version string is absent or malformed.
pub const VERSION_SENTINEL: u32 = 0;

// =============================================================================
// Logging
// =============================================================================

/// Default tracing level when neither RUST_LOG nor the debug flag is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
