// hostenv - util/logging.rs
//
// Build-gated diagnostic logging with runtime override.
//
// Activation, highest priority first:
//   - Environment variable: HOSTENV_DIAG=1 (or 0 to force off)
//   - Build mode: debug builds enable diagnostics by default
//
// The gate is read once per process. The diag! macro checks it before
// evaluating any arguments, so a disabled gate costs one branch and
// formats nothing.

use crate::util::constants;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static DIAG_GATE: OnceLock<bool> = OnceLock::new();

/// Whether diagnostic logging is enabled for this process.
///
/// Computed once from the `HOSTENV_DIAG` environment variable and the
/// build mode; immutable for the process lifetime afterwards.
pub fn diag_enabled() -> bool {
    *DIAG_GATE.get_or_init(|| {
        enabled_from(
            cfg!(debug_assertions),
            std::env::var(constants::DIAG_ENV_VAR).ok().as_deref(),
        )
    })
}

/// Gate decision: an explicit truthy or falsy environment value wins;
/// anything else (absent or unrecognised) falls back to the build mode.
pub fn enabled_from(build_debug: bool, env_value: Option<&str>) -> bool {
    match env_value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => build_debug,
    }
}

/// Emit a diagnostic message iff the process-wide gate is enabled.
///
/// The gate check precedes argument evaluation: when disabled, none of
/// the arguments are evaluated and nothing is formatted or written.
/// Accepts the same argument forms as `tracing::debug!`.
#[macro_export]
macro_rules! diag {
    ($($arg:tt)*) => {
        if $crate::util::logging::diag_enabled() {
            $crate::__tracing::debug!(target: "hostenv::diag", $($arg)*);
        }
    };
}

/// Initialise the tracing subscriber for hosts that want this crate to
/// install the diagnostic sink.
///
/// Priority: RUST_LOG env var > `debug_flag` / the diagnostic gate >
/// default "info". A subscriber already installed by the host wins; the
/// call is then a no-op.
pub fn init(debug_flag: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        // RUST_LOG takes highest priority (already set)
        EnvFilter::from_default_env()
    } else if debug_flag || diag_enabled() {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(constants::DEFAULT_LOG_LEVEL)
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            app = constants::CRATE_NAME,
            version = constants::CRATE_VERSION,
            "Logging initialised"
        );
    }
}
