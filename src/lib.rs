// hostenv - lib.rs
//
// Host environment helpers for embedding applications: build-gated
// diagnostics, three-way local-setting resolution, OS major-version
// lookup, and application-manifest capability queries.
//
// Every query degrades to a documented fallback value rather than
// raising; typed errors exist only on the explicit manifest-loading
// path.

pub mod platform;
pub mod util;

// Re-exported for the diag! macro expansion; not public API.
#[doc(hidden)]
pub use tracing as __tracing;

pub use platform::manifest::AppManifest;
pub use platform::os_version::{current_os_major_version, major_version};
pub use platform::settings::SettingsStore;
pub use util::error::{HostEnvError, Result};
pub use util::logging::diag_enabled;
