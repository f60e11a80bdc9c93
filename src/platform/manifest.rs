// hostenv - platform/manifest.rs
//
// Application manifest loading and capability flags. The manifest is
// the host application's declared configuration: a TOML file with an
// [application] section and a [capabilities] table of boolean flags.
// Absent flags always read as false; a missing manifest is a normal
// first-run state, not an error.

use crate::diag;
use crate::util::constants;
use crate::util::error::ManifestError;
use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Raw deserialisable shape of manifest.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a
/// newer manifest can be read by an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RawManifest {
    /// `[application]` section.
    application: ApplicationSection,
    /// `[capabilities]` table of declared boolean flags.
    capabilities: BTreeMap<String, bool>,
}

/// `[application]` manifest section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ApplicationSection {
    /// Application display name.
    name: Option<String>,
    /// Reverse-DNS application identifier.
    identifier: Option<String>,
}

/// The host application's declared configuration.
///
/// An immutable snapshot; every query is a pure read. The default
/// manifest declares nothing, so all capability flags read as `false`.
#[derive(Debug, Clone, Default)]
pub struct AppManifest {
    /// Application display name, when declared.
    pub name: Option<String>,
    /// Reverse-DNS application identifier, when declared.
    pub identifier: Option<String>,
    capabilities: BTreeMap<String, bool>,
}

impl AppManifest {
    /// Strict load with typed errors for I/O and parse failures.
    ///
    /// An absent file is an I/O error here; use [`load`] for the
    /// lenient degrade-to-defaults behaviour.
    ///
    /// [`load`]: AppManifest::load
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let metadata = std::fs::metadata(path).map_err(|e| ManifestError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        if metadata.len() > constants::MAX_MANIFEST_SIZE {
            return Err(ManifestError::FileTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                max_size: constants::MAX_MANIFEST_SIZE,
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let raw: RawManifest =
            toml::from_str(&content).map_err(|e| ManifestError::TomlParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Self {
            name: raw.application.name,
            identifier: raw.application.identifier,
            capabilities: raw.capabilities,
        })
    }

    /// Lenient load: a missing file yields defaults with no warnings
    /// (first-run); any other failure yields defaults plus an
    /// actionable warning. The caller always gets a usable manifest.
    pub fn load(path: &Path) -> (Self, Vec<String>) {
        let mut warnings: Vec<String> = Vec::new();

        if !path.exists() {
            diag!(path = %path.display(), "No manifest found; using defaults");
            return (Self::default(), warnings);
        }

        match Self::from_path(path) {
            Ok(manifest) => {
                diag!(
                    path = %path.display(),
                    capabilities = manifest.capabilities.len(),
                    "Loaded application manifest"
                );
                (manifest, warnings)
            }
            Err(e) => {
                let msg = format!(
                    "Could not load manifest '{}': {e}. Using defaults.",
                    path.display()
                );
                tracing::warn!("{}", msg);
                warnings.push(msg);
                (Self::default(), warnings)
            }
        }
    }

    /// Locate and load the manifest from the platform config directory.
    pub fn load_default() -> (Self, Vec<String>) {
        Self::load(&default_manifest_path())
    }

    /// Declared capability flag, or `None` when the manifest does not
    /// mention the key.
    pub fn capability(&self, key: &str) -> Option<bool> {
        self.capabilities.get(key).copied()
    }

    /// Whether the application manages its own status-bar appearance.
    ///
    /// The literal declared value when present; `false` when the
    /// manifest does not declare the flag (the conservative default).
    pub fn manages_status_bar_appearance(&self) -> bool {
        self.capability(constants::STATUS_BAR_CAPABILITY)
            .unwrap_or(false)
    }
}

/// Platform-appropriate manifest path.
///
/// Resolves the config directory (XDG on Linux, AppData on Windows,
/// Library on macOS) via the `directories` crate. Falls back to the
/// current directory if platform dirs cannot be determined.
pub fn default_manifest_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("", "", constants::CRATE_NAME) {
        proj_dirs.config_dir().join(constants::MANIFEST_FILE_NAME)
    } else {
        tracing::warn!("Could not determine platform directories, using current directory");
        PathBuf::from(".").join(constants::MANIFEST_FILE_NAME)
    }
}
