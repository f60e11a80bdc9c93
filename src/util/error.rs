// hostenv - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// The query surface itself never raises; these types cover the one
// fallible path a host can opt into, strict manifest loading.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all hostenv operations.
#[derive(Debug)]
pub enum HostEnvError {
    /// Manifest loading or parsing failed.
    Manifest(ManifestError),
}

impl fmt::Display for HostEnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manifest(e) => write!(f, "Manifest error: {e}"),
        }
    }
}

impl std::error::Error for HostEnvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Manifest(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Manifest errors
// ---------------------------------------------------------------------------

/// Errors related to application manifest loading.
#[derive(Debug)]
pub enum ManifestError {
    /// TOML file could not be parsed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Manifest file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// I/O error reading the manifest file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Failed to parse TOML '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Manifest '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(
                    f,
                    "I/O error reading manifest '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ManifestError> for HostEnvError {
    fn from(e: ManifestError) -> Self {
        Self::Manifest(e)
    }
}

/// Convenience type alias for hostenv results.
pub type Result<T> = std::result::Result<T, HostEnvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_preserves_path_context_and_source_chain() {
        let io = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = HostEnvError::from(ManifestError::Io {
            path: PathBuf::from("manifest.toml"),
            source: io,
        });

        assert!(err.to_string().contains("manifest.toml"));

        let manifest_err = std::error::Error::source(&err).expect("wrapper keeps its source");
        let io_err = manifest_err.source().expect("Io variant keeps its source");
        assert!(io_err.to_string().contains("no such file"));
    }

    #[test]
    fn test_result_alias_carries_manifest_errors_through_question_mark() {
        fn strict() -> Result<()> {
            Err(ManifestError::FileTooLarge {
                path: PathBuf::from("manifest.toml"),
                size: 100,
                max_size: 10,
            })?;
            Ok(())
        }

        match strict() {
            Err(HostEnvError::Manifest(ManifestError::FileTooLarge { size: 100, .. })) => {}
            other => panic!("expected FileTooLarge wrapper, got {other:?}"),
        }
    }
}
