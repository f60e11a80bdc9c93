// hostenv - platform/settings.rs
//
// Three-way local-setting resolution: an environment override wins
// unconditionally, otherwise production mode selects the production
// value and anything else selects the default.

use crate::diag;
use crate::util::constants;
use std::collections::HashMap;

/// Immutable snapshot of the host settings store.
///
/// Overrides are tri-state per key: absent, present with a value (the
/// empty string is a value), or present-as-null when the host
/// explicitly stored a null. The snapshot never mutates, so repeated
/// resolution of the same key is idempotent and safe from any number
/// of concurrent callers.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    overrides: HashMap<String, Option<String>>,
    production: bool,
}

impl SettingsStore {
    /// Snapshot the process environment.
    ///
    /// Every environment variable is a candidate override, looked up
    /// verbatim by key. Production mode is indicated by
    /// `APP_ENV=production` (case-insensitive). Variables that are not
    /// valid UTF-8 are skipped rather than failing the snapshot.
    pub fn from_process_env() -> Self {
        let overrides: HashMap<String, Option<String>> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, Some(v.into_string().ok()?))))
            .collect();

        let production = overrides
            .get(constants::PRODUCTION_MODE_VAR)
            .and_then(|v| v.as_deref())
            .is_some_and(|v| v.eq_ignore_ascii_case(constants::PRODUCTION_MODE_VALUE));

        diag!(
            overrides = overrides.len(),
            production = production,
            "Settings store snapshot taken"
        );

        Self {
            overrides,
            production,
        }
    }

    /// Empty store with an explicit production flag, for hosts that
    /// carry their own settings source.
    pub fn new(production: bool) -> Self {
        Self {
            overrides: HashMap::new(),
            production,
        }
    }

    /// Add an override for `key`. The empty string is a legitimate
    /// override value and will be returned verbatim by [`resolve`].
    ///
    /// [`resolve`]: SettingsStore::resolve
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), Some(value.into()));
        self
    }

    /// Add an explicit null override for `key`. Resolution preserves
    /// the null rather than falling through to default/production.
    pub fn with_null_override(mut self, key: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), None);
        self
    }

    /// Whether this snapshot was taken in a production process.
    pub fn is_production(&self) -> bool {
        self.production
    }

    /// Resolve `key` three ways.
    ///
    /// 1. An override present in the store is returned verbatim — the
    ///    escape hatch for local development. An explicit null override
    ///    resolves to `None`.
    /// 2. Otherwise `production_value` in production mode.
    /// 3. Otherwise `default_value`.
    ///
    /// A missing key is not an error; it simply means "no override".
    pub fn resolve(
        &self,
        key: &str,
        default_value: &str,
        production_value: &str,
    ) -> Option<String> {
        if let Some(stored) = self.overrides.get(key) {
            diag!(key = key, "Setting resolved from override");
            return stored.clone();
        }

        if self.production {
            Some(production_value.to_string())
        } else {
            Some(default_value.to_string())
        }
    }
}
