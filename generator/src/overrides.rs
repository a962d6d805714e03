//! Loading of the user override file.
//!
//! The override file is optional configuration: a missing file yields an
//! empty store, and an unreadable or malformed file is logged and also
//! yields an empty store. Neither aborts a run.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "Timestamp": "string",
//!   "Item": {
//!     "fields": {
//!       "price": { "type": "number", "optional": false },
//!       "notes": { "type": "string[]" }
//!     }
//!   }
//! }
//! ```
//!
//! Files ending in `.yaml` or `.yml` are read as YAML with the same layout.

use std::io::ErrorKind;
use std::path::Path;

use indexmap::IndexMap;
use tracing::{info, warn};
use wsdl_typegen_core::OverrideRule;

/// Result of attempting to load an override file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideLoadStatus {
    /// File parsed; number of rules loaded.
    Loaded(usize),
    /// No file at the given path.
    Missing,
    /// File present but unreadable or malformed.
    Invalid(String),
}

/// Override rules keyed by type name, in file order.
///
/// # Examples
///
/// ```
/// use wsdl_typegen::overrides::OverrideStore;
///
/// let store = OverrideStore::from_json(r#"{ "Bar": "string" }"#).unwrap();
/// assert_eq!(store.len(), 1);
/// assert!(store.get("Bar").is_some());
/// assert!(store.get("Foo").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OverrideStore {
    rules: IndexMap<String, OverrideRule>,
}

impl OverrideStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from already-parsed rules.
    pub fn from_rules(rules: IndexMap<String, OverrideRule>) -> Self {
        Self { rules }
    }

    /// Parses rules from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the parser error if the text is not a valid override mapping.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content).map(Self::from_rules)
    }

    /// Parses rules from YAML text.
    ///
    /// # Errors
    ///
    /// Returns the parser error if the text is not a valid override mapping.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content).map(Self::from_rules)
    }

    /// Loads the override file at `path`, never failing.
    pub fn load(path: impl AsRef<Path>) -> Self {
        Self::load_with_status(path).0
    }

    /// Loads the override file at `path` and reports what happened.
    pub fn load_with_status(path: impl AsRef<Path>) -> (Self, OverrideLoadStatus) {
        let path = path.as_ref();

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "No overrides file found");
                return (Self::new(), OverrideLoadStatus::Missing);
            }
            Err(err) => {
                let reason = format!("failed to read overrides '{}': {err}", path.display());
                warn!(path = %path.display(), error = %err, "Ignoring unreadable overrides file");
                return (Self::new(), OverrideLoadStatus::Invalid(reason));
            }
        };

        let parsed = if is_yaml(path) {
            Self::from_yaml(&content).map_err(|err| err.to_string())
        } else {
            Self::from_json(&content).map_err(|err| err.to_string())
        };

        match parsed {
            Ok(store) => {
                let count = store.len();
                info!(path = %path.display(), count, "Loaded overrides");
                (store, OverrideLoadStatus::Loaded(count))
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Ignoring malformed overrides file");
                let reason = format!("malformed overrides '{}': {err}", path.display());
                (Self::new(), OverrideLoadStatus::Invalid(reason))
            }
        }
    }

    /// Returns the rule for a type name.
    pub fn get(&self, name: &str) -> Option<&OverrideRule> {
        self.rules.get(name)
    }

    /// Iterates rules in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OverrideRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
