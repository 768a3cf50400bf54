//! The [`Type`] value object identifying one item inside a registry.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{RegistryError, Result};

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?\d+(\.\d+){0,2}$").unwrap());

/// An item inside a registry: `(qualifier, name, version)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type {
    /// Collection the item belongs to, if the registry uses collections.
    pub qualifier: Option<String>,
    /// Item name.
    pub name: String,
    /// Item version, if the registry is versioned.
    pub version: Option<String>,
}

impl Type {
    /// Build a type from its string components.
    ///
    /// Empty `qualifier` or `version` mean "absent". The name must be
    /// non-empty and no component may contain `/`.
    pub fn new(qualifier: &str, name: &str, version: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(invalid("name must not be empty"));
        }

        for (label, value) in [("qualifier", qualifier), ("name", name), ("version", version)] {
            if value.contains('/') {
                return Err(invalid(&format!("{} '{}' contains '/'", label, value)));
            }
        }

        if !version.is_empty() && !VERSION_REGEX.is_match(version) {
            return Err(invalid(&format!("malformed version '{}'", version)));
        }

        Ok(Self {
            qualifier: non_empty(qualifier),
            name: name.to_string(),
            version: non_empty(version),
        })
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(qualifier) = &self.qualifier {
            write!(f, "{}/", qualifier)?;
        }
        f.write_str(&self.name)?;
        if let Some(version) = &self.version {
            write!(f, ":{}", version)?;
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn invalid(message: &str) -> RegistryError {
    RegistryError::InvalidType {
        message: message.to_string(),
    }
}
