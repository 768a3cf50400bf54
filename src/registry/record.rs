//! Persisted registry metadata.
//!
//! A [`RegistryRecord`] is what the metadata service stores for each
//! registry. It is turned into a live [`Registry`](super::Registry) by a
//! [`GithubRegistryFactory`](super::GithubRegistryFactory).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Separator between format tags in [`RegistryRecord::format`].
pub const FORMAT_SEPARATOR: char = ';';

/// Kind of backend hosting a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum RegistryType {
    /// A GitHub repository.
    Github,
    /// Any type this crate does not know how to build.
    Other(String),
}

impl From<String> for RegistryType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "github" => Self::Github,
            _ => Self::Other(value),
        }
    }
}

impl From<RegistryType> for String {
    fn from(value: RegistryType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for RegistryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Github => f.write_str("github"),
            Self::Other(other) => f.write_str(other),
        }
    }
}

/// A single format tag describing how a registry is organized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegistryFormat {
    /// Items carry versions.
    Versioned,
    /// Items carry no versions.
    Unversioned,
    /// Items are grouped under a qualifier.
    Collection,
    /// Items live directly under the repository root.
    OneLevel,
    /// An unrecognized tag, kept verbatim.
    Other(String),
}

impl RegistryFormat {
    fn parse(tag: &str) -> Self {
        match tag {
            "versioned" => Self::Versioned,
            "unversioned" => Self::Unversioned,
            "collection" => Self::Collection,
            "one-level" => Self::OneLevel,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for RegistryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Versioned => "versioned",
            Self::Unversioned => "unversioned",
            Self::Collection => "collection",
            Self::OneLevel => "one-level",
            Self::Other(other) => other,
        };
        f.write_str(tag)
    }
}

/// Split a `;`-joined format string into its set of tags.
///
/// Order does not matter and duplicates collapse. Empty pieces are dropped.
pub fn parse_registry_format(format: &str) -> HashSet<RegistryFormat> {
    format
        .split(FORMAT_SEPARATOR)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(RegistryFormat::parse)
        .collect()
}

/// Registry metadata as persisted by the metadata service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegistryRecord {
    /// Canonical registry name.
    pub name: String,
    /// Location of the registry, e.g. `github.com/helm/charts`.
    pub url: String,
    /// Backend type.
    #[serde(rename = "type")]
    pub registry_type: RegistryType,
    /// Format tags, e.g. `versioned;collection`.
    pub format: String,
}

impl RegistryRecord {
    /// Create a GitHub-backed record.
    pub fn github(
        name: impl Into<String>,
        url: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            registry_type: RegistryType::Github,
            format: format.into(),
        }
    }

    /// Parsed format tags.
    pub fn formats(&self) -> HashSet<RegistryFormat> {
        parse_registry_format(&self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_format_tags_in_any_order() {
        let a = parse_registry_format("unversioned;one-level");
        let b = parse_registry_format("one-level;unversioned");
        assert_eq!(a, b);
        assert!(a.contains(&RegistryFormat::Unversioned));
        assert!(a.contains(&RegistryFormat::OneLevel));
    }

    #[test]
    fn duplicate_tags_collapse() {
        let tags = parse_registry_format("versioned;versioned;collection");
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn empty_pieces_are_dropped() {
        let tags = parse_registry_format(";versioned; ;collection;");
        assert_eq!(tags.len(), 2);
        assert!(parse_registry_format("").is_empty());
    }

    #[test]
    fn unknown_tags_are_kept_verbatim() {
        let tags = parse_registry_format("versioned;nested");
        assert!(tags.contains(&RegistryFormat::Other("nested".to_string())));
    }

    #[test]
    fn parses_record_from_yaml() {
        let yaml = r#"
name: charts
url: github.com/helm/charts
type: github
format: unversioned;one-level
"#;
        let record: RegistryRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.name, "charts");
        assert_eq!(record.registry_type, RegistryType::Github);
        assert_eq!(record.format, "unversioned;one-level");
    }

    #[test]
    fn unknown_type_survives_deserialization() {
        let yaml = r#"
name: other
url: gitlab.com/acme/things
type: gitlab
format: versioned;collection
"#;
        let record: RegistryRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            record.registry_type,
            RegistryType::Other("gitlab".to_string())
        );
    }

    #[test]
    fn record_type_serializes_as_string() {
        let record = RegistryRecord::github("charts", "github.com/helm/charts", "unversioned");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "github");
    }
}
