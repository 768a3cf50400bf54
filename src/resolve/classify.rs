//! Classification of type references.
//!
//! A reference is one of:
//! - a template short form: `github.com/<owner>/<repo>/<qualifier>/<name>:<version>`
//! - a package short form: `github.com/<owner>/<repo>/<name>`
//! - a fully qualified `http://` or `https://` URL
//!
//! Both short forms may carry an `http://` or `https://` prefix; they are
//! still routed through a registry.
//! - anything else, which is a primitive type needing no download
//!
//! Matchers are tried in that order. The template form is the more specific
//! one, so the package matcher is never consulted for a template reference.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::error::{RegistryError, Result};

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(
    TEMPLATE_SHORT_FORM,
    r"^(?:https?://)?github\.com/([^/]+)/([^/]+)/([^/]+)/([^/:]+):([^/]+)$"
);
lazy_regex!(
    PACKAGE_SHORT_FORM,
    r"^(?:https?://)?github\.com/([^/]+)/([^/]+)/([^/]+)$"
);

/// What shape a type reference has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeReference {
    /// `github.com/owner/repo/qualifier/name:version`
    Template,
    /// `github.com/owner/repo/name`
    Package,
    /// A full HTTP(S) URL.
    Url,
    /// No download needed.
    Primitive,
}

type Matcher = fn(&str) -> bool;

/// Matchers in priority order.
const CLASSIFIERS: [(TypeReference, Matcher); 3] = [
    (TypeReference::Template, is_template_short_form),
    (TypeReference::Package, is_package_short_form),
    (TypeReference::Url, is_http_url),
];

/// Decide the shape of `t`, trying the most specific form first.
pub fn classify(t: &str) -> TypeReference {
    CLASSIFIERS
        .iter()
        .find(|(_, matches)| matches(t))
        .map(|(kind, _)| *kind)
        .unwrap_or(TypeReference::Primitive)
}

/// Whether `t` is `github.com/owner/repo/qualifier/name:version`.
pub fn is_template_short_form(t: &str) -> bool {
    TEMPLATE_SHORT_FORM.is_match(t)
}

/// Whether `t` is `github.com/owner/repo/name`.
pub fn is_package_short_form(t: &str) -> bool {
    PACKAGE_SHORT_FORM.is_match(t)
}

/// Whether `t` claims to be an `http://` or `https://` URL.
///
/// Only the scheme is checked; the URL may still fail to parse.
pub fn is_http_url(t: &str) -> bool {
    let lower = t.get(..8).unwrap_or(t).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Components of a template short form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateShortForm<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    pub qualifier: &'a str,
    pub name: &'a str,
    pub version: &'a str,
}

/// Components of a package short form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageShortForm<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    pub name: &'a str,
}

/// Split a template short form into its five components.
pub fn parse_template_short_form(t: &str) -> Result<TemplateShortForm<'_>> {
    let caps = captures(&TEMPLATE_SHORT_FORM, t, 5)?;
    Ok(TemplateShortForm {
        owner: group(&caps, 1),
        repo: group(&caps, 2),
        qualifier: group(&caps, 3),
        name: group(&caps, 4),
        version: group(&caps, 5),
    })
}

/// Split a package short form into its three components.
pub fn parse_package_short_form(t: &str) -> Result<PackageShortForm<'_>> {
    let caps = captures(&PACKAGE_SHORT_FORM, t, 3)?;
    Ok(PackageShortForm {
        owner: group(&caps, 1),
        repo: group(&caps, 2),
        name: group(&caps, 3),
    })
}

fn captures<'t>(re: &Regex, t: &'t str, expected: usize) -> Result<Captures<'t>> {
    re.captures(t)
        .filter(|caps| caps.len() == expected + 1)
        .ok_or_else(|| RegistryError::InvalidShortType {
            type_string: t.to_string(),
        })
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}
