//! Download URL resolution for type references.
//!
//! - [`classify`] - decides what shape a reference has
//! - [`urls`] - routes each shape to the right download URL logic
//!
//! # Example
//!
//! ```
//! use registry_resolver::resolve::{classify, TypeReference};
//!
//! assert_eq!(
//!     classify("github.com/kubernetes/application-dm-templates/storage/redis:v1"),
//!     TypeReference::Template
//! );
//! assert_eq!(classify("github.com/helm/charts/cassandra"), TypeReference::Package);
//! assert_eq!(classify("string"), TypeReference::Primitive);
//! ```

pub mod classify;
pub mod urls;

pub use classify::{
    classify, is_http_url, is_package_short_form, is_template_short_form,
    parse_package_short_form, parse_template_short_form, PackageShortForm, TemplateShortForm,
    TypeReference,
};
pub use urls::{
    resolve_download_urls, short_type_to_download_urls, short_type_to_package_download_urls,
};
