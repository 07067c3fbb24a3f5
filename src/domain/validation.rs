//! Client-side validation for collector prompts.
//!
//! These checks gate acceptance of raw operator input; a rejected value is
//! re-prompted by the collector and never escapes it.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Composer's own package-name grammar: lowercase alphanumeric segments with
/// single `.`/`_` separators or one-to-two hyphens between runs.
static COMPOSER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([_.-]?[a-z0-9]+)*/[a-z0-9](([_.]|-{1,2})?[a-z0-9]+)*$")
        .expect("composer name pattern is valid")
});

/// HTML5-style strict email address check.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

/// Validates the application name.
///
/// The raw input must survive a round-trip through "strip non-letters, then
/// PascalCase-ize" unchanged: letters only, leading uppercase.
pub fn is_valid_application_name(raw: &str) -> bool {
    let stripped: String = raw.chars().filter(char::is_ascii_alphabetic).collect();
    if stripped.is_empty() {
        return false;
    }
    let mut chars = stripped.chars();
    let pascal = match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => return false,
    };
    pascal == raw
}

/// Validates a composer package name (`vendor/package`).
pub fn is_valid_composer_name(raw: &str) -> bool {
    COMPOSER_NAME.is_match(raw)
}

/// Validates an author email address.
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL.is_match(raw)
}

/// Validates an author homepage: must parse as an HTTPS URL with a host.
pub fn is_valid_https_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => url.scheme() == "https" && url.host_str().is_some(),
        Err(_) => false,
    }
}
