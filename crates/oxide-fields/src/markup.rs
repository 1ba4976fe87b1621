//! Markup helpers shared by the field variants.

/// Escapes HTML special characters.
///
/// Safe for both element content and double-quoted attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Joins raw attribute fragments, each preceded by a space.
///
/// Fragments are emitted verbatim. Callers own their escaping.
pub(crate) fn extra_attrs(attrs: &[&str]) -> String {
    attrs.iter().map(|attr| format!(" {attr}")).collect()
}
