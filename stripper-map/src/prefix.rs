//! Prefix matching
//!
//! The match rule is deliberately first-in-list-order, not longest-match:
//! with prefixes `["a_", "ab_"]`, the field `"ab_x"` becomes `"b_x"` because
//! `"a_"` is tried first.

/// Strip the first matching prefix from `field`.
///
/// Prefixes are tried in the given order; the first one that is a literal
/// prefix of `field` is removed. If none match, `field` is returned
/// unchanged. Total over all inputs, including the empty string and an
/// empty prefix list.
pub fn strip_prefix<'a>(field: &'a str, prefixes: &[String]) -> &'a str {
    for prefix in prefixes {
        if let Some(stripped) = field.strip_prefix(prefix.as_str()) {
            return stripped;
        }
    }
    field
}
