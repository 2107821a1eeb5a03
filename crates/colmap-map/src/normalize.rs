//! Name normalization for comparison.

/// Reduce a field or column name to its comparable form.
///
/// Lowercases and keeps only `[a-z0-9]`; every other character is dropped
/// rather than replaced, so `"SKU_ID"` and `"Sku Id"` both become `"skuid"`.
/// Non-ASCII letters are dropped too.
pub fn normalize_name(raw: &str) -> String {
    raw.chars()
        .map(|ch| ch.to_ascii_lowercase())
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
        .collect()
}
