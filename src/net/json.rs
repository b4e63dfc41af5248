//! JSON extraction utilities for upstream API payloads.
//!
//! The upstream APIs are loosely typed: ids are sometimes numbers and
//! sometimes strings, optional fields are `null` or missing, and nested image
//! objects may be absent entirely. These helpers navigate a
//! [`serde_json::Value`] with dot notation. A missing or mistyped value comes
//! back as `None`, leaving the caller to pick a default; only
//! [`require_array`] reports an error, for the envelope arrays a payload is
//! unusable without.
//!
//! # Examples
//!
//! ```rust
//! use kyara::net::json;
//! use serde_json::json;
//!
//! let item = json!({
//!     "character": {
//!         "mal_id": 40,
//!         "name": "Monkey D., Luffy",
//!         "images": { "jpg": { "image_url": "https://cdn.example/luffy.jpg" } }
//!     },
//!     "role": "Main"
//! });
//!
//! assert_eq!(json::extract_scalar(&item, "character.mal_id").as_deref(), Some("40"));
//! assert_eq!(json::extract_str(&item, "role").as_deref(), Some("Main"));
//! assert_eq!(json::extract_str(&item, "character.images.webp.image_url"), None);
//! ```

use serde_json::Value;

/// Borrows a value from nested JSON using dot notation.
///
/// # Returns
///
/// * `Some(&Value)` - The value at the specified path if found
/// * `None` - If any part of the path doesn't exist
///
/// # Examples
///
/// ```rust
/// use kyara::net::json;
/// use serde_json::json;
///
/// let data = json!({ "meta": { "totalItems": 58 } });
///
/// assert_eq!(json::extract_path(&data, "meta.totalItems").and_then(|v| v.as_u64()), Some(58));
/// assert!(json::extract_path(&data, "meta.missing").is_none());
/// ```
pub fn extract_path<'a>(json: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = json;

    for key in path.split('.') {
        current = current.get(key)?;
    }

    Some(current)
}

/// Extracts a non-empty string at `path`.
///
/// Empty and whitespace-only strings count as missing, as do `null` and
/// non-string values.
pub fn extract_str(json: &Value, path: &str) -> Option<String> {
    extract_path(json, path)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Extracts a string or number at `path` rendered as a string.
///
/// Useful for identifiers that an API may encode either way.
pub fn extract_scalar(json: &Value, path: &str) -> Option<String> {
    match extract_path(json, path)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extracts an array that the payload envelope must contain.
///
/// # Errors
///
/// * [`Error::Parse`](crate::Error::Parse) - If the path is missing or not an array
pub fn require_array<'a>(json: &'a Value, path: &str) -> crate::Result<&'a [Value]> {
    extract_path(json, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| crate::Error::parse(format!("Expected array at `{}`", path)))
}
