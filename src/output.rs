//! JSON output for parsed paths and token streams.
//!
//! Anything in [`crate::ast`] serializes through serde. A step becomes an
//! object with `kind` and `value`, a path becomes an array of steps, and a
//! token carries its offsets:
//!
//! ```
//! use jsonpath_ast::output::to_json;
//!
//! let path = jsonpath_ast::parse("$[*]").unwrap();
//! assert_eq!(
//!     to_json(&path).unwrap(),
//!     r#"[{"kind":"Root","value":"$"},{"kind":"ArrayWildcard","value":"[*]"}]"#
//! );
//! ```

use serde::Serialize;

/// Serializes `value` as compact JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Serializes `value` as JSON with 2-space indentation.
///
/// # Examples
///
/// ```
/// use jsonpath_ast::output::to_json_pretty;
///
/// let path = jsonpath_ast::parse("$.a").unwrap();
/// let json = to_json_pretty(&path).unwrap();
/// assert!(json.starts_with("[\n  {\n    \"kind\": \"Root\""));
/// ```
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Converts `value` into a [`serde_json::Value`] for callers that embed the
/// result in a larger document.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(value)
}
