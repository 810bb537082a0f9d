use serde::Serialize;

use crate::Result;

/// Serializes `value` to a compact JSON string with object keys sorted.
///
/// Keys are sorted at every nesting level so equal values always produce the
/// same text, which keeps cache keys and change detection stable. Date-time
/// fields should use [`default_format`] to match the service's wire format.
///
/// # Errors
///
/// Returns [`Error::Json`] if `value` cannot be represented as JSON (for
/// example a map with non-string keys).
///
/// [`default_format`]: crate::support::datetime::default_format
/// [`Error::Json`]: crate::Error::Json
///
/// # Example
///
/// ```
/// use pricekit::support::to_json_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Price {
///     sku: &'static str,
///     amount: f64,
/// }
///
/// let json = to_json_string(&Price { sku: "A-1", amount: 9.5 }).unwrap();
/// assert_eq!(json, r#"{"amount":9.5,"sku":"A-1"}"#);
/// ```
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    // Without `preserve_order`, `serde_json::Map` is a BTreeMap.
    let tree = serde_json::to_value(value)?;
    Ok(serde_json::to_string(&tree)?)
}
