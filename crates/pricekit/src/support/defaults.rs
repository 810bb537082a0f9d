//! Null-default accessors for values read from loosely-typed sources.

/// Returns `value`, or `fallback` when it is absent.
#[inline]
pub fn default_if_absent<T>(value: Option<T>, fallback: T) -> T {
    value.unwrap_or(fallback)
}

/// Returns `value`, or zero for numeric types (more generally, `T::default()`)
/// when it is absent.
#[inline]
pub fn zero_if_absent<T: Default>(value: Option<T>) -> T {
    value.unwrap_or_default()
}

/// Returns `value`, or `false` when it is absent.
#[inline]
pub fn false_if_absent(value: Option<bool>) -> bool {
    value.unwrap_or(false)
}
