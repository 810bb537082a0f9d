use std::time::{SystemTime, UNIX_EPOCH};

/// A trait for time sources that return a wall-clock timestamp.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests. The unit is **seconds** since the Unix epoch.
///
/// # Example
///
/// ```
/// use pricekit::id::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<u32> for FixedTime {
///     fn current_secs(&self) -> u32 {
///         1234
///     }
/// }
///
/// assert_eq!(FixedTime.current_secs(), 1234);
/// ```
pub trait TimeSource<T> {
    /// Returns the current time in seconds since the Unix epoch.
    fn current_secs(&self) -> T;
}

/// Reads `SystemTime::now()` on every call.
///
/// A clock set before 1970 reads as zero; one past 2106 saturates at
/// `u32::MAX`.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource<u32> for SystemClock {
    fn current_secs(&self) -> u32 {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        u32::try_from(secs).unwrap_or(u32::MAX)
    }
}
