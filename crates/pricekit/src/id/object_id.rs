use core::{fmt, str::FromStr};
use std::sync::LazyLock;

use portable_atomic::{AtomicU32, Ordering};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::{RandSource, SystemClock, ThreadRandom, TimeSource};
use crate::Error;

const COUNTER_MASK: u32 = 0x00FF_FFFF;

/// A 12-byte identifier: 4-byte big-endian seconds, 5-byte generator value,
/// 3-byte big-endian counter.
///
/// Displays and serializes as 24 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub const fn to_bytes(self) -> [u8; 12] {
        self.0
    }

    /// Seconds since the Unix epoch at which this id was generated.
    pub const fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// The per-generator random value.
    pub fn process_unique(&self) -> [u8; 5] {
        let mut out = [0; 5];
        out.copy_from_slice(&self.0[4..9]);
        out
    }

    /// The 24-bit counter value.
    pub const fn counter(&self) -> u32 {
        u32::from_be_bytes([0, self.0[9], self.0[10], self.0[11]])
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({self})")
    }
}

impl FromStr for ObjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 24 {
            return Err(Error::invalid_argument(format!(
                "object id must be 24 hex characters, got {s:?}"
            )));
        }
        // `from_str_radix` tolerates a leading sign, so vet every byte first.
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::invalid_argument(format!(
                "object id is not hexadecimal: {s:?}"
            )));
        }
        let mut bytes = [0u8; 12];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).map_err(|_| {
                Error::invalid_argument(format!("object id is not hexadecimal: {s:?}"))
            })?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Generates [`ObjectId`]s from a time source and a random source.
///
/// The random value and the counter seed are drawn once at construction. The
/// counter advances atomically, so a shared generator is safe across threads
/// and yields 2^24 distinct ids per second before wrapping.
///
/// # Example
///
/// ```
/// use pricekit::id::{ObjectIdGenerator, SystemClock, ThreadRandom};
///
/// let generator = ObjectIdGenerator::new(SystemClock, ThreadRandom);
/// let a = generator.next_id();
/// let b = generator.next_id();
/// assert_ne!(a, b);
/// assert_eq!(a.to_string().len(), 24);
/// ```
pub struct ObjectIdGenerator<T>
where
    T: TimeSource<u32>,
{
    time: T,
    process_unique: [u8; 5],
    counter: AtomicU32,
}

impl<T> ObjectIdGenerator<T>
where
    T: TimeSource<u32>,
{
    /// Creates a generator that stamps ids with `time` and draws its
    /// per-generator value and counter seed from `rng`.
    pub fn new<R>(time: T, rng: R) -> Self
    where
        R: RandSource<u64> + RandSource<u32>,
    {
        let unique = RandSource::<u64>::rand(&rng);
        let seed = RandSource::<u32>::rand(&rng);
        let mut process_unique = [0; 5];
        process_unique.copy_from_slice(&unique.to_be_bytes()[3..]);
        Self {
            time,
            process_unique,
            counter: AtomicU32::new(seed & COUNTER_MASK),
        }
    }

    /// Returns the next id.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> ObjectId {
        let secs = self.time.current_secs();
        let count = self.counter.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(&self.process_unique);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
        ObjectId(bytes)
    }
}

static GENERATOR: LazyLock<ObjectIdGenerator<SystemClock>> =
    LazyLock::new(|| ObjectIdGenerator::new(SystemClock, ThreadRandom));

/// Returns a fresh 24-character lowercase hex id from the process-wide
/// generator.
pub fn new_unique_id() -> String {
    GENERATOR.next_id().to_string()
}
