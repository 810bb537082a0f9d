//! Process-unique, roughly time-ordered identifiers.
//!
//! [`ObjectId`] follows the 12-byte layout used by document stores: a
//! big-endian seconds timestamp, a random value fixed per generator, and a
//! wrapping counter. [`new_unique_id`] renders one as 24 lowercase hex
//! characters using a process-wide generator.

mod object_id;
mod rand;
#[cfg(test)]
mod tests;
mod time;

pub use self::object_id::*;
pub use self::rand::*;
pub use self::time::*;
