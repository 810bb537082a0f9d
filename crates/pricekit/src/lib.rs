//! Shared infrastructure for the pricing service.
//!
//! The two pieces with real design content are:
//!
//! - [`partition`]: deterministic, size-bounded splitting of batch workloads
//!   for downstream fan-out.
//! - [`net`]: discovery of a stable, site-local IPv4 address that identifies
//!   this process when several replicas race to claim a scheduled task.
//!
//! The remaining modules are small helpers shared across the service: unique
//! id generation ([`id`]) and null-default, rounding, date and JSON helpers
//! ([`support`]).
//!
//! # Example
//!
//! ```
//! use pricekit::{partition_into_chunks, partition_into_two};
//!
//! let work = [1, 2, 3, 4, 5];
//! let chunks = partition_into_chunks(&work, Some(2)).unwrap();
//! assert_eq!(chunks, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
//!
//! let (head, tail) = partition_into_two(&work, Some(2)).unwrap();
//! assert_eq!((head, tail), (&[1, 2][..], &[3, 4, 5][..]));
//! ```

mod error;
pub mod id;
mod mutex;
pub mod net;
pub mod partition;
pub mod support;

pub use crate::error::*;
pub use crate::id::{ObjectId, ObjectIdGenerator, new_unique_id};
pub use crate::net::{
    InterfaceSource, LocalAddressResolver, NetInterface, SystemInterfaces, resolve_local_address,
};
pub use crate::partition::{
    FORK_COUNT_LIMIT, chunk_ranges, partition_into_chunks, partition_into_chunks_owned,
    partition_into_two,
};
