//! Local claim-address discovery.
//!
//! Several identical replicas of the pricing service run the same scheduled
//! jobs. Each replica claims a job by writing its host address; the one whose
//! address sticks runs the job. This module finds that address: the first
//! site-local IPv4 address on an up, non-loopback, non-virtual interface.

mod interface;
mod resolver;
mod system;

pub use interface::*;
pub use resolver::*;
pub use system::*;
