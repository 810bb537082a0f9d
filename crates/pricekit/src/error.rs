//! Error types for `pricekit`.
//!
//! Every fallible operation in the crate returns [`Result`]. The variants map
//! one-to-one onto the failure modes callers are expected to handle:
//!
//! - `InvalidArgument`: a caller broke an input contract (for example a zero
//!   chunk-size limit).
//! - `AddressResolution`: no claim address could be determined. This is never
//!   cached, so a later call enumerates the interfaces again.
//! - `DateTime` / `Json`: failures from the support helpers.

use std::{io, sync::Arc};

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `pricekit` can produce.
///
/// The type is `Clone` so that a single resolution failure can be handed to
/// every thread that was waiting on it.
#[derive(Clone, thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The caller supplied an argument outside the accepted domain.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// No usable site-local IPv4 address was found, or the platform failed
    /// to enumerate network interfaces.
    #[error("failed to resolve local address: {reason}")]
    AddressResolution {
        reason: String,
        #[source]
        source: Option<Arc<io::Error>>,
    },

    /// A date-time string did not match the expected format.
    #[error("invalid date-time: {0}")]
    DateTime(#[from] chrono::ParseError),

    /// A value could not be serialized to JSON.
    #[error("json serialization failed: {0}")]
    Json(#[source] Arc<serde_json::Error>),
}

impl Error {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn address_resolution(reason: impl Into<String>) -> Self {
        Self::AddressResolution {
            reason: reason.into(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(Arc::new(err))
    }
}
