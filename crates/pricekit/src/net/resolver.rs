use std::{
    net::Ipv4Addr,
    sync::{Arc, LazyLock, OnceLock},
};

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::{InterfaceSource, SystemInterfaces, select_claim_address};
#[cfg(not(feature = "parking-lot"))]
use crate::mutex::PoisonError;
use crate::{Error, Result, mutex::Mutex};

/// Resolves and caches the local claim address.
///
/// The address identifies this process when several replicas race to claim a
/// scheduled task, so resolution must fail loudly instead of falling back to
/// loopback: a loopback claim would make every replica look identical.
///
/// ## Behavior
/// - The first successful resolution is cached for the lifetime of the
///   resolver and never recomputed.
/// - Failures are **not** cached. The next call enumerates interfaces again.
/// - Once resolved, reads are lock-free. Only the first resolution (and
///   retries after failures) take the lock, and the cache is re-checked after
///   acquiring it so concurrent first callers enumerate once.
///
/// Most callers want the process-wide instance behind
/// [`resolve_local_address`]. Construct a resolver directly to plug in a
/// custom [`InterfaceSource`].
///
/// # Example
///
/// ```
/// use pricekit::{InterfaceSource, LocalAddressResolver, NetInterface};
/// use std::net::Ipv4Addr;
///
/// struct Fixed;
/// impl InterfaceSource for Fixed {
///     fn interfaces(&self) -> std::io::Result<Vec<NetInterface>> {
///         Ok(vec![NetInterface::new("eth0").with_addr(Ipv4Addr::new(10, 0, 0, 7))])
///     }
/// }
///
/// let resolver = LocalAddressResolver::new(Fixed);
/// assert_eq!(resolver.resolve().unwrap(), Ipv4Addr::new(10, 0, 0, 7));
/// assert_eq!(resolver.cached(), Some(Ipv4Addr::new(10, 0, 0, 7)));
/// ```
pub struct LocalAddressResolver<S> {
    source: S,
    resolved: OnceLock<Ipv4Addr>,
    lock: Mutex<()>,
}

impl<S: InterfaceSource> LocalAddressResolver<S> {
    /// Creates an unresolved resolver backed by `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            resolved: OnceLock::new(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the cached address, if a previous call resolved one.
    pub fn cached(&self) -> Option<Ipv4Addr> {
        self.resolved.get().copied()
    }

    /// Returns the claim address, resolving it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AddressResolution`] if no up, non-loopback,
    /// non-virtual interface carries a site-local IPv4 address, or if the
    /// platform fails to enumerate interfaces. A source that panicked during
    /// an earlier call does not prevent later calls from retrying.
    pub fn resolve(&self) -> Result<Ipv4Addr> {
        if let Some(addr) = self.resolved.get() {
            return Ok(*addr);
        }
        self.resolve_slow()
    }

    #[cold]
    #[inline(never)]
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self)))]
    fn resolve_slow(&self) -> Result<Ipv4Addr> {
        let _guard = {
            #[cfg(feature = "parking-lot")]
            {
                self.lock.lock()
            }
            // The lock guards no data, so a panic in an earlier resolution
            // leaves nothing inconsistent behind.
            #[cfg(not(feature = "parking-lot"))]
            {
                self.lock.lock().unwrap_or_else(PoisonError::into_inner)
            }
        };

        // Another thread may have finished while we waited for the lock.
        if let Some(addr) = self.resolved.get() {
            return Ok(*addr);
        }

        let interfaces = self
            .source
            .interfaces()
            .map_err(|err| Error::AddressResolution {
                reason: "interface enumeration failed".into(),
                source: Some(Arc::new(err)),
            })
            .inspect_err(|_e| {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = ?_e, "failed to enumerate network interfaces");
            })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(count = interfaces.len(), "enumerated network interfaces");

        let addr = match select_claim_address(&interfaces) {
            Some(addr) if addr != Ipv4Addr::LOCALHOST => addr,
            found => {
                #[cfg(feature = "tracing")]
                tracing::warn!(?found, "no usable site-local IPv4 address");
                return Err(Error::address_resolution(format!(
                    "no site-local IPv4 address on any up, non-loopback, non-virtual interface (found: {found:?})"
                )));
            }
        };

        #[cfg(feature = "tracing")]
        tracing::info!(%addr, "resolved local claim address");

        Ok(*self.resolved.get_or_init(|| addr))
    }
}

static LOCAL_ADDRESS: LazyLock<LocalAddressResolver<SystemInterfaces>> =
    LazyLock::new(|| LocalAddressResolver::new(SystemInterfaces));

/// Returns this host's claim address, resolved once per process.
///
/// Safe to call from any number of threads. See [`LocalAddressResolver`] for
/// the caching and failure semantics.
///
/// # Errors
///
/// See [`LocalAddressResolver::resolve`].
pub fn resolve_local_address() -> Result<Ipv4Addr> {
    LOCAL_ADDRESS.resolve()
}
