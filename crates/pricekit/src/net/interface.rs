use std::{
    io,
    net::{IpAddr, Ipv4Addr},
};

/// A snapshot of one network interface and the addresses bound to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetInterface {
    /// Interface name as reported by the platform (e.g. `eth0`).
    pub name: String,
    /// Whether the interface is administratively up.
    pub up: bool,
    /// Whether this is a loopback interface.
    pub loopback: bool,
    /// Whether this is a virtual sub-interface (an alias such as `eth0:1`).
    pub is_virtual: bool,
    /// Bound addresses, in platform enumeration order.
    pub addrs: Vec<IpAddr>,
}

impl NetInterface {
    /// Creates an interface that is up, not loopback and not virtual, with no
    /// addresses bound.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            up: true,
            loopback: false,
            is_virtual: false,
            addrs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_addr(mut self, addr: impl Into<IpAddr>) -> Self {
        self.addrs.push(addr.into());
        self
    }

    #[must_use]
    pub fn down(mut self) -> Self {
        self.up = false;
        self
    }

    #[must_use]
    pub fn loopback(mut self) -> Self {
        self.loopback = true;
        self
    }

    #[must_use]
    pub fn virtual_alias(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    /// Whether addresses on this interface may be used as a claim address.
    pub fn is_candidate(&self) -> bool {
        self.up && !self.loopback && !self.is_virtual
    }
}

/// A platform capability that enumerates network interfaces.
///
/// [`SystemInterfaces`] is the real implementation. Tests and embedders can
/// supply their own to make resolution deterministic, since the order in
/// which the platform reports interfaces is best-effort only.
///
/// [`SystemInterfaces`]: crate::net::SystemInterfaces
pub trait InterfaceSource {
    /// Returns every interface known to the platform, in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns the underlying platform error if enumeration fails.
    fn interfaces(&self) -> io::Result<Vec<NetInterface>>;
}

impl<S: InterfaceSource + ?Sized> InterfaceSource for &S {
    fn interfaces(&self) -> io::Result<Vec<NetInterface>> {
        (**self).interfaces()
    }
}

/// Returns `true` for addresses in a private, non-globally-routable range.
///
/// For IPv4 these are the RFC 1918 blocks. For IPv6 this is the deprecated
/// site-local block `fec0::/10`.
pub fn is_site_local(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => v4.is_private(),
        IpAddr::V6(v6) => (v6.segments()[0] & 0xffc0) == 0xfec0,
    }
}

/// Picks the claim address from an interface listing.
///
/// Interfaces that are down, loopback or virtual are skipped. Within the rest,
/// the first address that is not loopback, is site-local and is IPv4 wins.
/// Enumeration order is preserved.
pub fn select_claim_address(interfaces: &[NetInterface]) -> Option<Ipv4Addr> {
    interfaces
        .iter()
        .filter(|iface| iface.is_candidate())
        .flat_map(|iface| iface.addrs.iter())
        .find_map(|addr| match addr {
            IpAddr::V4(v4) if !addr.is_loopback() && is_site_local(addr) => Some(*v4),
            _ => None,
        })
}
