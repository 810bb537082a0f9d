use std::io;

use super::{InterfaceSource, NetInterface};

/// Enumerates the host's interfaces with `getifaddrs(3)`.
///
/// `getifaddrs` reports one entry per (interface, address) pair, plus link
/// layer entries without an IP address. Entries are folded into one
/// [`NetInterface`] per name, in the order names first appear. Alias labels
/// (`eth0:1`) are reported as virtual interfaces.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemInterfaces;

#[cfg(unix)]
impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> io::Result<Vec<NetInterface>> {
        use nix::{ifaddrs::getifaddrs, net::if_::InterfaceFlags};
        use std::net::IpAddr;

        let mut interfaces: Vec<NetInterface> = Vec::new();
        for entry in getifaddrs().map_err(io::Error::from)? {
            let index = match interfaces
                .iter()
                .position(|iface| iface.name == entry.interface_name)
            {
                Some(index) => index,
                None => {
                    interfaces.push(NetInterface {
                        is_virtual: entry.interface_name.contains(':'),
                        name: entry.interface_name.clone(),
                        up: entry.flags.contains(InterfaceFlags::IFF_UP),
                        loopback: entry.flags.contains(InterfaceFlags::IFF_LOOPBACK),
                        addrs: Vec::new(),
                    });
                    interfaces.len() - 1
                }
            };

            let Some(address) = entry.address else {
                continue;
            };
            if let Some(sin) = address.as_sockaddr_in() {
                interfaces[index].addrs.push(IpAddr::V4(sin.ip()));
            } else if let Some(sin6) = address.as_sockaddr_in6() {
                interfaces[index].addrs.push(IpAddr::V6(sin6.ip()));
            }
        }

        Ok(interfaces)
    }
}

#[cfg(not(unix))]
impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> io::Result<Vec<NetInterface>> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "interface enumeration is only supported on unix platforms",
        ))
    }
}
