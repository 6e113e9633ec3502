//! Find the default outgoing IP addresses of a device.
//!
//! Resolution asks the kernel routing table which source address it would
//! pick to reach the public internet, by `connect`ing an unsent-on UDP
//! socket towards a fixed remote endpoint and reading the locally-bound
//! address back. No packet leaves the host.

mod error;

pub mod udp;

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub use crate::error::Error;

///////////////////////////////////////////////////////////////////////////////

/// The IP address version to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    /// IPv4.
    V4,
    /// IPv6.
    V6,
}

impl Version {
    /// Returns `true` if the address matches this version.
    #[must_use]
    pub fn matches(self, addr: IpAddr) -> bool {
        match self {
            Self::V4 => addr.is_ipv4(),
            Self::V6 => addr.is_ipv6(),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => f.write_str("IPv4"),
            Self::V6 => f.write_str("IPv6"),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

/// Resolve the default outgoing address for `version` using the builtin
/// documentation-block probe target.
///
/// The two versions are independent: an IPv6 failure says nothing about
/// IPv4 and vice versa. A single attempt is made per call.
pub fn resolve(version: Version) -> Result<IpAddr, Error> {
    udp::Resolver::for_version(version).resolve()
}

/// Resolve the default outgoing IPv4 address.
pub fn resolve_v4() -> Result<Ipv4Addr, Error> {
    match resolve(Version::V4)? {
        IpAddr::V4(addr) => Ok(addr),
        IpAddr::V6(addr) => Err(Error::Mismatch {
            version: Version::V4,
            addr: IpAddr::V6(addr),
        }),
    }
}

/// Resolve the default outgoing IPv6 address.
pub fn resolve_v6() -> Result<Ipv6Addr, Error> {
    match resolve(Version::V6)? {
        IpAddr::V6(addr) => Ok(addr),
        IpAddr::V4(addr) => Err(Error::Mismatch {
            version: Version::V6,
            addr: IpAddr::V4(addr),
        }),
    }
}
