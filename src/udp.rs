//! UDP probe resolver.
//!
//! `connect` on a datagram socket never touches the wire: the kernel only
//! records the peer and selects a local source address and interface from
//! its routing table. Reading the socket's local address back afterwards
//! yields the default outgoing address for the target's version.

use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6, UdpSocket};

use tracing::{debug, trace_span};

use crate::{Error, Version};

///////////////////////////////////////////////////////////////////////////////
// Hardcoded probe targets

const DEFAULT_PROBE_PORT: u16 = 53;

/// IPv4 probe target in TEST-NET-3 (RFC 5737), reserved for documentation.
///
/// Guaranteed never to carry traffic, which is irrelevant here: nothing is
/// ever sent to the target.
pub const DOCUMENTATION_V4: SocketAddr = SocketAddr::V4(SocketAddrV4::new(
    Ipv4Addr::new(203, 0, 113, 1),
    DEFAULT_PROBE_PORT,
));

/// IPv6 probe target in the RFC 3849 documentation prefix.
pub const DOCUMENTATION_V6: SocketAddr = SocketAddr::V6(SocketAddrV6::new(
    Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1),
    DEFAULT_PROBE_PORT,
    0,
    0,
));

/// Google public DNS IPv4 probe target, for hosts whose routing policy
/// special-cases documentation blocks.
pub const GOOGLE_DNS_V4: SocketAddr = SocketAddr::V4(SocketAddrV4::new(
    Ipv4Addr::new(8, 8, 8, 8),
    DEFAULT_PROBE_PORT,
));

/// Google public DNS IPv6 probe target.
pub const GOOGLE_DNS_V6: SocketAddr = SocketAddr::V6(SocketAddrV6::new(
    // 2001:4860:4860::8888
    Ipv6Addr::new(0x2001, 0x4860, 0x4860, 0, 0, 0, 0, 0x8888),
    DEFAULT_PROBE_PORT,
    0,
    0,
));

///////////////////////////////////////////////////////////////////////////////
// Resolver

/// Options to build a UDP probe resolver.
///
/// The target's version decides the version resolved; the target itself only
/// has to look globally routable, since no datagram is sent towards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    target: SocketAddr,
}

impl Resolver {
    /// Create a resolver probing towards `target`.
    #[must_use]
    pub const fn new(target: SocketAddr) -> Self {
        Self { target }
    }

    /// Create a resolver for `version` probing towards its builtin
    /// documentation-block target.
    #[must_use]
    pub const fn for_version(version: Version) -> Self {
        match version {
            Version::V4 => Self::new(DOCUMENTATION_V4),
            Version::V6 => Self::new(DOCUMENTATION_V6),
        }
    }

    /// The remote endpoint the probe socket is associated with.
    #[must_use]
    pub const fn target(&self) -> SocketAddr {
        self.target
    }

    /// The address version this resolver probes for.
    #[must_use]
    pub const fn version(&self) -> Version {
        match self.target {
            SocketAddr::V4(_) => Version::V4,
            SocketAddr::V6(_) => Version::V6,
        }
    }

    /// Resolve the default outgoing address for this resolver's version.
    ///
    /// Makes exactly one attempt, blocks on no network I/O and emits no
    /// packets. The probe socket is dropped before returning on every path.
    pub fn resolve(&self) -> Result<IpAddr, Error> {
        let version = self.version();
        let _span = trace_span!("udp resolver", %version, target = %self.target).entered();

        let bind_addr: SocketAddr = match version {
            Version::V4 => (Ipv4Addr::UNSPECIFIED, 0).into(),
            Version::V6 => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };
        let socket = UdpSocket::bind(bind_addr).map_err(|source| {
            if source.kind() == io::ErrorKind::Unsupported {
                Error::Unsupported(version)
            } else {
                Error::Socket { version, source }
            }
        })?;
        socket
            .connect(self.target)
            .map_err(|source| Error::NoRoute { version, source })?;
        let addr = socket
            .local_addr()
            .map_err(|source| Error::LocalAddr { version, source })?
            .ip();
        if !version.matches(addr) {
            return Err(Error::Mismatch { version, addr });
        }
        debug!(%addr, "kernel selected outgoing address");
        Ok(addr)
    }
}
