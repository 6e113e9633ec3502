use std::io;
use std::net::IpAddr;

use thiserror::Error;

use crate::Version;

/// An error produced while resolving an outgoing address.
///
/// Every variant is scoped to a single version's resolution; a failure for
/// one version never affects the other.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested address version is not supported on this host.
    #[error("{0} is not supported on this host")]
    Unsupported(Version),
    /// Opening the probe socket failed.
    #[error("failed to open {version} datagram socket: {source}")]
    Socket {
        version: Version,
        #[source]
        source: io::Error,
    },
    /// Associating the probe socket with its target failed. Most commonly
    /// the host has no outbound route for this version.
    #[error("no outbound {version} route: {source}")]
    NoRoute {
        version: Version,
        #[source]
        source: io::Error,
    },
    /// Querying the socket's locally-bound address failed.
    #[error("failed to query local {version} address: {source}")]
    LocalAddr {
        version: Version,
        #[source]
        source: io::Error,
    },
    /// The kernel selected an address of a different version than requested.
    #[error("{version} resolution produced mismatched address {addr}")]
    Mismatch { version: Version, addr: IpAddr },
}

impl Error {
    /// The address version the failed resolution was for.
    #[must_use]
    pub fn version(&self) -> Version {
        match self {
            Self::Unsupported(version)
            | Self::Socket { version, .. }
            | Self::NoRoute { version, .. }
            | Self::LocalAddr { version, .. }
            | Self::Mismatch { version, .. } => *version,
        }
    }
}
