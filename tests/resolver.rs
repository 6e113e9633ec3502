use std::net::IpAddr;

use outgoing_ip::{Error, Version, udp};

#[test]
fn versions_resolve_independently() {
    // Order must not matter and one version's failure must not disturb the
    // other's result.
    let v6_first = outgoing_ip::resolve(Version::V6).ok();
    let v4 = outgoing_ip::resolve(Version::V4).ok();
    let v6 = outgoing_ip::resolve(Version::V6).ok();
    assert_eq!(v6_first, v6);
    if let Some(addr) = v4 {
        assert!(matches!(addr, IpAddr::V4(_)));
    }
    if let Some(addr) = v6 {
        assert!(matches!(addr, IpAddr::V6(_)));
    }
}

#[test]
fn typed_resolution_agrees_with_generic() {
    match (outgoing_ip::resolve_v4(), outgoing_ip::resolve(Version::V4)) {
        (Ok(typed), Ok(generic)) => assert_eq!(IpAddr::V4(typed), generic),
        (Err(_), Err(_)) => {}
        (typed, generic) => panic!("disagreement: {typed:?} vs {generic:?}"),
    }
}

#[test]
fn resolved_address_is_never_the_probe_target() {
    if let Ok(addr) = outgoing_ip::resolve(Version::V4) {
        assert_ne!(addr, udp::DOCUMENTATION_V4.ip());
    }
    if let Ok(addr) = outgoing_ip::resolve(Version::V6) {
        assert_ne!(addr, udp::DOCUMENTATION_V6.ip());
    }
}

#[test]
fn errors_carry_the_failed_version() {
    if let Err(err) = outgoing_ip::resolve(Version::V6) {
        assert_eq!(err.version(), Version::V6);
        assert!(err.to_string().contains("IPv6"));
    }
    if let Err(err) = outgoing_ip::resolve(Version::V4) {
        assert_eq!(err.version(), Version::V4);
        assert!(err.to_string().contains("IPv4"));
    }
}

#[test]
fn no_route_reports_the_association_step() {
    // Synthesised rather than host-dependent: the display contract is what
    // the binary prints to stderr.
    let err = Error::NoRoute {
        version: Version::V6,
        source: std::io::Error::from(std::io::ErrorKind::NetworkUnreachable),
    };
    let msg = err.to_string();
    assert!(msg.starts_with("no outbound IPv6 route:"));
}
