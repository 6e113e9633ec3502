use std::process::ExitCode;

use outgoing_ip::Version;
use tracing_subscriber::EnvFilter;

fn report(version: Version) -> bool {
    match outgoing_ip::resolve(version) {
        Ok(addr) => {
            println!("Successfully retrieved default outgoing {version} address: {addr}");
            true
        }
        Err(err) => {
            eprintln!("cannot retrieve default outgoing {version} address: {err}");
            false
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Both versions are always attempted; one failing never skips the other.
    let v4 = report(Version::V4);
    let v6 = report(Version::V6);
    if v4 && v6 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
