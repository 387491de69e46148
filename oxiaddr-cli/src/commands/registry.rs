//! Registry command implementation.

use crate::utils::{Address, InputKind};
use oxiaddr_ipv4::Registry;

/// Resolve the registry of an IPv4 address, or of the IPv4 address
/// embedded in a mapped, compat-v4 or ISATAP IPv6 address.
pub fn resolve(input: &str, kind: InputKind) -> Result<Registry, Box<dyn std::error::Error>> {
    let ipv4 = match Address::parse(input, kind)? {
        Address::V4(addr) => addr,
        Address::V6(addr) => addr
            .embedded_ipv4()
            .ok_or_else(|| format!("{addr} does not carry an IPv4 address"))?,
    };
    Ok(ipv4.registry())
}

pub fn cmd_registry(
    address: &str,
    kind: InputKind,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = resolve(address, kind)?;

    if verbose {
        println!("Address: {}", address);
        println!("Registry: {}", registry);
        if !registry.is_known() {
            println!("  No assignment covers this address");
        }
    } else {
        println!("{}", registry);
    }

    Ok(())
}
