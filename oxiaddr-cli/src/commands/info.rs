//! Info command implementation.

use crate::utils::{Address, InputKind};
use oxiaddr_core::FormatOptions;
use oxiaddr_ipv4::Ipv4Address;
use oxiaddr_ipv6::Ipv6Format;
use serde::Serialize;

/// Everything `info` reports about one address.
#[derive(Debug, Serialize)]
pub struct AddressInfo {
    pub input: String,
    pub family: &'static str,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_length: Option<u8>,
    pub scope: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<String>,
}

impl AddressInfo {
    pub fn collect(input: &str, kind: InputKind) -> oxiaddr_core::Result<Self> {
        let address = Address::parse(input, kind)?;
        let options = FormatOptions::DEFAULT;

        let info = match address {
            Address::V4(addr) => Self {
                input: input.to_string(),
                family: address.family(),
                address: addr.to_dotted(options),
                full: None,
                prefix_length: addr.prefix_length(),
                scope: ipv4_labels(&addr),
                ipv4: None,
                registry: Some(addr.registry().to_string()),
                reverse: addr.to_reverse_string(options).ok(),
            },
            Address::V6(addr) => {
                let embedded = addr.embedded_ipv4();
                Self {
                    input: input.to_string(),
                    family: address.family(),
                    address: addr.to_compressed(options)?,
                    full: Some(addr.format(Ipv6Format::FullUncompressed, options)?),
                    prefix_length: addr.prefix_length(),
                    scope: addr.scope().labels().into_iter().map(String::from).collect(),
                    ipv4: embedded.map(|v4| v4.to_dotted(options)),
                    registry: embedded.map(|v4| v4.registry().to_string()),
                    reverse: addr.to_reverse_nibbles(Default::default(), options).ok(),
                }
            }
        };
        Ok(info)
    }

    /// `KEY=value` lines for scripts.
    pub fn machine_readable(&self) -> Vec<String> {
        let tag = if self.family == "IPv4" { "IPV4" } else { "IPV6" };
        let mut lines = vec![format!("{tag}={}", self.address)];
        if let Some(full) = &self.full {
            lines.push(format!("{tag}_FULL={full}"));
        }
        if let Some(len) = self.prefix_length {
            lines.push(format!("{tag}_PREFIXLENGTH={len}"));
        }
        lines.push(format!("{tag}_TYPE={}", self.scope.join(",")));
        if let Some(ipv4) = &self.ipv4 {
            lines.push(format!("IPV4={ipv4}"));
        }
        if let Some(registry) = &self.registry {
            lines.push(format!("IPV4_REGISTRY={registry}"));
        }
        if let Some(reverse) = &self.reverse {
            lines.push(format!("{tag}_REVERSE={reverse}"));
        }
        lines
    }
}

fn ipv4_labels(addr: &Ipv4Address) -> Vec<String> {
    addr.scope()
        .iter_names()
        .map(|(name, _)| name.to_lowercase().replace('_', "-"))
        .collect()
}

pub fn cmd_info(
    address: &str,
    kind: InputKind,
    json: bool,
    machine_readable: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let info = AddressInfo::collect(address, kind)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    if machine_readable {
        for line in info.machine_readable() {
            println!("{line}");
        }
        return Ok(());
    }

    println!("Address Information");
    println!("===================");
    println!("Input: {}", info.input);
    println!("Family: {}", info.family);
    println!("Address: {}", info.address);
    if let Some(full) = &info.full {
        println!("Full: {}", full);
    }
    if let Some(len) = info.prefix_length {
        println!("Prefix length: {}", len);
    }
    println!("Scope: {}", info.scope.join(", "));
    if let Some(ipv4) = &info.ipv4 {
        println!("Embedded IPv4: {}", ipv4);
    }
    if let Some(registry) = &info.registry {
        println!("Registry: {}", registry);
    }
    if let Some(reverse) = &info.reverse {
        println!("Reverse: {}", reverse);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_info() {
        let info = AddressInfo::collect("10.1.2.3", InputKind::Auto).unwrap();
        assert_eq!(info.family, "IPv4");
        assert_eq!(info.scope, vec!["unicast", "private"]);
        assert_eq!(info.registry.as_deref(), Some("reserved(RFC1918)"));
        assert_eq!(info.reverse.as_deref(), Some("3.2.1.10.in-addr.arpa."));
    }

    #[test]
    fn test_mapped_info() {
        let info = AddressInfo::collect("::ffff:192.168.1.1", InputKind::Auto).unwrap();
        assert_eq!(info.scope, vec!["mapped"]);
        assert_eq!(info.ipv4.as_deref(), Some("192.168.1.1"));
        assert_eq!(info.registry.as_deref(), Some("reserved(RFC1918)"));
    }

    #[test]
    fn test_json_shape() {
        let info = AddressInfo::collect("2001:db8::/32", InputKind::Auto).unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["address"], "2001:db8::/32");
        assert_eq!(json["prefix_length"], 32);
        assert!(json.get("ipv4").is_none());
        assert_eq!(json["reverse"], "8.b.d.0.1.0.0.2.ip6.arpa.");
    }

    #[test]
    fn test_machine_readable() {
        let info = AddressInfo::collect("fe80::1", InputKind::Auto).unwrap();
        let lines = info.machine_readable();
        assert_eq!(lines[0], "IPV6=fe80::1");
        assert!(lines.contains(&"IPV6_TYPE=unicast,link-local".to_string()));
    }

    #[test]
    fn test_unaligned_prefix_has_no_reverse() {
        let info = AddressInfo::collect("2001:db8::/30", InputKind::Auto).unwrap();
        assert!(info.reverse.is_none());
    }
}
