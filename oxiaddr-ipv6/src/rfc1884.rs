//! RFC 1884 `::` compression and expansion.
//!
//! Both functions work on text only. Expansion turns a string holding a
//! single `::` into the full eight-group form (seven groups when the tail is
//! a dotted IPv4 address). Compression collapses the longest run of zero
//! groups of an expanded string; a lone zero group is left as is.

use oxiaddr_core::error::{AddrError, Result};
use tracing::trace;

const GROUPS: usize = 8;

/// Expand the `::` of an IPv6 address.
///
/// Input without `::` is returned unchanged.
///
/// ```
/// use oxiaddr_ipv6::rfc1884::expand;
///
/// assert_eq!(expand("fe80::1").unwrap(), "fe80:0:0:0:0:0:0:1");
/// assert_eq!(expand("::ffff:1.2.3.4").unwrap(), "0:0:0:0:0:ffff:1.2.3.4");
/// assert!(expand("1::2::3").is_err());
/// ```
pub fn expand(input: &str) -> Result<String> {
    let Some((left, right)) = input.split_once("::") else {
        return Ok(input.to_string());
    };
    if right.contains("::") {
        return Err(AddrError::invalid_format(format!(
            "given address '{input}' contains more than one '::'"
        )));
    }

    let left: Vec<&str> = if left.is_empty() {
        Vec::new()
    } else {
        left.split(':').collect()
    };
    let right: Vec<&str> = if right.is_empty() {
        Vec::new()
    } else {
        right.split(':').collect()
    };

    // a dotted tail takes the room of two groups
    let dotted_tail = right
        .last()
        .or(left.last())
        .is_some_and(|group| group.contains('.'));
    let wanted = if dotted_tail { GROUPS - 1 } else { GROUPS };

    let given = left.len() + right.len();
    if given >= wanted {
        return Err(AddrError::invalid_format(format!(
            "given address '{input}' has too many groups for '::'"
        )));
    }

    let mut groups = left;
    groups.extend(std::iter::repeat_n("0", wanted - given));
    groups.extend(right);
    let expanded = groups.join(":");

    trace!(input, expanded = expanded.as_str(), "expanded '::'");
    Ok(expanded)
}

/// Compress an expanded IPv6 address.
///
/// The longest run of at least two zero groups becomes `::`; on a tie the
/// first run wins.
///
/// ```
/// use oxiaddr_ipv6::rfc1884::compress;
///
/// assert_eq!(compress("fe80:0:0:0:0:0:0:1").unwrap(), "fe80::1");
/// assert_eq!(compress("1:0:2:3:4:5:6:7").unwrap(), "1:0:2:3:4:5:6:7");
/// assert_eq!(compress("0:0:0:0:0:0:0:0").unwrap(), "::");
/// ```
pub fn compress(input: &str) -> Result<String> {
    if input.contains("::") {
        return Err(AddrError::invalid_format(format!(
            "given address '{input}' is already compressed"
        )));
    }

    let groups: Vec<&str> = input.split(':').collect();
    let dotted_tail = groups.last().is_some_and(|group| group.contains('.'));
    let wanted = if dotted_tail { GROUPS - 1 } else { GROUPS };
    if groups.len() != wanted {
        return Err(AddrError::invalid_format(format!(
            "given address '{input}' is not fully expanded"
        )));
    }

    let (start, len) = longest_zero_run(&groups);
    if len < 2 {
        return Ok(input.to_string());
    }

    let head = groups[..start].join(":");
    let tail = groups[start + len..].join(":");
    let compressed = format!("{head}::{tail}");

    trace!(input, compressed = compressed.as_str(), "compressed zero run");
    Ok(compressed)
}

fn is_zero_group(group: &str) -> bool {
    !group.is_empty() && group.bytes().all(|b| b == b'0')
}

/// Start and length of the first longest run of zero groups.
fn longest_zero_run(groups: &[&str]) -> (usize, usize) {
    let mut best = (0, 0);
    let mut run_start = 0;
    let mut run_len = 0;
    for (i, group) in groups.iter().enumerate() {
        if is_zero_group(group) {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
            if run_len > best.1 {
                best = (run_start, run_len);
            }
        } else {
            run_len = 0;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_positions() {
        assert_eq!(expand("::").unwrap(), "0:0:0:0:0:0:0:0");
        assert_eq!(expand("::1").unwrap(), "0:0:0:0:0:0:0:1");
        assert_eq!(expand("1::").unwrap(), "1:0:0:0:0:0:0:0");
        assert_eq!(expand("1:2:3::6:7:8").unwrap(), "1:2:3:0:0:6:7:8");
        assert_eq!(expand("1:2:3:4:5:6::8").unwrap(), "1:2:3:4:5:6:0:8");
        assert_eq!(expand("1:2:3:4:5:6:7::").unwrap(), "1:2:3:4:5:6:7:0");
    }

    #[test]
    fn test_expand_dotted() {
        assert_eq!(expand("::1.2.3.4").unwrap(), "0:0:0:0:0:0:1.2.3.4");
        assert_eq!(expand("fe80::5efe:1.2.3.4").unwrap(), "fe80:0:0:0:0:5efe:1.2.3.4");
    }

    #[test]
    fn test_expand_passthrough() {
        assert_eq!(expand("1:2:3:4:5:6:7:8").unwrap(), "1:2:3:4:5:6:7:8");
    }

    #[test]
    fn test_expand_errors() {
        assert!(expand("1::2::3").is_err());
        assert!(expand("1:2:3:4::5:6:7:8").is_err());
        assert!(expand("1:2:3:4:5:6::1.2.3.4").is_err());
    }

    #[test]
    fn test_compress_longest_run() {
        assert_eq!(compress("1:0:0:2:0:0:0:3").unwrap(), "1:0:0:2::3");
        // first of equal runs
        assert_eq!(compress("1:0:0:2:3:0:0:4").unwrap(), "1::2:3:0:0:4");
        assert_eq!(compress("0:0:0:0:0:0:0:1").unwrap(), "::1");
        assert_eq!(compress("1:0:0:0:0:0:0:0").unwrap(), "1::");
        assert_eq!(compress("2001:db8:0:0:1:0:0:1").unwrap(), "2001:db8::1:0:0:1");
    }

    #[test]
    fn test_compress_dotted() {
        assert_eq!(compress("0:0:0:0:0:ffff:1.2.3.4").unwrap(), "::ffff:1.2.3.4");
        assert_eq!(compress("0:0:0:0:0:0:1.2.3.4").unwrap(), "::1.2.3.4");
    }

    #[test]
    fn test_compress_errors() {
        assert!(compress("1::2").is_err());
        assert!(compress("1:2:3").is_err());
    }

    #[test]
    fn test_zero_group_forms() {
        assert_eq!(compress("1:0000:000:2:3:4:5:6").unwrap(), "1::2:3:4:5:6");
    }
}
