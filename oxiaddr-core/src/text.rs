//! Pure string transforms applied after structural formatting.

/// Upper-case every ASCII letter.
pub fn to_upper(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Reverse the order of dot-separated labels.
///
/// A single trailing dot (the DNS root) stays at the end.
///
/// ```
/// use oxiaddr_core::text::reverse_dotted;
///
/// assert_eq!(reverse_dotted("4.3.2.1.in-addr.arpa."), "arpa.in-addr.1.2.3.4.");
/// assert_eq!(reverse_dotted("1.2.3.4"), "4.3.2.1");
/// ```
pub fn reverse_dotted(s: &str) -> String {
    let (body, rooted) = match s.strip_suffix('.') {
        Some(body) => (body, true),
        None => (s, false),
    };

    let mut labels: Vec<&str> = body.split('.').collect();
    labels.reverse();

    let mut out = labels.join(".");
    if rooted {
        out.push('.');
    }
    out
}
