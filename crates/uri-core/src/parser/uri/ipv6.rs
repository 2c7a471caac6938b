//! Bracketed IP-literal contents: IPv6 addresses and RFC 6874 zone
//! identifiers.

use std::net::Ipv6Addr;

use percent_encoding::percent_decode_str;

use crate::parser::common_chars::is_zone_forbidden;

/// `true` when the input parses as an RFC 4291 IPv6 address.
pub(crate) fn is_ipv6(input: &str) -> bool {
    input.parse::<Ipv6Addr>().is_ok()
}

/// Zone identifiers are only defined for link-local addresses (fe80::/10).
fn is_link_local(addr: &Ipv6Addr) -> bool {
    addr.segments()[0] & 0xffc0 == 0xfe80
}

/// Validates bracket contents of the form `address%zone`.
///
/// The address part must be a link-local IPv6 address; the zone suffix is
/// percent-decoded and must be non-empty and free of gen-delims and space.
pub(crate) fn is_ipv6_with_zone(content: &str) -> bool {
    let Some((addr_part, zone)) = content.split_once('%') else {
        return false;
    };
    let Ok(addr) = addr_part.parse::<Ipv6Addr>() else {
        return false;
    };
    if !is_link_local(&addr) || zone.is_empty() {
        return false;
    }
    let decoded: Vec<u8> = percent_decode_str(zone).collect();
    !decoded.is_empty() && !decoded.iter().any(|&b| is_zone_forbidden(b))
}
