//! Host validation: dispatch over the RFC 3986 host shapes.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, one_of},
    combinator::all_consuming,
    sequence::tuple,
};

use crate::error::{Error, Result};
use crate::idn::IdnConverter;
use crate::parser::common_chars::is_ipvfuture_char;
use crate::parser::uri::{hostname, ipv4, ipv6};
use crate::parser::ParseResult;

/// The host shape a successful validation proved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// Empty host inside an authority (`"//"`).
    Empty,
    /// Dotted-quad IPv4 address.
    Ipv4,
    /// Bracketed IPv6 address.
    Ipv6,
    /// Bracketed link-local IPv6 address with a zone identifier.
    Ipv6Zone,
    /// Bracketed IPvFuture literal.
    IpvFuture,
    /// RFC 3986 registered name.
    RegName,
    /// Internationalized name accepted by the IDN converter.
    Idn,
}

// IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )
// Yields the version digits between "v" and ".".
fn ipvfuture(input: &[u8]) -> ParseResult<&[u8]> {
    let (rest, (_, version, _, _)) = tuple((
        one_of("vV"),
        take_while1(|c: u8| c.is_ascii_hexdigit()),
        char('.'),
        take_while1(is_ipvfuture_char),
    ))(input)?;
    Ok((rest, version))
}

fn is_ipvfuture(content: &str) -> bool {
    match all_consuming(ipvfuture)(content.as_bytes()) {
        // v4 and v6 are reserved for the canonical IPv4/IPv6 syntaxes
        Ok((_, version)) => version != b"4" && version != b"6",
        Err(_) => false,
    }
}

// IP-literal = "[" ( IPv6address / IPv6addrz / IPvFuture ) "]"
fn ip_literal_kind(content: &str) -> Option<HostKind> {
    if ipv6::is_ipv6(content) {
        Some(HostKind::Ipv6)
    } else if is_ipvfuture(content) {
        Some(HostKind::IpvFuture)
    } else if ipv6::is_ipv6_with_zone(content) {
        Some(HostKind::Ipv6Zone)
    } else {
        None
    }
}

/// Validates a host candidate and reports which shape it matched.
///
/// The empty string is a valid host: an authority may carry an empty
/// host (`"//"`).
pub(crate) fn validate_host(host: &str, idn: Option<&dyn IdnConverter>) -> Result<HostKind> {
    if host.is_empty() {
        return Ok(HostKind::Empty);
    }
    if let Some(inner) = host.strip_prefix('[') {
        let Some(content) = inner.strip_suffix(']') else {
            return Err(Error::InvalidHost(host.to_string()));
        };
        return ip_literal_kind(content).ok_or_else(|| Error::InvalidHost(host.to_string()));
    }
    // brackets are only meaningful around a whole IP-literal
    if host.contains(['[', ']']) {
        return Err(Error::InvalidHost(host.to_string()));
    }
    if ipv4::is_ipv4(host) {
        return Ok(HostKind::Ipv4);
    }
    hostname::validate_hostname(host, idn)
}
