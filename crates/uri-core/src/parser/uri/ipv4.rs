//! IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet

use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, recognize, verify},
    sequence::tuple,
};

use crate::parser::ParseResult;

// dec-octet = DIGIT / %x31-39 DIGIT / "1" 2DIGIT / "2" %x30-34 DIGIT / "25" %x30-35
fn dec_octet(input: &[u8]) -> ParseResult<&[u8]> {
    verify(
        take_while_m_n(1, 3, |c: u8| c.is_ascii_digit()),
        |digits: &[u8]| {
            // the grammar forbids leading zeros ("01" is not an octet)
            if digits.len() > 1 && digits[0] == b'0' {
                return false;
            }
            std::str::from_utf8(digits)
                .ok()
                .and_then(|s| s.parse::<u16>().ok())
                .is_some_and(|value| value <= 255)
        },
    )(input)
}

/// `true` when the whole input is a dotted-quad IPv4 address.
pub(crate) fn is_ipv4(input: &str) -> bool {
    all_consuming(recognize(tuple((
        dec_octet,
        char('.'),
        dec_octet,
        char('.'),
        dec_octet,
        char('.'),
        dec_octet,
    ))))(input.as_bytes())
    .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_quads() {
        assert!(is_ipv4("0.0.0.0"));
        assert!(is_ipv4("127.0.0.1"));
        assert!(is_ipv4("255.255.255.255"));
        assert!(is_ipv4("192.168.1.1"));
    }

    #[test]
    fn test_rejects_out_of_range_octets() {
        assert!(!is_ipv4("256.0.0.1"));
        assert!(!is_ipv4("999.1.1.1"));
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(!is_ipv4("1.2.3"));
        assert!(!is_ipv4("1.2.3.4.5"));
        assert!(!is_ipv4("1.2.3."));
        assert!(!is_ipv4(".1.2.3.4"));
        assert!(!is_ipv4("1.2.3.a"));
        assert!(!is_ipv4(""));
    }

    #[test]
    fn test_rejects_leading_zeros() {
        assert!(!is_ipv4("192.168.01.1"));
        assert!(!is_ipv4("010.0.0.1"));
        // a lone zero octet is still fine
        assert!(is_ipv4("10.0.0.1"));
    }
}
