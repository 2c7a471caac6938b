//! Registered names and the IDN fallback.

use tracing::debug;

use crate::error::{Error, Result};
use crate::idn::IdnConverter;
use crate::parser::common_chars::{is_pct_encoded_at, is_reg_name_label_char};
use crate::parser::uri::host::HostKind;

/// DNS caps a name at 253 octets, which bounds it to 127 one-octet labels.
const MAX_LABELS: usize = 127;

/// reg-name = *( unreserved / pct-encoded / sub-delims ), read as
/// `.`-separated labels with an optional trailing dot.
pub(crate) fn is_reg_name(host: &str) -> bool {
    let bytes = host.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'.' || is_reg_name_label_char(bytes[i]) {
            i += 1;
        } else if bytes[i] == b'%' {
            if !is_pct_encoded_at(bytes, i) {
                return false;
            }
            i += 3;
        } else {
            return false;
        }
    }
    label_count(host) <= MAX_LABELS
}

fn label_count(host: &str) -> usize {
    let count = host.split('.').count();
    // a trailing dot is the DNS root, not an extra label
    if host.ends_with('.') {
        count - 1
    } else {
        count
    }
}

/// Validates a non-bracketed, non-IPv4 host: first as a registered name,
/// then through the injected UTS #46 converter when the name is not ASCII.
pub(crate) fn validate_hostname(host: &str, idn: Option<&dyn IdnConverter>) -> Result<HostKind> {
    if is_reg_name(host) {
        return Ok(HostKind::RegName);
    }
    if host.is_ascii() {
        return Err(Error::InvalidHost(host.to_string()));
    }
    let Some(converter) = idn else {
        return Err(Error::MissingIdnSupport(host.to_string()));
    };
    let conversion = converter.to_ascii(host);
    if conversion.errors.is_empty() {
        Ok(HostKind::Idn)
    } else {
        debug!(host, errors = %conversion.errors, "UTS #46 conversion rejected host");
        Err(Error::InvalidHost(host.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idn::{AsciiConversion, IdnaErrors};

    #[test]
    fn test_reg_names() {
        assert!(is_reg_name("example.org"));
        assert!(is_reg_name("EXAMPLE.ORG"));
        assert!(is_reg_name("a-b_c~d"));
        assert!(is_reg_name("host"));
        assert!(is_reg_name("xn--bcher-kva.example"));
        assert!(is_reg_name("%41%42"));
        assert!(is_reg_name("sub.$&'()*+,;=.example"));
    }

    #[test]
    fn test_trailing_dot_and_empty_labels() {
        assert!(is_reg_name("example.com."));
        // reg-name places no label structure, so empty labels pass
        assert!(is_reg_name("a..b"));
        assert!(is_reg_name(".a"));
    }

    #[test]
    fn test_reg_name_rejections() {
        assert!(!is_reg_name("ex ample"));
        assert!(!is_reg_name("ex@mple"));
        assert!(!is_reg_name("ex/ample"));
        assert!(!is_reg_name("ex:ample"));
        assert!(!is_reg_name("ex%GGample"));
        assert!(!is_reg_name("ex%2"));
        assert!(!is_reg_name("bücher.example"));
    }

    #[test]
    fn test_label_count_limit() {
        let max = vec!["a"; MAX_LABELS].join(".");
        assert!(is_reg_name(&max));
        assert!(is_reg_name(&format!("{max}.")));

        let too_many = vec!["a"; MAX_LABELS + 1].join(".");
        assert!(!is_reg_name(&too_many));
    }

    struct Accepting;
    impl IdnConverter for Accepting {
        fn to_ascii(&self, _domain: &str) -> AsciiConversion {
            AsciiConversion {
                ascii: "xn--converted".to_string(),
                errors: IdnaErrors::NONE,
            }
        }
    }

    struct Rejecting;
    impl IdnConverter for Rejecting {
        fn to_ascii(&self, _domain: &str) -> AsciiConversion {
            AsciiConversion {
                ascii: String::new(),
                errors: IdnaErrors::DISALLOWED | IdnaErrors::BIDI,
            }
        }
    }

    #[test]
    fn non_ascii_host_consults_the_converter() {
        assert_eq!(
            validate_hostname("bücher.example", Some(&Accepting)).unwrap(),
            HostKind::Idn
        );
        assert!(matches!(
            validate_hostname("bücher.example", Some(&Rejecting)),
            Err(Error::InvalidHost(_))
        ));
    }

    #[test]
    fn missing_converter_is_a_configuration_error() {
        assert!(matches!(
            validate_hostname("bücher.example", None),
            Err(Error::MissingIdnSupport(_))
        ));
        // ASCII garbage never reaches the converter
        assert!(matches!(
            validate_hostname("ex ample", None),
            Err(Error::InvalidHost(_))
        ));
    }
}
