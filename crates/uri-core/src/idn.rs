//! UTS #46 conversion as an injected capability.
//!
//! The parser never links a Unicode table directly: internationalized
//! hosts are handed to an [`IdnConverter`], and acceptance means "the
//! converter reported zero errors". The `idna` feature (on by default)
//! supplies [`Uts46Converter`], backed by the `idna` crate; without it
//! the parser has no converter and non-ASCII hosts fail with
//! [`MissingIdnSupport`](crate::Error::MissingIdnSupport).

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Result of a UTS #46 ToASCII conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiConversion {
    /// Punycode form of the input; empty when conversion failed outright.
    pub ascii: String,
    /// Error bits; [`IdnaErrors::is_empty`] means the host is acceptable.
    pub errors: IdnaErrors,
}

impl AsciiConversion {
    /// A successful conversion to `ascii`.
    pub fn ok(ascii: impl Into<String>) -> Self {
        AsciiConversion {
            ascii: ascii.into(),
            errors: IdnaErrors::NONE,
        }
    }

    /// A failed conversion carrying the given error bits.
    pub fn failed(errors: IdnaErrors) -> Self {
        AsciiConversion {
            ascii: String::new(),
            errors,
        }
    }
}

/// Bitmask over the UTS #46 error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdnaErrors(u32);

impl IdnaErrors {
    pub const NONE: Self = Self(0);
    pub const EMPTY_LABEL: Self = Self(1 << 0);
    pub const LABEL_TOO_LONG: Self = Self(1 << 1);
    pub const DOMAIN_TOO_LONG: Self = Self(1 << 2);
    pub const LEADING_HYPHEN: Self = Self(1 << 3);
    pub const TRAILING_HYPHEN: Self = Self(1 << 4);
    pub const HYPHEN_3_4: Self = Self(1 << 5);
    pub const LEADING_COMBINING_MARK: Self = Self(1 << 6);
    pub const DISALLOWED: Self = Self(1 << 7);
    pub const PUNYCODE: Self = Self(1 << 8);
    pub const LABEL_HAS_DOT: Self = Self(1 << 9);
    pub const INVALID_ACE_LABEL: Self = Self(1 << 10);
    pub const BIDI: Self = Self(1 << 11);
    pub const CONTEXTJ: Self = Self(1 << 12);

    const NAMES: [(IdnaErrors, &'static str); 13] = [
        (Self::EMPTY_LABEL, "empty-label"),
        (Self::LABEL_TOO_LONG, "label-too-long"),
        (Self::DOMAIN_TOO_LONG, "domain-too-long"),
        (Self::LEADING_HYPHEN, "leading-hyphen"),
        (Self::TRAILING_HYPHEN, "trailing-hyphen"),
        (Self::HYPHEN_3_4, "hyphen-3-4"),
        (Self::LEADING_COMBINING_MARK, "leading-combining-mark"),
        (Self::DISALLOWED, "disallowed"),
        (Self::PUNYCODE, "punycode"),
        (Self::LABEL_HAS_DOT, "label-has-dot"),
        (Self::INVALID_ACE_LABEL, "invalid-ace-label"),
        (Self::BIDI, "bidi"),
        (Self::CONTEXTJ, "contextj"),
    ];

    /// `true` when no error condition is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` when every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for IdnaErrors {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for IdnaErrors {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for IdnaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (bit, name) in Self::NAMES {
            if self.contains(bit) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// UTS #46 ToASCII as a capability the parser consumes.
///
/// Implementations must be callable from any thread; the parser itself
/// holds no state around the call.
pub trait IdnConverter: Send + Sync {
    /// Converts a whole domain name to its ASCII (Punycode) form,
    /// reporting the UTS #46 error conditions encountered.
    fn to_ascii(&self, domain: &str) -> AsciiConversion;
}

#[cfg(feature = "idna")]
pub use uts46::Uts46Converter;

#[cfg(feature = "idna")]
mod uts46 {
    use idna::uts46::{AsciiDenyList, DnsLength, Hyphens, Uts46};

    use super::{AsciiConversion, IdnConverter, IdnaErrors};

    /// Converter backed by the `idna` crate: non-transitional ToASCII
    /// with hyphen checks and DNS length verification.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct Uts46Converter;

    impl IdnConverter for Uts46Converter {
        fn to_ascii(&self, domain: &str) -> AsciiConversion {
            match Uts46::new().to_ascii(
                domain.as_bytes(),
                AsciiDenyList::EMPTY,
                Hyphens::Check,
                DnsLength::Verify,
            ) {
                Ok(ascii) => AsciiConversion::ok(ascii.into_owned()),
                // the idna crate reports one aggregate failure, not
                // per-condition detail
                Err(_) => AsciiConversion::failed(IdnaErrors::DISALLOWED),
            }
        }
    }
}

/// The process-wide default converter, fixed at compile time by the
/// `idna` feature.
pub fn default_converter() -> Option<&'static dyn IdnConverter> {
    #[cfg(feature = "idna")]
    {
        static CONVERTER: Uts46Converter = Uts46Converter;
        Some(&CONVERTER)
    }
    #[cfg(not(feature = "idna"))]
    None
}
