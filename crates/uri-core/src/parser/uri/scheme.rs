//! scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )

use nom::{
    bytes::complete::{take, take_while},
    combinator::{all_consuming, recognize, verify},
    sequence::pair,
};

use crate::parser::common_chars::is_scheme_char;
use crate::parser::ParseResult;

/// Recognizes a scheme token: a leading ALPHA followed by any number of
/// ALPHA / DIGIT / "+" / "-" / ".".
pub(crate) fn scheme(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(pair(
        verify(take(1usize), |b: &[u8]| b[0].is_ascii_alphabetic()),
        take_while(is_scheme_char),
    ))(input)
}

/// `true` for the empty string or a token matching the scheme grammar.
///
/// Both cases of ALPHA are accepted; case is preserved by the parser and
/// never normalized.
pub(crate) fn is_scheme(input: &str) -> bool {
    input.is_empty() || all_consuming(scheme)(input.as_bytes()).is_ok()
}
