//! RFC 3986 parsers.
//!
//! `common_chars` holds the shared character classes; `uri` holds the
//! decomposer and the per-component validators it dispatches to.

pub mod common_chars;
pub mod uri;

// Type alias for parser result
pub(crate) type ParseResult<'a, O> = nom::IResult<&'a [u8], O>;
