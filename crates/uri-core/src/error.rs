use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or validating a URI reference.
///
/// Each variant carries the offending component (or the whole reference
/// for structural failures); the `Display` implementation supplies the
/// human-readable message. Failures are terminal: the parser never
/// retries and never returns a partially populated record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input contains a control character (U+0000..U+001F) or DEL
    #[error("URI contains forbidden control characters: {0:?}")]
    InvalidCharacters(String),

    /// Scheme candidate is empty or contains illegal characters
    #[error("invalid URI scheme: {0:?}")]
    InvalidScheme(String),

    /// Relative path whose first segment contains a colon
    #[error("invalid URI path: {0:?}")]
    InvalidPath(String),

    /// Host fails every host-shape check
    #[error("invalid URI host: {0:?}")]
    InvalidHost(String),

    /// Port is non-numeric or outside the 16-bit range
    #[error("invalid URI port: {0:?}")]
    InvalidPort(String),

    /// Host requires IDN processing but no converter is available.
    ///
    /// Kept distinct from [`Error::InvalidHost`] so callers can tell a
    /// configuration problem from a malformed host.
    #[error("host {0:?} requires IDN support, which is not enabled")]
    MissingIdnSupport(String),
}

impl Error {
    /// The component (or whole reference) that triggered the failure.
    pub fn offending(&self) -> &str {
        match self {
            Error::InvalidCharacters(s)
            | Error::InvalidScheme(s)
            | Error::InvalidPath(s)
            | Error::InvalidHost(s)
            | Error::InvalidPort(s)
            | Error::MissingIdnSupport(s) => s,
        }
    }
}
