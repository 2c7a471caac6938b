//! Fluent construction of [`Uri`] records.
//!
//! The builder assembles a record field by field; rendering it to a
//! string goes through [`build`](crate::build) (or `Display`). Like the
//! emitter, the builder performs no validation; parse the rendered
//! string back when validity matters.
//!
//! # Examples
//!
//! ```rust
//! use urikit_uri_core::UriBuilder;
//!
//! let uri = UriBuilder::new()
//!     .scheme("https")
//!     .host("example.org")
//!     .port(8042)
//!     .path("/over/there")
//!     .query("name=ferret")
//!     .build();
//!
//! assert_eq!(uri.to_string(), "https://example.org:8042/over/there?name=ferret");
//! ```

use crate::types::uri::Uri;

/// Fluent builder for [`Uri`] records.
#[derive(Debug, Clone, Default)]
pub struct UriBuilder {
    uri: Uri,
}

impl UriBuilder {
    /// Starts from the empty relative reference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scheme.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.uri.scheme = Some(scheme.into());
        self
    }

    /// Sets the user part of the userinfo.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.uri.user = Some(user.into());
        self
    }

    /// Sets the password part of the userinfo. The emitter never writes
    /// it out, but the record keeps it for callers that need it.
    pub fn pass(mut self, pass: impl Into<String>) -> Self {
        self.uri.pass = Some(pass.into());
        self
    }

    /// Sets the host. Bracket IP-literals yourself (`"[::1]"`).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.uri.host = Some(host.into());
        self
    }

    /// Sets the port.
    pub fn port(mut self, port: u16) -> Self {
        self.uri.port = Some(port);
        self
    }

    /// Sets the path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.uri.path = path.into();
        self
    }

    /// Sets the query (without its leading `?`).
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.uri.query = Some(query.into());
        self
    }

    /// Sets the fragment (without its leading `#`).
    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.uri.fragment = Some(fragment.into());
        self
    }

    /// Finishes the record.
    pub fn build(self) -> Uri {
        self.uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain() {
        let uri = UriBuilder::new()
            .scheme("scheme")
            .user("user")
            .pass("pass")
            .host("host")
            .port(81)
            .path("/path")
            .query("query")
            .fragment("fragment")
            .build();

        assert_eq!(uri.scheme.as_deref(), Some("scheme"));
        assert_eq!(uri.pass.as_deref(), Some("pass"));
        // pass stays in the record even though the emitter skips it
        assert_eq!(uri.to_string(), "scheme://user@host:81/path?query#fragment");
    }

    #[test]
    fn test_defaults_are_absent() {
        let uri = UriBuilder::new().build();
        assert_eq!(uri, Uri::default());
        assert_eq!(uri.to_string(), "");
    }

    #[test]
    fn test_empty_components_are_present() {
        let uri = UriBuilder::new().path("/").query("").fragment("").build();
        assert_eq!(uri.to_string(), "/?#");
    }
}
