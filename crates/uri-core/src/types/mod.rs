//! Core data types.

pub mod uri;

pub use uri::Uri;
