//! Errors raised while resolving header metadata.
//!
//! Missing or malformed `Content-Length`, `Last-Modified` and
//! `Content-Disposition` values are not errors: the accessors substitute a
//! default instead. What remains are inputs the caller should never hand
//! over, and broken assumptions about the response as a whole.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// No filename was advertised and there is no `Last-Modified`,
    /// `Content-Length` or `Content-Type` to derive one from.
    #[error("response has no metadata to derive a filename from")]
    EmptyFallbackSeed,

    /// `Content-Type` does not reduce to a `type/subtype` pair.
    #[error("malformed MIME type {mime:?}: expected type/subtype")]
    MalformedMimeType { mime: String },

    /// A header name was supplied without a value.
    #[error("header {name:?} has no value")]
    MissingValue { name: String },

    /// A raw header line is not of the form `Name: value`.
    #[error("malformed header line {line:?}")]
    MalformedLine { line: String },
}

impl MetadataError {
    /// True when the error signals a broken invariant about the response
    /// rather than bad input from the caller.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            MetadataError::EmptyFallbackSeed | MetadataError::MalformedMimeType { .. }
        )
    }
}
