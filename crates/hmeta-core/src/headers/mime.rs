//! File extension from a `Content-Type` value.

use crate::error::MetadataError;

/// Returns the subtype of `mime` as an extension candidate.
///
/// Parameter segments (`charset=...`) are skipped wherever they appear; the
/// first `;`-separated segment containing a `/` is taken as `type/subtype`.
///
/// - `application/json` → `json`
/// - `text/html; charset=utf-8` → `html`
pub fn extension_from_mime(mime: &str) -> Result<String, MetadataError> {
    let malformed = || MetadataError::MalformedMimeType {
        mime: mime.to_string(),
    };

    let essence = if mime.contains(';') {
        mime.split(';')
            .find(|segment| segment.contains('/'))
            .ok_or_else(malformed)?
    } else {
        mime
    };

    let parts: Vec<&str> = essence.split('/').collect();
    match parts.as_slice() {
        [_, subtype] => Ok(subtype.trim().to_string()),
        _ => Err(malformed()),
    }
}
