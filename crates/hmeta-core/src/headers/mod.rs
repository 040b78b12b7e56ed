//! Read-only view over the header set of a response.
//!
//! [`HeaderMetadata`] answers the questions a download pipeline asks before
//! any body bytes are stored: what to save the resource as, how large it is,
//! when it was last modified and what kind of content it holds. Every
//! accessor degrades to a default when the server omits or mangles a field;
//! only a response with nothing usable at all, or a `Content-Type` that is
//! not `type/subtype`, is reported as an error.
//!
//! Header names are case-insensitive. They are ASCII-lowercased once at
//! construction and every lookup goes through [`HeaderMetadata::get`].

mod filename;
mod mime;
mod parse;

use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;
use std::fmt;

use crate::error::MetadataError;

pub use filename::FilenameMatch;
pub use mime::extension_from_mime;

pub const CONTENT_DISPOSITION: &str = "content-disposition";
pub const CONTENT_LENGTH: &str = "content-length";
pub const CONTENT_TYPE: &str = "content-type";
pub const LAST_MODIFIED: &str = "last-modified";

/// Size reported when `Content-Length` is missing or not a non-negative integer.
pub const UNKNOWN_SIZE: i64 = -1;

/// Rendering of an empty header set.
pub const NO_HEADERS: &str = "(no headers)";

/// Immutable, case-insensitive header set of one response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMetadata {
    headers: IndexMap<String, String>,
    filename_match: FilenameMatch,
}

impl HeaderMetadata {
    /// Builds the header set from name/value pairs.
    ///
    /// When two names are equal ignoring ASCII case the later value wins; the
    /// entry keeps the position of the first occurrence.
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut headers = IndexMap::new();
        for (name, value) in pairs {
            headers.insert(normalize(name.as_ref()), value.into());
        }
        Self {
            headers,
            filename_match: FilenameMatch::default(),
        }
    }

    /// Like [`HeaderMetadata::new`], for sources where a value may be absent.
    /// An absent value is rejected instead of being stored.
    pub fn try_from_optional<I, K, V>(pairs: I) -> Result<Self, MetadataError>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut present = Vec::new();
        for (name, value) in pairs {
            let name = name.as_ref();
            match value {
                Some(v) => present.push((name.to_string(), v.into())),
                None => {
                    return Err(MetadataError::MissingValue {
                        name: name.to_string(),
                    })
                }
            }
        }
        Ok(Self::new(present))
    }

    /// Selects how `Content-Disposition` parameters are matched by
    /// [`HeaderMetadata::resolved_file_name`].
    pub fn with_filename_match(mut self, mode: FilenameMatch) -> Self {
        self.filename_match = mode;
        self
    }

    pub fn filename_match(&self) -> FilenameMatch {
        self.filename_match
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(&normalize(name)).map(String::as_str)
    }

    /// Case-insensitive lookup returning `fallback` when the header is absent.
    pub fn value<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.get(name).unwrap_or(fallback)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// `Content-Length` as a byte count, or [`UNKNOWN_SIZE`].
    pub fn resolved_size(&self) -> i64 {
        self.get(CONTENT_LENGTH)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .and_then(|n| i64::try_from(n).ok())
            .unwrap_or(UNKNOWN_SIZE)
    }

    /// `Last-Modified` read as Unix seconds.
    ///
    /// The header source is assumed to send a numeric timestamp rather than
    /// an HTTP-date. Anything absent, non-numeric or out of range yields
    /// `fallback`.
    pub fn last_modified(&self, fallback: DateTime<Utc>) -> DateTime<Utc> {
        let Some(raw) = self.get(LAST_MODIFIED) else {
            return fallback;
        };
        match parse_unix_seconds(raw) {
            Some(at) => at,
            None => {
                tracing::debug!(value = raw, "Last-Modified is not a unix timestamp, using fallback");
                fallback
            }
        }
    }

    /// `Content-Type` verbatim, parameters included.
    pub fn content_mime_type<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.value(CONTENT_TYPE, fallback)
    }

    /// Extension derived from `Content-Type`, or `fallback` when the header is absent.
    pub fn file_extension(&self, fallback: Option<&str>) -> Result<Option<String>, MetadataError> {
        match self.get(CONTENT_TYPE) {
            Some(mime) => extension_from_mime(mime).map(Some),
            None => Ok(fallback.map(str::to_string)),
        }
    }

    /// Entries in insertion order, names lowercased.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.headers.iter())
    }
}

/// Iterator over `(name, value)` pairs of a [`HeaderMetadata`].
pub struct Iter<'a>(indexmap::map::Iter<'a, String, String>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> IntoIterator for &'a HeaderMetadata {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for HeaderMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.headers.is_empty() {
            return f.write_str(NO_HEADERS);
        }
        f.write_str("Headers:")?;
        for (name, value) in &self.headers {
            write!(f, "\n  > {}: {}", name, value)?;
        }
        Ok(())
    }
}

fn normalize(name: &str) -> String {
    name.to_ascii_lowercase()
}

fn parse_unix_seconds(raw: &str) -> Option<DateTime<Utc>> {
    let secs = raw.trim().parse::<i64>().ok()?;
    Utc.timestamp_opt(secs, 0).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMetadata {
        HeaderMetadata::new(pairs.iter().copied())
    }

    #[test]
    fn lookup_ignores_case() {
        let h = headers(&[("Content-Type", "application/json")]);
        assert_eq!(h.get("content-type"), Some("application/json"));
        assert_eq!(h.get("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(h.get("Content-Type"), Some("application/json"));
        assert!(h.contains("cOnTeNt-TyPe"));
    }

    #[test]
    fn value_falls_back_when_absent() {
        let h = headers(&[("ETag", "abc")]);
        assert_eq!(h.value("etag", "none"), "abc");
        assert_eq!(h.value("Last-Modified", "none"), "none");
    }

    #[test]
    fn empty_values_are_kept() {
        let h = headers(&[("X-Empty", "")]);
        assert_eq!(h.get("x-empty"), Some(""));
    }

    #[test]
    fn duplicate_names_last_wins_first_position() {
        let h = headers(&[("Accept", "a"), ("ETag", "e"), ("ACCEPT", "b")]);
        assert_eq!(h.len(), 2);
        assert_eq!(h.get("accept"), Some("b"));
        let names: Vec<&str> = h.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["accept", "etag"]);
    }

    #[test]
    fn construction_copies_input() {
        let mut input = std::collections::HashMap::new();
        input.insert("Content-Length".to_string(), "10".to_string());
        let h = HeaderMetadata::new(input.clone());
        input.insert("Content-Length".to_string(), "20".to_string());
        assert_eq!(h.resolved_size(), 10);
        assert_eq!(input["Content-Length"], "20");
    }

    #[test]
    fn try_from_optional_rejects_absent_value() {
        let err = HeaderMetadata::try_from_optional(vec![
            ("Content-Length", Some("5")),
            ("ETag", None::<&str>),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            MetadataError::MissingValue {
                name: "ETag".to_string()
            }
        );
    }

    #[test]
    fn try_from_optional_accepts_present_values() {
        let h = HeaderMetadata::try_from_optional(vec![("Content-Length", Some("5"))]).unwrap();
        assert_eq!(h.resolved_size(), 5);
    }

    #[test]
    fn resolved_size_sentinel() {
        assert_eq!(headers(&[("Content-Length", "0")]).resolved_size(), 0);
        assert_eq!(headers(&[("Content-Length", "12345")]).resolved_size(), 12345);
        assert_eq!(headers(&[("Content-Length", "")]).resolved_size(), UNKNOWN_SIZE);
        assert_eq!(headers(&[("Content-Length", "abc")]).resolved_size(), UNKNOWN_SIZE);
        assert_eq!(headers(&[("Content-Length", "-4")]).resolved_size(), UNKNOWN_SIZE);
        assert_eq!(headers(&[]).resolved_size(), UNKNOWN_SIZE);
    }

    #[test]
    fn last_modified_unix_seconds() {
        let fallback = Utc.timestamp_opt(0, 0).unwrap();
        let h = headers(&[("Last-Modified", "1445412480")]);
        assert_eq!(
            h.last_modified(fallback),
            Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap()
        );
    }

    #[test]
    fn last_modified_degrades_to_fallback() {
        let fallback = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(headers(&[]).last_modified(fallback), fallback);
        let http_date = headers(&[("Last-Modified", "Wed, 21 Oct 2015 07:28:00 GMT")]);
        assert_eq!(http_date.last_modified(fallback), fallback);
        let huge = headers(&[("Last-Modified", "9223372036854775807")]);
        assert_eq!(huge.last_modified(fallback), fallback);
    }

    #[test]
    fn content_mime_type_is_verbatim() {
        let h = headers(&[("Content-Type", "Text/HTML; Charset=UTF-8")]);
        assert_eq!(h.content_mime_type(""), "Text/HTML; Charset=UTF-8");
        assert_eq!(headers(&[]).content_mime_type("unknown"), "unknown");
    }

    #[test]
    fn file_extension_uses_fallback_only_when_absent() {
        assert_eq!(headers(&[]).file_extension(Some("bin")).unwrap().as_deref(), Some("bin"));
        assert_eq!(headers(&[]).file_extension(None).unwrap(), None);
        let h = headers(&[("Content-Type", "application/pdf")]);
        assert_eq!(h.file_extension(Some("bin")).unwrap().as_deref(), Some("pdf"));
    }

    #[test]
    fn display_empty_sentinel() {
        let h = headers(&[]);
        assert_eq!(h.to_string(), NO_HEADERS);
        assert_eq!(h.iter().count(), 0);
    }

    #[test]
    fn display_one_bullet_per_entry() {
        let h = headers(&[("Content-Length", "3"), ("ETag", "x")]);
        assert_eq!(h.to_string(), "Headers:\n  > content-length: 3\n  > etag: x");
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HeaderMetadata>();
    }
}
