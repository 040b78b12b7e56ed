//! Filename resolution: `Content-Disposition` first, digest of the response
//! metadata otherwise.

use serde::{Deserialize, Serialize};

use super::{HeaderMetadata, CONTENT_DISPOSITION, CONTENT_LENGTH, LAST_MODIFIED};
use crate::digest::sha256_hex;
use crate::error::MetadataError;

/// Which `Content-Disposition` parameters are taken as the filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilenameMatch {
    /// Any parameter whose name contains `filename`, ignoring case. This also
    /// accepts `filename*` (value returned undecoded) and names such as
    /// `x-filename`.
    #[default]
    Loose,
    /// Only `filename` and `filename*`.
    Strict,
}

impl FilenameMatch {
    fn accepts(self, param: &str) -> bool {
        let param = param.trim().to_ascii_lowercase();
        match self {
            FilenameMatch::Loose => param.contains("filename"),
            FilenameMatch::Strict => param == "filename" || param == "filename*",
        }
    }
}

impl HeaderMetadata {
    /// Name to save the resource under.
    ///
    /// Uses the first matching `Content-Disposition` parameter. If there is
    /// none, or its value is empty, the name is the SHA-256 hex digest of
    /// `Last-Modified`, `Content-Length` and `Content-Type` concatenated in
    /// that order, plus an extension from `Content-Type` when one is present.
    /// The result is a pure function of the header set.
    pub fn resolved_file_name(&self) -> Result<String, MetadataError> {
        let advertised = self
            .get(CONTENT_DISPOSITION)
            .and_then(|v| filename_from_disposition(v, self.filename_match))
            .filter(|name| !name.is_empty());

        if let Some(name) = advertised {
            return Ok(name);
        }

        tracing::warn!("no filename advertised, deriving one from response metadata");
        self.fallback_file_name()
    }

    fn fallback_file_name(&self) -> Result<String, MetadataError> {
        let mut seed = String::new();
        seed.push_str(self.value(LAST_MODIFIED, ""));
        seed.push_str(self.value(CONTENT_LENGTH, ""));
        seed.push_str(self.content_mime_type(""));
        if seed.is_empty() {
            return Err(MetadataError::EmptyFallbackSeed);
        }

        let mut name = sha256_hex(&seed);
        if let Some(ext) = self.file_extension(None)?.filter(|e| !e.is_empty()) {
            name.push('.');
            name.push_str(&ext);
        }
        tracing::debug!(name = %name, "derived fallback filename");
        Ok(name)
    }
}

/// Value of the first parameter accepted by `mode`, trimmed and unquoted.
fn filename_from_disposition(header_value: &str, mode: FilenameMatch) -> Option<String> {
    header_value
        .split(';')
        .filter_map(|segment| segment.split_once('='))
        .find(|(name, _)| mode.accepts(name))
        .map(|(_, value)| unquote(value.trim()).trim().to_string())
}

fn unquote(v: &str) -> &str {
    if v.len() >= 2 && v.starts_with('"') && v.ends_with('"') {
        &v[1..v.len() - 1]
    } else {
        v
    }
}
