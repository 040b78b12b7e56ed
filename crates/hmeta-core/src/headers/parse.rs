//! Build a header set from raw response header lines.

use super::HeaderMetadata;
use crate::error::MetadataError;

impl HeaderMetadata {
    /// Parses `Name: value` lines as delivered by a transport's header callback.
    ///
    /// Blank lines are skipped. A status line (`HTTP/...`) starts a new
    /// response block, so after a redirect chain only the final response's
    /// headers remain.
    pub fn from_header_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, MetadataError> {
        let mut pairs: Vec<(String, String)> = Vec::new();

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            if is_status_line(line) {
                pairs.clear();
                continue;
            }
            match line.split_once(':') {
                Some((name, value)) if !name.trim().is_empty() => {
                    pairs.push((name.trim().to_string(), value.trim().to_string()));
                }
                _ => {
                    return Err(MetadataError::MalformedLine {
                        line: line.to_string(),
                    })
                }
            }
        }

        tracing::debug!(count = pairs.len(), "parsed response header lines");
        Ok(Self::new(pairs))
    }
}

fn is_status_line(line: &str) -> bool {
    line.starts_with("HTTP/")
}
