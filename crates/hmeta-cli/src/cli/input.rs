//! Read raw header lines from a file or stdin.

use anyhow::{Context, Result};
use hmeta_core::HeaderMetadata;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Builds the header set from `path`, or from stdin when `path` is None.
pub fn read_headers(path: Option<&Path>) -> Result<HeaderMetadata> {
    let text = match path {
        Some(p) => fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read headers from stdin")?;
            buf
        }
    };
    parse_text(&text)
}

pub fn parse_text(text: &str) -> Result<HeaderMetadata> {
    let lines: Vec<&str> = text.lines().collect();
    HeaderMetadata::from_header_lines(&lines).context("parse header lines")
}
