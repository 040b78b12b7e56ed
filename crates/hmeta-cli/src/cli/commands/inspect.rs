//! Inspect command: print the resolved identity of a response.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use hmeta_core::config::HmetaConfig;
use hmeta_core::headers::UNKNOWN_SIZE;
use hmeta_core::{FilenameMatch, HeaderMetadata};
use std::path::Path;

use crate::cli::input::read_headers;

pub fn run_inspect(cfg: &HmetaConfig, path: Option<&Path>, strict: bool) -> Result<()> {
    let headers = read_headers(path)?;
    println!("{}", render_identity(cfg, headers, strict)?);
    Ok(())
}

fn render_identity(cfg: &HmetaConfig, headers: HeaderMetadata, strict: bool) -> Result<String> {
    let mode = if strict {
        FilenameMatch::Strict
    } else {
        cfg.filename_match
    };
    let headers = headers.with_filename_match(mode);

    let file_name = headers
        .resolved_file_name()
        .context("resolve file name")?;
    let size = match headers.resolved_size() {
        UNKNOWN_SIZE => "unknown".to_string(),
        n => n.to_string(),
    };
    let unknown_time = DateTime::<Utc>::MIN_UTC;
    let last_modified = match headers.last_modified(unknown_time) {
        at if at == unknown_time => "unknown".to_string(),
        at => at.to_rfc3339(),
    };
    let extension = headers
        .file_extension(cfg.fallback_extension.as_deref())
        .context("resolve extension")?
        .unwrap_or_else(|| "none".to_string());

    Ok(format!(
        "file name:     {}\nsize:          {}\nlast modified: {}\nmime type:     {}\nextension:     {}",
        file_name,
        size,
        last_modified,
        headers.content_mime_type("unknown"),
        extension
    ))
}
