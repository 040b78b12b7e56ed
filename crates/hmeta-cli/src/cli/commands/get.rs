//! Get command: print one header value.

use anyhow::{bail, Result};
use std::path::Path;

use crate::cli::input::read_headers;

pub fn run_get(name: &str, path: Option<&Path>) -> Result<()> {
    let headers = read_headers(path)?;
    match headers.get(name) {
        Some(value) => println!("{}", value),
        None => bail!("header {} not present", name),
    }
    Ok(())
}
