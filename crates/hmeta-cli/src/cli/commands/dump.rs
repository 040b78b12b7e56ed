//! Dump command: print the diagnostic rendering of the header set.

use anyhow::Result;
use std::path::Path;

use crate::cli::input::read_headers;

pub fn run_dump(path: Option<&Path>) -> Result<()> {
    let headers = read_headers(path)?;
    println!("{}", headers);
    Ok(())
}
