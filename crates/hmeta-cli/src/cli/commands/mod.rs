//! CLI command handlers, one per file.

mod dump;
mod get;
mod inspect;

pub use dump::run_dump;
pub use get::run_get;
pub use inspect::run_inspect;
