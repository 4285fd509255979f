//! CLI subcommand implementations.

pub mod intervals;
pub mod report;
pub mod util;
