pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, ScanArgs, SbomArgs};
pub use output::{OutputFormat, OutputFormatter};
