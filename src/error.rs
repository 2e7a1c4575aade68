use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the scanner.
///
/// Only a completely inaccessible scan root is fatal. Unreadable descriptor
/// files and permission-denied subtrees are recovered locally and never reach
/// this type.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan root is not an accessible directory: {path}")]
    InaccessibleRoot {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },
}
