//! envscan - build environment scanner and SBOM command planner
//!
//! This library walks a project tree looking for build system descriptor
//! files, resolves multi-module layouts into distinct project instances,
//! extracts human-readable project names, and plans the matching CycloneDX
//! SBOM generator invocation for each instance.
//!
//! # Core Concepts
//!
//! - **Catalog**: The immutable set of supported build system descriptions
//!   (filename patterns, exclusion directories, module and naming rules)
//! - **Scanning**: A single filesystem walk that classifies descriptor files,
//!   infrastructure-as-code files and source file types
//! - **Resolution**: Turning raw descriptor hits into project instances,
//!   excluding child modules a multi-module root already declares
//! - **Planning**: Mapping each instance to the CycloneDX command for its
//!   ecosystem, with the descriptor's directory as working directory
//!
//! # Example Usage
//!
//! ```ignore
//! use envscan::build_systems::Catalog;
//! use envscan::report::ScanReport;
//! use envscan::scanner::{ScanConfig, Scanner};
//! use std::path::Path;
//!
//! fn scan(root: &Path) -> Result<ScanReport, Box<dyn std::error::Error>> {
//!     let catalog = Catalog::with_defaults();
//!     let outcome = Scanner::new(root, &catalog)?
//!         .with_config(ScanConfig::default())
//!         .scan();
//!     Ok(ScanReport::build(root, &outcome, &catalog, false))
//! }
//! ```

pub mod build_systems;
pub mod cli;
pub mod commands;
pub mod error;
pub mod exec;
pub mod naming;
pub mod patterns;
pub mod report;
pub mod resolver;
pub mod scanner;

pub use build_systems::{BuildSystemDescriptor, BuildSystemId, Catalog, DescriptorFile};
pub use error::ScanError;
pub use report::{ScanReport, SbomReport};
pub use resolver::Instance;
pub use scanner::{ScanConfig, ScanOutcome, Scanner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
