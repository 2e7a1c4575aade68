//! Subcommand handlers
//!
//! Each handler maps its arguments onto the scanning pipeline, formats the
//! resulting report, and returns a process exit code. Errors are printed to
//! stderr; exit codes are 0 on success, 1 on any failure.

use crate::build_systems::Catalog;
use crate::cli::commands::{ScanArgs, SbomArgs};
use crate::cli::output::OutputFormatter;
use crate::report::{ScanReport, SbomReport};
use crate::scanner::{ScanConfig, Scanner};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::error;

pub fn handle_scan(args: &ScanArgs, quiet: bool) -> i32 {
    match run_scan(args) {
        Ok(output) => {
            emit(output, args.output.as_deref(), quiet)
        }
        Err(e) => {
            error!("scan failed: {e:#}");
            eprintln!("Error: {e:#}");
            1
        }
    }
}

pub fn handle_sbom(args: &SbomArgs, quiet: bool) -> i32 {
    match run_sbom(args) {
        Ok((output, all_succeeded)) => {
            let code = emit(output, args.output.as_deref(), quiet);
            if code != 0 {
                code
            } else if all_succeeded {
                0
            } else {
                1
            }
        }
        Err(e) => {
            error!("sbom generation failed: {e:#}");
            eprintln!("Error: {e:#}");
            1
        }
    }
}

fn run_scan(args: &ScanArgs) -> Result<String> {
    let root = resolve_path(args.path.as_deref());
    let catalog = Catalog::with_defaults();
    let config = ScanConfig {
        max_depth: args.max_depth,
        ..ScanConfig::default()
    };
    let outcome = Scanner::new(&root, &catalog)?.with_config(config).scan();
    let report = ScanReport::build(&root, &outcome, &catalog, !args.no_versions);
    OutputFormatter::new(args.format.into()).format_scan(&report)
}

fn run_sbom(args: &SbomArgs) -> Result<(String, bool)> {
    let root = resolve_path(args.path.as_deref());
    let catalog = Catalog::with_defaults();
    let outcome = Scanner::new(&root, &catalog)?
        .with_config(ScanConfig::default())
        .scan();

    if !args.dry_run {
        fs::create_dir_all(&args.output_dir).with_context(|| {
            format!("failed to create output directory {}", args.output_dir.display())
        })?;
    }

    let report = SbomReport::build(&root, &outcome, &catalog, &args.output_dir, args.dry_run);
    let all_succeeded = report
        .commands
        .iter()
        .all(|c| c.success.unwrap_or(true));
    let output = OutputFormatter::new(args.format.into()).format_sbom(&report)?;
    Ok((output, all_succeeded))
}

fn resolve_path(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn emit(output: String, target: Option<&Path>, quiet: bool) -> i32 {
    match target {
        Some(file) => {
            if let Err(e) = fs::write(file, &output) {
                eprintln!("Error: failed to write {}: {e}", file.display());
                return 1;
            }
            if !quiet {
                println!("Output written to {}", file.display());
            }
            0
        }
        None => {
            println!("{output}");
            0
        }
    }
}
