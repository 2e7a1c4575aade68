//! Output formatting
//!
//! Formatters for JSON, YAML and human-readable text renditions of scan and
//! SBOM reports.

use crate::report::{ScanReport, SbomReport};
use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Machine-readable JSON
    Json,
    /// YAML, friendlier for humans and version control
    Yaml,
    /// Formatted text for terminals
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_scan(&self, report: &ScanReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).context("Failed to serialize scan report to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(report).context("Failed to serialize scan report to YAML")
            }
            OutputFormat::Human => Ok(self.format_scan_human(report)),
        }
    }

    pub fn format_sbom(&self, report: &SbomReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).context("Failed to serialize SBOM report to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(report).context("Failed to serialize SBOM report to YAML")
            }
            OutputFormat::Human => Ok(self.format_sbom_human(report)),
        }
    }

    fn format_scan_human(&self, report: &ScanReport) -> String {
        let mut out = String::new();
        out.push_str("Environment Scan Result\n");
        out.push_str("=======================\n\n");
        out.push_str(&format!("Scanned: {}\n", report.scanned_root.display()));

        if report.instances.is_empty() {
            out.push_str("\nNo build systems detected\n");
        } else {
            out.push_str("\nBuild Systems:\n");
            for (system, instances) in &report.instances {
                let multi = report
                    .multi_module
                    .get(system)
                    .copied()
                    .unwrap_or(false);
                let suffix = if multi { " (multi-module)" } else { "" };
                out.push_str(&format!("  {system}{suffix}\n"));
                for instance in instances {
                    out.push_str(&format!(
                        "    {} [{}]",
                        instance.project_name,
                        instance.descriptor.display()
                    ));
                    if instance.multi_module {
                        out.push_str(&format!(" modules: {}", instance.modules.join(", ")));
                    }
                    out.push('\n');
                }
            }
        }

        let categories: Vec<_> = report
            .found_files
            .iter()
            .filter(|(name, _)| !report.instances.contains_key(*name))
            .collect();
        if !categories.is_empty() {
            out.push_str("\nOther Findings:\n");
            for (name, files) in categories {
                out.push_str(&format!("  {name}: {} file(s)\n", files.len()));
            }
        }

        if !report.tool_versions.is_empty() {
            out.push_str("\nTool Versions:\n");
            for (tool, version) in &report.tool_versions {
                if version.detected {
                    let first_line = version.version_info.lines().next().unwrap_or_default();
                    out.push_str(&format!("  {tool}: {first_line}\n"));
                } else {
                    out.push_str(&format!("  {tool}: not installed\n"));
                }
            }
        }

        if !report.file_types.is_empty() {
            out.push_str("\nFile Types:\n");
            for (ext, info) in &report.file_types {
                out.push_str(&format!(
                    "  {ext}: {} ({:.1}%)\n",
                    info.count, info.percentage
                ));
            }
        }

        out
    }

    fn format_sbom_human(&self, report: &SbomReport) -> String {
        let mut out = String::new();
        if report.dry_run {
            out.push_str("SBOM Generation Plan (dry run)\n");
        } else {
            out.push_str("SBOM Generation Result\n");
        }
        out.push_str("======================\n\n");
        out.push_str(&format!("Scanned: {}\n", report.scanned_root.display()));
        out.push_str(&format!("Output:  {}\n", report.output_dir.display()));

        if report.commands.is_empty() {
            out.push_str("\nNo build systems detected, nothing to generate\n");
            return out;
        }

        out.push_str("\nCommands:\n");
        for cmd in &report.commands {
            let status = match (cmd.executed, cmd.success) {
                (false, _) => "planned",
                (true, Some(true)) => "ok",
                _ => "FAILED",
            };
            out.push_str(&format!(
                "  [{status}] {} ({})\n    cd {} && {}\n",
                cmd.project_name,
                cmd.build_system,
                cmd.working_dir.display(),
                cmd.command
            ));
            if let Some(error) = &cmd.error {
                out.push_str(&format!("    error: {error}\n"));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_systems::Catalog;
    use crate::scanner::{ScanConfig, Scanner};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn sample_report(dir: &TempDir) -> ScanReport {
        let catalog = Catalog::with_defaults();
        let outcome = Scanner::new(dir.path(), &catalog)
            .unwrap()
            .with_config(ScanConfig::default())
            .scan();
        ScanReport::build(dir.path(), &outcome, &catalog, false)
    }

    #[test]
    fn test_json_output_is_valid() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("go.mod"), "module example.com/x\n").unwrap();
        let report = sample_report(&dir);

        let json = OutputFormatter::new(OutputFormat::Json)
            .format_scan(&report)
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["found_files"]["Go"].is_array());
    }

    #[test]
    fn test_human_output_lists_instances() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("go.mod"), "module example.com/widgets\n").unwrap();
        let report = sample_report(&dir);

        let text = OutputFormatter::new(OutputFormat::Human)
            .format_scan(&report)
            .unwrap();
        assert!(text.contains("Build Systems:"));
        assert!(text.contains("widgets"));
    }

    #[test]
    fn test_human_output_empty_tree() {
        let dir = TempDir::new().unwrap();
        let report = sample_report(&dir);
        let text = OutputFormatter::new(OutputFormat::Human)
            .format_scan(&report)
            .unwrap();
        assert!(text.contains("No build systems detected"));
    }

    #[test]
    fn test_sbom_human_dry_run() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Gemfile"), "").unwrap();
        let catalog = Catalog::with_defaults();
        let outcome = Scanner::new(dir.path(), &catalog)
            .unwrap()
            .with_config(ScanConfig::default())
            .scan();
        let report =
            crate::report::SbomReport::build(dir.path(), &outcome, &catalog, Path::new("/tmp/o"), true);

        let text = OutputFormatter::new(OutputFormat::Human)
            .format_sbom(&report)
            .unwrap();
        assert!(text.contains("dry run"));
        assert!(text.contains("[planned]"));
        assert!(text.contains("cyclonedx-ruby"));
    }
}
