//! Report assembly
//!
//! Serializable summaries of a scan or an SBOM planning run. Assembly pulls
//! the detection, resolution, naming and probing layers together so the CLI
//! handlers only format and print.

use crate::build_systems::Catalog;
use crate::commands::{self, PlannedCommand};
use crate::exec::{self, ToolVersion};
use crate::naming;
use crate::resolver;
use crate::scanner::{FileTypeInfo, ScanOutcome};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// One resolved project instance in a report.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceReport {
    pub descriptor: PathBuf,
    pub project_name: String,
    pub multi_module: bool,
    pub is_root: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<String>,
}

/// Full result of a scan, serialized as-is for JSON and YAML output.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub scanned_root: PathBuf,
    pub generated_at: DateTime<Utc>,
    /// Descriptor and category hits, keyed by build system or category name.
    pub found_files: BTreeMap<String, Vec<PathBuf>>,
    /// Coarse per-system multi-module verdict, only for detected systems.
    pub multi_module: BTreeMap<String, bool>,
    pub instances: BTreeMap<String, Vec<InstanceReport>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub tool_versions: BTreeMap<String, ToolVersion>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub file_types: BTreeMap<String, FileTypeInfo>,
}

impl ScanReport {
    /// Assemble the report for a completed scan.
    ///
    /// `probe_versions` gates the shell probes so `--no-versions` (and tests)
    /// can keep the report fully offline.
    pub fn build(root: &Path, outcome: &ScanOutcome, catalog: &Catalog, probe_versions: bool) -> Self {
        let mut found_files: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
        let mut multi_module = BTreeMap::new();
        let mut instances = BTreeMap::new();
        let mut tool_versions = BTreeMap::new();

        for (id, descriptors) in &outcome.descriptors {
            let Some(system) = catalog.get(*id) else {
                continue;
            };
            let name = system.id.name().to_string();
            found_files.insert(
                name.clone(),
                descriptors.iter().map(|d| d.path.clone()).collect(),
            );
            multi_module.insert(name.clone(), resolver::is_multi_module(system, descriptors));

            let resolved = resolver::resolve(system, descriptors)
                .into_iter()
                .map(|instance| InstanceReport {
                    project_name: naming::extract_name(system, &instance.descriptor),
                    descriptor: instance.descriptor.path,
                    multi_module: instance.is_multi_module_root,
                    is_root: instance.is_root,
                    modules: instance.declared_child_paths,
                })
                .collect();
            instances.insert(name.clone(), resolved);

            if probe_versions {
                tool_versions.insert(name, exec::probe_tool_version(system.version_command));
            }
        }

        for (category, files) in &outcome.categories {
            found_files.insert(category.clone(), files.clone());
        }

        info!(
            systems = multi_module.len(),
            categories = outcome.categories.len(),
            "scan report assembled"
        );

        ScanReport {
            scanned_root: root.to_path_buf(),
            generated_at: Utc::now(),
            found_files,
            multi_module,
            instances,
            tool_versions,
            file_types: outcome.file_types.clone(),
        }
    }
}

/// One planned (and possibly executed) SBOM command.
#[derive(Debug, Clone, Serialize)]
pub struct SbomCommandReport {
    pub build_system: String,
    pub project_name: String,
    pub command: String,
    pub working_dir: PathBuf,
    pub executed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of an SBOM planning or generation run.
#[derive(Debug, Clone, Serialize)]
pub struct SbomReport {
    pub scanned_root: PathBuf,
    pub generated_at: DateTime<Utc>,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub commands: Vec<SbomCommandReport>,
}

impl SbomReport {
    /// Plan one command per resolved instance, executing each unless
    /// `dry_run`. A failed command is recorded and the run continues.
    pub fn build(
        root: &Path,
        outcome: &ScanOutcome,
        catalog: &Catalog,
        output_dir: &Path,
        dry_run: bool,
    ) -> Self {
        let mut reports = Vec::new();
        for (id, descriptors) in &outcome.descriptors {
            let Some(system) = catalog.get(*id) else {
                continue;
            };
            for instance in resolver::resolve(system, descriptors) {
                let project_name = naming::extract_name(system, &instance.descriptor);
                let planned = commands::plan(&instance.descriptor, &project_name, output_dir);
                reports.push(Self::run_one(planned, dry_run));
            }
        }

        SbomReport {
            scanned_root: root.to_path_buf(),
            generated_at: Utc::now(),
            output_dir: output_dir.to_path_buf(),
            dry_run,
            commands: reports,
        }
    }

    fn run_one(planned: PlannedCommand, dry_run: bool) -> SbomCommandReport {
        let (executed, success, error) = if dry_run {
            (false, None, None)
        } else {
            let outcome = exec::run_planned(&planned);
            let error = (!outcome.success).then_some(outcome.message);
            (true, Some(outcome.success), error)
        };
        SbomCommandReport {
            build_system: planned.build_system.name().to_string(),
            project_name: planned.project_name,
            command: planned.command,
            working_dir: planned.working_dir,
            executed,
            success,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{ScanConfig, Scanner};
    use std::fs;
    use tempfile::TempDir;

    fn scan(dir: &TempDir) -> (ScanOutcome, Catalog) {
        let catalog = Catalog::with_defaults();
        let outcome = Scanner::new(dir.path(), &catalog)
            .unwrap()
            .with_config(ScanConfig::default())
            .scan();
        (outcome, catalog)
    }

    #[test]
    fn test_scan_report_keys_by_system_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("go.mod"), "module example.com/acme/svc\n").unwrap();

        let (outcome, catalog) = scan(&dir);
        let report = ScanReport::build(dir.path(), &outcome, &catalog, false);

        assert!(report.found_files.contains_key("Go"));
        assert_eq!(report.multi_module.get("Go"), Some(&false));
        let instances = &report.instances["Go"];
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].project_name, "svc");
        assert!(report.tool_versions.is_empty());
    }

    #[test]
    fn test_scan_report_merges_categories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Cargo.toml"), "[package]\nname = \"x\"\n").unwrap();
        fs::write(dir.path().join("main.tf"), "resource {}\n").unwrap();

        let (outcome, catalog) = scan(&dir);
        let report = ScanReport::build(dir.path(), &outcome, &catalog, false);
        assert!(report.found_files.contains_key("Rust"));
        assert!(report.found_files.contains_key("Terraform"));
        // Categories carry no multi-module verdict.
        assert!(!report.multi_module.contains_key("Terraform"));
    }

    #[test]
    fn test_sbom_report_dry_run_plans_without_executing() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"name": "@acme/web"}"#,
        )
        .unwrap();

        let (outcome, catalog) = scan(&dir);
        let report = SbomReport::build(
            dir.path(),
            &outcome,
            &catalog,
            Path::new("/tmp/out"),
            true,
        );
        assert!(report.dry_run);
        assert_eq!(report.commands.len(), 1);
        let cmd = &report.commands[0];
        assert!(!cmd.executed);
        assert_eq!(cmd.project_name, "web");
        assert!(cmd.command.contains("/tmp/out/web-bom.json"));
    }

    #[test]
    fn test_sbom_report_one_command_per_instance() {
        let dir = TempDir::new().unwrap();
        let base = dir.path();
        fs::create_dir_all(base.join("svc-a")).unwrap();
        fs::create_dir_all(base.join("svc-b")).unwrap();
        fs::write(base.join("svc-a/go.mod"), "module a\n").unwrap();
        fs::write(base.join("svc-b/Gemfile"), "").unwrap();

        let (outcome, catalog) = scan(&dir);
        let report = SbomReport::build(base, &outcome, &catalog, Path::new("/tmp/out"), true);
        assert_eq!(report.commands.len(), 2);
    }
}
