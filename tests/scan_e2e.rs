//! End-to-end scanning tests
//!
//! These tests build realistic project trees on disk and run the full
//! pipeline: scan, multi-module resolution, name extraction and SBOM
//! command planning.

use envscan::build_systems::Catalog;
use envscan::report::{ScanReport, SbomReport};
use envscan::scanner::{ScanConfig, Scanner};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn scan_report(root: &Path) -> ScanReport {
    let catalog = Catalog::with_defaults();
    let outcome = Scanner::new(root, &catalog)
        .unwrap()
        .with_config(ScanConfig::default())
        .scan();
    ScanReport::build(root, &outcome, &catalog, false)
}

/// Helper to create a Maven multi-module project fixture
fn create_maven_multi_module() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(
        root.join("pom.xml"),
        r#"<project>
    <groupId>com.acme</groupId>
    <artifactId>acme-parent</artifactId>
    <packaging>pom</packaging>
    <modules>
        <module>core</module>
        <module>web</module>
    </modules>
</project>
"#,
    )
    .unwrap();

    for (module, artifact) in [("core", "acme-core"), ("web", "acme-web")] {
        fs::create_dir(root.join(module)).unwrap();
        fs::write(
            root.join(module).join("pom.xml"),
            format!("<project><artifactId>{artifact}</artifactId></project>"),
        )
        .unwrap();
    }

    temp_dir
}

/// Helper to create a polyglot repository fixture
fn create_polyglot_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir(root.join("frontend")).unwrap();
    fs::write(
        root.join("frontend/package.json"),
        r#"{"name": "@acme/frontend", "version": "1.0.0"}"#,
    )
    .unwrap();

    fs::create_dir(root.join("backend")).unwrap();
    fs::write(
        root.join("backend/go.mod"),
        "module github.com/acme/backend\n\ngo 1.22\n",
    )
    .unwrap();
    fs::write(root.join("backend/main.go"), "package main\n").unwrap();

    fs::create_dir(root.join("infra")).unwrap();
    fs::write(root.join("infra/main.tf"), "resource \"x\" \"y\" {}\n").unwrap();
    fs::write(root.join("Dockerfile"), "FROM scratch\n").unwrap();

    // Dependency directories must never contribute descriptors.
    fs::create_dir_all(root.join("frontend/node_modules/leftpad")).unwrap();
    fs::write(
        root.join("frontend/node_modules/leftpad/package.json"),
        r#"{"name": "leftpad"}"#,
    )
    .unwrap();

    temp_dir
}

#[test]
fn test_maven_multi_module_resolves_to_single_root() {
    let project = create_maven_multi_module();
    let report = scan_report(project.path());

    assert_eq!(report.multi_module.get("Maven"), Some(&true));

    let instances = &report.instances["Maven"];
    assert_eq!(instances.len(), 1, "{instances:?}");
    assert_eq!(instances[0].project_name, "acme-parent");
    assert!(instances[0].multi_module);
    assert!(instances[0].is_root);
    assert_eq!(instances[0].modules, vec!["core", "web"]);
}

#[test]
fn test_polyglot_repo_detects_each_system_once() {
    let repo = create_polyglot_repo();
    let report = scan_report(repo.path());

    let npm = &report.instances["npm"];
    assert_eq!(npm.len(), 1);
    assert_eq!(npm[0].project_name, "frontend");

    let go = &report.instances["Go"];
    assert_eq!(go.len(), 1);
    assert_eq!(go[0].project_name, "backend");

    assert_eq!(report.found_files["Terraform"].len(), 1);
    assert_eq!(report.found_files["Docker"].len(), 1);

    // node_modules content is invisible.
    for file in &report.found_files["npm"] {
        assert!(!file.to_string_lossy().contains("node_modules"));
    }
}

#[test]
fn test_gradle_settings_drive_module_resolution() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(root.join("settings.gradle"), "rootProject.name = 'shop'\ninclude 'core', 'api'\n").unwrap();
    fs::write(root.join("build.gradle"), "plugins { id 'java' }\n").unwrap();
    for module in ["core", "api"] {
        fs::create_dir(root.join(module)).unwrap();
        fs::write(root.join(module).join("build.gradle"), "").unwrap();
    }

    let report = scan_report(root);
    let instances = &report.instances["Gradle"];
    assert_eq!(instances.len(), 1, "{instances:?}");
    assert_eq!(instances[0].project_name, "shop");
    assert_eq!(instances[0].modules, vec!["core", "api"]);
}

#[test]
fn test_sibling_projects_stay_independent() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    for name in ["alpha", "beta"] {
        fs::create_dir(root.join(name)).unwrap();
        fs::write(
            root.join(name).join("pom.xml"),
            format!("<project><artifactId>{name}</artifactId></project>"),
        )
        .unwrap();
    }

    let report = scan_report(root);
    assert_eq!(report.multi_module.get("Maven"), Some(&false));
    let mut names: Vec<_> = report.instances["Maven"]
        .iter()
        .map(|i| i.project_name.clone())
        .collect();
    names.sort();
    assert_eq!(names, vec!["alpha", "beta"]);
}

#[test]
fn test_file_type_statistics_cover_source_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("go.mod"), "module x\n").unwrap();
    fs::write(root.join("a.go"), "package x\n").unwrap();
    fs::write(root.join("b.go"), "package x\n").unwrap();

    let report = scan_report(root);
    let go_files = report.file_types.get("go").unwrap();
    assert_eq!(go_files.count, 2);
    assert!(go_files.percentage > 0.0);
}

#[test]
fn test_sbom_plan_covers_every_instance() {
    let repo = create_polyglot_repo();
    let catalog = Catalog::with_defaults();
    let outcome = Scanner::new(repo.path(), &catalog)
        .unwrap()
        .with_config(ScanConfig::default())
        .scan();
    let report = SbomReport::build(
        repo.path(),
        &outcome,
        &catalog,
        Path::new("/tmp/sbom-out"),
        true,
    );

    assert_eq!(report.commands.len(), 2);
    let npm_cmd = report
        .commands
        .iter()
        .find(|c| c.build_system == "npm")
        .unwrap();
    assert!(npm_cmd.command.contains("@cyclonedx/cyclonedx-npm"));
    assert!(npm_cmd.command.contains("frontend-bom.json"));
    assert!(npm_cmd.working_dir.ends_with("frontend"));
    assert!(!npm_cmd.executed);
}

#[test]
fn test_scan_is_idempotent() {
    let repo = create_polyglot_repo();
    let first = scan_report(repo.path());
    let second = scan_report(repo.path());

    assert_eq!(first.found_files, second.found_files);
    assert_eq!(first.multi_module, second.multi_module);
    assert_eq!(
        serde_json::to_value(&first.instances).unwrap(),
        serde_json::to_value(&second.instances).unwrap()
    );
}

#[test]
fn test_same_directory_python_markers_collapse() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("setup.py"), "from setuptools import setup\nsetup(name='tool')\n").unwrap();
    fs::write(root.join("requirements.txt"), "requests\n").unwrap();

    let report = scan_report(root);
    // Both files are reported as found...
    assert_eq!(report.found_files["Python"].len(), 2);
    // ...but resolve to one instance.
    let instances = &report.instances["Python"];
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].project_name, "tool");
}

#[test]
fn test_dotnet_project_and_solution_collapse() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("Acme.Api.csproj"), "<Project/>").unwrap();
    fs::write(root.join("Acme.sln"), "").unwrap();

    let report = scan_report(root);
    let instances = &report.instances[".NET"];
    assert_eq!(instances.len(), 1);
    // The project file outranks the solution file.
    assert!(instances[0].descriptor.ends_with("Acme.Api.csproj"));
    assert_eq!(instances[0].project_name, "Acme.Api");
}
