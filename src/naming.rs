//! Project name extraction
//!
//! Pulls a human-readable project name out of a descriptor file using plain
//! substring and quote scans, matching how each ecosystem actually writes the
//! field in practice. Extraction is total: every failure path lands on the
//! build system's default name, never an error.

use crate::build_systems::gradle::SETTINGS_FILES;
use crate::build_systems::{BuildSystemDescriptor, DescriptorFile, NameRule};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Extract the project name for a descriptor. Never fails.
pub fn extract_name(system: &BuildSystemDescriptor, descriptor: &DescriptorFile) -> String {
    let name = match system.name_rule {
        NameRule::MavenArtifactId => fs::read_to_string(&descriptor.path)
            .ok()
            .and_then(|c| xml_tag_value(&c, "artifactId")),
        NameRule::GradleSettings => gradle_name(descriptor),
        NameRule::JsonNameField => fs::read_to_string(&descriptor.path)
            .ok()
            .and_then(|c| json_name_field(&c))
            .map(strip_scope_prefix),
        NameRule::PythonName => fs::read_to_string(&descriptor.path)
            .ok()
            .and_then(|c| python_name(&c)),
        NameRule::GoModulePath => fs::read_to_string(&descriptor.path)
            .ok()
            .and_then(|c| go_module_name(&c)),
        NameRule::DotNetAssembly => dotnet_name(descriptor),
        NameRule::CargoPackageName => fs::read_to_string(&descriptor.path)
            .ok()
            .and_then(|c| cargo_package_name(&c)),
        NameRule::RubyGemspec => ruby_name(descriptor),
    };

    match name {
        Some(n) if !n.is_empty() => n,
        _ => {
            let fallback = system.id.default_project_name().to_string();
            debug!(
                descriptor = %descriptor.path.display(),
                %fallback,
                "no project name in descriptor, using default"
            );
            fallback
        }
    }
}

/// Trimmed inner text of the first `<tag>...</tag>` pair.
fn xml_tag_value(content: &str, tag: &str) -> Option<String> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = content.find(&open)? + open.len();
    let end = content[start..].find(&close)?;
    let value = content[start..start + end].trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// First quoted value after `marker`, trying a double-quote pair before a
/// single-quote pair. The search stays on the marker's line so quoted
/// strings further down the file cannot leak in.
fn quoted_after(content: &str, marker: &str) -> Option<String> {
    let after = &content[content.find(marker)? + marker.len()..];
    let after = after.lines().next().unwrap_or(after);
    for quote in ['"', '\''] {
        if let Some(open) = after.find(quote) {
            if let Some(close) = after[open + 1..].find(quote) {
                let value = &after[open + 1..open + 1 + close];
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

/// `"name"` field by marker scan: find the quoted key, skip past the colon,
/// take the next double-quoted value. No JSON grammar is involved, so a
/// malformed but name-bearing file still yields its name.
fn json_name_field(content: &str) -> Option<String> {
    let key = content.find("\"name\"")?;
    let after = &content[key + "\"name\"".len()..];
    let rest = &after[after.find(':')? + 1..];
    let open = rest.find('"')?;
    let close = rest[open + 1..].find('"')?;
    let value = rest[open + 1..open + 1 + close].trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// `@scope/pkg` (npm) and `vendor/pkg` (Composer) both reduce to the part
/// after the first slash.
fn strip_scope_prefix(name: String) -> String {
    match name.split_once('/') {
        Some((_, short)) if !short.is_empty() => short.to_string(),
        _ => name,
    }
}

fn gradle_name(descriptor: &DescriptorFile) -> Option<String> {
    let dir = descriptor.parent_dir();
    for settings in SETTINGS_FILES {
        let candidate = dir.join(settings);
        if let Ok(content) = fs::read_to_string(&candidate) {
            if let Some(name) = quoted_after(&content, "rootProject.name") {
                return Some(name);
            }
        }
    }
    directory_name(dir)
}

fn python_name(content: &str) -> Option<String> {
    // Covers both setup(name="x") and [project] name = "x".
    for marker in ["name=", "name ="] {
        if let Some(name) = quoted_after(content, marker) {
            return Some(name);
        }
    }
    None
}

fn go_module_name(content: &str) -> Option<String> {
    for line in content.lines() {
        let line = line.trim();
        if let Some(path) = line.strip_prefix("module ") {
            let path = path.trim().trim_matches('"');
            let last = path.rsplit('/').next().unwrap_or(path);
            if !last.is_empty() {
                return Some(last.to_string());
            }
        }
    }
    None
}

fn dotnet_name(descriptor: &DescriptorFile) -> Option<String> {
    if let Ok(content) = fs::read_to_string(&descriptor.path) {
        if let Some(name) = xml_tag_value(&content, "AssemblyName") {
            return Some(name);
        }
    }
    let stem = Path::new(descriptor.file_name()).file_stem()?.to_str()?;
    (!stem.is_empty()).then(|| stem.to_string())
}

fn cargo_package_name(content: &str) -> Option<String> {
    let package_start = content.find("[package]")?;
    // Stop at the next section header so workspace or dependency tables
    // cannot contribute a name.
    let section = &content[package_start + "[package]".len()..];
    let section = match section.find("\n[") {
        Some(end) => &section[..end],
        None => section,
    };
    for line in section.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("name") {
            let rest = rest.trim_start();
            if let Some(rest) = rest.strip_prefix('=') {
                let value = rest.trim().trim_matches('"');
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

/// The stem of the first `*.gemspec` in the descriptor's directory, sorted by
/// filename for determinism, else the directory name.
fn ruby_name(descriptor: &DescriptorFile) -> Option<String> {
    let dir = descriptor.parent_dir();
    if let Ok(entries) = fs::read_dir(dir) {
        let mut gemspecs: Vec<String> = entries
            .flatten()
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|n| n.ends_with(".gemspec"))
            .collect();
        gemspecs.sort();
        if let Some(first) = gemspecs.first() {
            let stem = first.trim_end_matches(".gemspec");
            if !stem.is_empty() {
                return Some(stem.to_string());
            }
        }
    }
    directory_name(dir)
}

fn directory_name(dir: &Path) -> Option<String> {
    dir.file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .map(|n| n.to_string())
}
