//! Multi-module resolution
//!
//! Turns the raw per-build-system descriptor lists from the scanner into
//! de-duplicated project instances. A descriptor either is a multi-module
//! root (its content, or for Gradle a sibling settings file, declares child
//! modules), or it is standalone; descriptors sitting at a path a root
//! declares as one of its modules are dropped so child modules are never
//! reported as independent projects.
//!
//! Read failures on descriptor content always fail open: an unreadable file
//! is treated as non-multi-module and as non-child, so an I/O hiccup can hide
//! module structure but can never make a project disappear from the results.

use crate::build_systems::{BuildSystemDescriptor, DescriptorFile, ModuleRule};
use crate::build_systems::gradle::SETTINGS_FILES;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A resolved unit of work: a standalone project or a multi-module root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub descriptor: DescriptorFile,
    /// True iff the descriptor carries multi-module markers for its system.
    pub is_multi_module_root: bool,
    /// A multi-module descriptor is definitionally a root; standalone
    /// descriptors are trivially roots of their own single-project instance.
    pub is_root: bool,
    /// Declared relative module paths, populated only for multi-module roots.
    pub declared_child_paths: Vec<String>,
}

/// Resolve one build system's descriptor list into instances.
///
/// Two passes: first find multi-module roots and their declared child paths,
/// then drop every descriptor whose directory is a declared child of some
/// root. A root is never excluded by its own declarations; only strictly
/// nested descriptors are candidates. Finally, when several descriptors share
/// a directory (e.g. `setup.py` next to `requirements.txt`), only the one
/// matching the earliest catalog pattern survives, keeping instance
/// directories unique per build system.
pub fn resolve(system: &BuildSystemDescriptor, descriptors: &[DescriptorFile]) -> Vec<Instance> {
    let mut roots: Vec<(PathBuf, Vec<String>)> = Vec::new();
    for descriptor in descriptors {
        if let Some(content) = read_module_source(system.module_rule, &descriptor.path) {
            if has_module_markers(system.module_rule, &descriptor.path, &content) {
                let children = extract_child_paths(system.module_rule, &content);
                debug!(
                    descriptor = %descriptor.path.display(),
                    children = children.len(),
                    "multi-module root detected"
                );
                roots.push((descriptor.parent_dir().to_path_buf(), children));
            }
        }
    }

    let mut ordered: Vec<&DescriptorFile> = descriptors.iter().collect();
    ordered.sort_by_key(|d| {
        (
            d.parent_dir().to_path_buf(),
            d.build_system,
            system.pattern_rank(d.file_name()).unwrap_or(usize::MAX),
            d.path.clone(),
        )
    });

    let mut instances = Vec::new();
    let mut seen_dirs: Vec<PathBuf> = Vec::new();
    for descriptor in ordered {
        let dir = descriptor.parent_dir();
        if is_declared_child(dir, &roots) {
            debug!(descriptor = %descriptor.path.display(), "excluded declared child module");
            continue;
        }
        if seen_dirs.iter().any(|d| d == dir) {
            continue;
        }
        seen_dirs.push(dir.to_path_buf());

        let (is_multi, children) = roots
            .iter()
            .find(|(root_dir, _)| root_dir == dir)
            .map(|(_, children)| (true, children.clone()))
            .unwrap_or((false, Vec::new()));

        instances.push(Instance {
            descriptor: descriptor.clone(),
            is_multi_module_root: is_multi,
            is_root: is_multi,
            declared_child_paths: children,
        });
    }
    instances
}

/// Legacy coarse predicate: a build system is multi-module overall iff more
/// than one descriptor was found and at least one carries module markers.
/// Zero or one descriptor is never multi-module, markers or not.
pub fn is_multi_module(system: &BuildSystemDescriptor, descriptors: &[DescriptorFile]) -> bool {
    if descriptors.len() <= 1 {
        return false;
    }
    descriptors.iter().any(|d| {
        read_module_source(system.module_rule, &d.path)
            .map_or(false, |content| has_module_markers(system.module_rule, &d.path, &content))
    })
}

/// Content the module markers are tested against.
///
/// For Maven that is the descriptor itself. For Gradle it is the settings
/// file: the descriptor's own content when the descriptor *is* a settings
/// file, otherwise a sibling `settings.gradle`/`settings.gradle.kts` of the
/// build file. `None` means unreadable or not applicable; callers fail open.
fn read_module_source(rule: ModuleRule, descriptor_path: &Path) -> Option<String> {
    match rule {
        ModuleRule::MavenTags => fs::read_to_string(descriptor_path).ok(),
        ModuleRule::GradleInclude => {
            let filename = descriptor_path.file_name()?.to_str()?;
            if SETTINGS_FILES.contains(&filename) {
                return fs::read_to_string(descriptor_path).ok();
            }
            let dir = descriptor_path.parent()?;
            for settings in SETTINGS_FILES {
                let candidate = dir.join(settings);
                if candidate.is_file() {
                    return fs::read_to_string(candidate).ok();
                }
            }
            None
        }
        ModuleRule::None => None,
    }
}

fn has_module_markers(rule: ModuleRule, _descriptor_path: &Path, content: &str) -> bool {
    match rule {
        ModuleRule::MavenTags => content.contains("<modules>") || content.contains("<module>"),
        // Trailing space avoids matching e.g. `includeGroup`.
        ModuleRule::GradleInclude => content.contains("include(") || content.contains("include "),
        ModuleRule::None => false,
    }
}

fn extract_child_paths(rule: ModuleRule, content: &str) -> Vec<String> {
    match rule {
        ModuleRule::MavenTags => extract_maven_modules(content),
        ModuleRule::GradleInclude => extract_gradle_includes(content),
        ModuleRule::None => Vec::new(),
    }
}

/// Collect the trimmed inner text of every non-nested `<module>...</module>`
/// pair: for each open tag, the first close tag after it.
fn extract_maven_modules(content: &str) -> Vec<String> {
    const OPEN: &str = "<module>";
    const CLOSE: &str = "</module>";
    let mut modules = Vec::new();
    let mut pos = 0;
    while let Some(start) = content[pos..].find(OPEN) {
        let value_start = pos + start + OPEN.len();
        match content[value_start..].find(CLOSE) {
            Some(end) => {
                let value = content[value_start..value_start + end].trim();
                if !value.is_empty() {
                    modules.push(value.to_string());
                }
                pos = value_start + end + CLOSE.len();
            }
            None => break,
        }
    }
    modules
}

/// Line scan for `include` statements. A candidate line starts with `include`
/// after trimming and contains a quote; every quoted value on the line is
/// collected, a leading `:` stripped, and remaining `:` separators normalized
/// to `/` for nested module paths.
fn extract_gradle_includes(content: &str) -> Vec<String> {
    let mut modules = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if !line.starts_with("include") {
            continue;
        }
        let mut rest = line;
        while let Some(open) = rest.find(|c: char| c == '\'' || c == '"') {
            let quote = rest.as_bytes()[open] as char;
            let after = &rest[open + 1..];
            match after.find(quote) {
                Some(close) => {
                    let raw = &after[..close];
                    let stripped = raw.strip_prefix(':').unwrap_or(raw);
                    let normalized = stripped.replace(':', "/");
                    if !normalized.is_empty() {
                        modules.push(normalized);
                    }
                    rest = &after[close + 1..];
                }
                None => break, // unbalanced quote, stop at this line
            }
        }
    }
    modules
}

/// True if `dir` is a strictly nested, declared child of any module root.
///
/// The relative path from root to `dir`, normalized to forward slashes, must
/// equal a declared child path or extend one across a `/` boundary. Exclusion
/// is monotonic, so matching any root suffices.
fn is_declared_child(dir: &Path, roots: &[(PathBuf, Vec<String>)]) -> bool {
    for (root_dir, children) in roots {
        if dir == root_dir {
            continue;
        }
        let Ok(rel) = dir.strip_prefix(root_dir) else {
            continue;
        };
        let rel = normalize_slashes(rel);
        if rel.is_empty() {
            continue;
        }
        for child in children {
            let child = child.trim_end_matches('/');
            if rel == child || rel.starts_with(&format!("{child}/")) {
                return true;
            }
        }
    }
    false
}

fn normalize_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
