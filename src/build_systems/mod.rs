//! Build system definitions
//!
//! Each supported build system is described by a static [`BuildSystemDescriptor`]
//! data record: which descriptor filenames identify it, which directories to
//! skip while searching, how child modules are declared, and how a project name
//! is pulled out of a descriptor. The records are interpreted by the shared
//! scanner/resolver/naming algorithms; only the literal markers differ between
//! systems, except for child-module extraction, where Maven (tag scan) and
//! Gradle (line scan over a settings file) are genuinely different strategies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Identifier of a supported build system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuildSystemId {
    Maven,
    Gradle,
    Npm,
    Python,
    Go,
    DotNet,
    Rust,
    Php,
    Ruby,
}

impl BuildSystemId {
    /// Stable display name used in reports and on the console.
    pub fn name(&self) -> &'static str {
        match self {
            BuildSystemId::Maven => "Maven",
            BuildSystemId::Gradle => "Gradle",
            BuildSystemId::Npm => "npm",
            BuildSystemId::Python => "Python",
            BuildSystemId::Go => "Go",
            BuildSystemId::DotNet => ".NET",
            BuildSystemId::Rust => "Rust",
            BuildSystemId::Php => "PHP",
            BuildSystemId::Ruby => "Ruby",
        }
    }

    /// Hard default project name when every extraction step fails.
    pub fn default_project_name(&self) -> &'static str {
        match self {
            BuildSystemId::Maven => "maven-project",
            BuildSystemId::Gradle => "gradle-project",
            BuildSystemId::Npm => "npm-project",
            BuildSystemId::Python => "python-project",
            BuildSystemId::Go => "go-project",
            BuildSystemId::DotNet => "dotnet-project",
            BuildSystemId::Rust => "rust-project",
            BuildSystemId::Php => "php-project",
            BuildSystemId::Ruby => "ruby-project",
        }
    }

    pub fn all() -> [BuildSystemId; 9] {
        [
            BuildSystemId::Maven,
            BuildSystemId::Gradle,
            BuildSystemId::Npm,
            BuildSystemId::Python,
            BuildSystemId::Go,
            BuildSystemId::DotNet,
            BuildSystemId::Rust,
            BuildSystemId::Php,
            BuildSystemId::Ruby,
        ]
    }
}

impl fmt::Display for BuildSystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a build system declares child modules, and how to extract them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleRule {
    /// `<modules>`/`<module>` markers in the descriptor itself; children come
    /// from scanning `<module>...</module>` pairs.
    MavenTags,
    /// `include` statements in a `settings.gradle`/`settings.gradle.kts` file
    /// next to the descriptor; children come from a line scan over quoted
    /// project paths.
    GradleInclude,
    /// No multi-module support for this build system.
    None,
}

/// How a human-readable project name is extracted from a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    /// Inner text of the first `<artifactId>` tag.
    MavenArtifactId,
    /// `rootProject.name` in a sibling settings file, double quotes tried
    /// before single; falls back to the directory name.
    GradleSettings,
    /// Quoted `"name"` JSON field; a `scope/name` or `vendor/package` value is
    /// stripped to the part after the first slash.
    JsonNameField,
    /// `name=` (setup.py) or `name =` (pyproject.toml) followed by a quoted
    /// value of either kind.
    PythonName,
    /// Final slash-separated segment of the `module` path in go.mod.
    GoModulePath,
    /// `<AssemblyName>` tag, else the project file's stem.
    DotNetAssembly,
    /// `name =` inside the `[package]` section, double quotes only.
    CargoPackageName,
    /// A `*.gemspec` file's stem in the descriptor's directory, else the
    /// directory name.
    RubyGemspec,
}

/// Static description of one supported build system.
///
/// Constructed once per process inside a [`registry::Catalog`] and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct BuildSystemDescriptor {
    pub id: BuildSystemId,
    /// Main descriptor filename glob (`*` matches within a filename).
    pub primary_pattern: &'static str,
    /// Further filename globs searched with the same exclusion rules.
    pub additional_patterns: &'static [&'static str],
    /// Directories never descended into for this system, on top of the
    /// global exclusion set.
    pub excluded_dirs: &'static [&'static str],
    /// Opaque version-check command handed to the shell collaborator.
    pub version_command: &'static str,
    pub module_rule: ModuleRule,
    pub name_rule: NameRule,
}

impl BuildSystemDescriptor {
    /// All filename patterns, primary first.
    pub fn patterns(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.primary_pattern).chain(self.additional_patterns.iter().copied())
    }

    /// Position of the pattern matching `filename`, primary pattern ranking
    /// first. Used to pick one descriptor per directory when several match.
    pub fn pattern_rank(&self, filename: &str) -> Option<usize> {
        self.patterns()
            .position(|p| crate::patterns::glob_match(p, filename))
    }
}

/// A concrete descriptor file discovered during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorFile {
    pub path: PathBuf,
    pub build_system: BuildSystemId,
}

impl DescriptorFile {
    pub fn new(path: PathBuf, build_system: BuildSystemId) -> Self {
        Self { path, build_system }
    }

    /// Directory containing the descriptor.
    pub fn parent_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }
}

pub mod cargo;
pub mod composer;
pub mod dotnet;
pub mod go_mod;
pub mod gradle;
pub mod maven;
pub mod npm;
pub mod python;
pub mod registry;
pub mod ruby;

pub use registry::Catalog;
