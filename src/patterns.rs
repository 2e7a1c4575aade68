//! Centralized file pattern tables
//!
//! Filename globs, exclusion directory names, and source-extension sets shared
//! by the scanner. Glob semantics are deliberately narrow: `*` matches any run
//! of characters within a filename, `.` is literal, and patterns are anchored
//! to the whole filename.

use regex::Regex;

/// Directories never descended into, regardless of build system.
///
/// Exclusion is by exact directory-name equality of a path component; a
/// directory named `mybuild` is not excluded by the `build` entry.
pub const EXCLUDED_DIRECTORIES: &[&str] = &[
    "target",
    "build",
    "bin",
    "out",
    "dist",
    "node_modules",
    "vendor",
    ".gradle",
    ".mvn",
    "__pycache__",
    ".pytest_cache",
    "venv",
    ".venv",
    "env",
    ".tox",
    "obj",
    ".vs",
    ".idea",
    ".git",
    ".svn",
    ".hg",
];

/// Non-build-system patterns reported alongside build systems (IaC tools and
/// source-code categories).
pub const CATEGORY_PATTERNS: &[(&str, &[&str])] = &[
    ("Terraform", &["*.tf", "*.tf.json"]),
    ("CloudFormation", &["template.yaml", "template.yml"]),
    ("Ansible", &["ansible.cfg", "playbook.yml", "site.yml"]),
    ("Kubernetes", &["deployment.yaml", "deployment.yml"]),
    ("Docker", &["Dockerfile", "docker-compose.yml"]),
    ("Pulumi", &["Pulumi.yaml", "Pulumi.yml"]),
    ("Java", &["*.java"]),
    ("Go Source", &["*.go"]),
    ("Python Source", &["*.py"]),
    ("C/C++", &["*.c", "*.cpp", "*.h", "*.hpp"]),
    ("JavaScript", &["*.js", "*.jsx"]),
    ("TypeScript", &["*.ts", "*.tsx"]),
    ("Kotlin", &["*.kt", "*.kts"]),
    ("C#", &["*.cs"]),
    ("Rust Source", &["*.rs"]),
    ("Ruby Source", &["*.rb"]),
    ("Shell", &["*.sh"]),
    ("YAML/JSON Config", &["*.yaml", "*.yml", "*.json"]),
];

/// Extensions counted in the file-type statistics.
pub const SOURCE_CODE_EXTENSIONS: &[&str] = &[
    "java", "kt", "kts", // Java, Kotlin
    "c", "cpp", "cc", "cxx", "h", "hpp", // C/C++
    "cs", "vb", // C#, VB.NET
    "py", "pyw", // Python
    "js", "jsx", "ts", "tsx", // JavaScript, TypeScript
    "go", "rs", "rb", "php", "swift", "m", "mm", "scala", "groovy", "clj", "cljs", "erl", "hrl",
    "ex", "exs", "lua", "pl", "pm", "r", "dart", "f", "f90", "f95", "asm", "s", "sh", "bash",
    "zsh", "ps1", "psm1", "bat", "cmd",
];

/// Container build files, matched case-insensitively by exact name.
pub const CONTAINER_BUILD_FILES: &[&str] = &[
    "dockerfile",
    "containerfile",
    "docker-compose.yml",
    "docker-compose.yaml",
    ".dockerignore",
];

/// Compile a filename glob into an anchored regex.
pub fn glob_to_regex(glob: &str) -> Regex {
    let mut pattern = String::with_capacity(glob.len() + 16);
    pattern.push('^');
    for ch in glob.chars() {
        if ch == '*' {
            pattern.push_str(".*");
        } else {
            pattern.push_str(&regex::escape(&ch.to_string()));
        }
    }
    pattern.push('$');
    // Escaping makes the pattern well-formed for any glob input.
    Regex::new(&pattern).unwrap_or_else(|_| Regex::new("^$").expect("empty regex"))
}

/// One-shot glob match against a filename.
pub fn glob_match(glob: &str, filename: &str) -> bool {
    if !glob.contains('*') {
        return glob == filename;
    }
    glob_to_regex(glob).is_match(filename)
}

/// True if `ext` (lowercase, without dot) is a counted source extension.
pub fn is_source_extension(ext: &str) -> bool {
    SOURCE_CODE_EXTENSIONS.contains(&ext)
}

/// True if `name` (lowercase) is a container build file.
pub fn is_container_file(name: &str) -> bool {
    CONTAINER_BUILD_FILES.contains(&name) || name.starts_with("dockerfile.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        exact = { "pom.xml", "pom.xml", true },
        exact_miss = { "pom.xml", "pom.xml.bak", false },
        star_suffix = { "*.csproj", "MyApp.csproj", true },
        star_not_substring = { "*.csproj", "MyApp.csproj.orig", false },
        dot_is_literal = { "go.mod", "go_mod", false },
        star_middle = { "build.gradle*", "build.gradle.kts", true },
        empty_star = { "*.rs", ".rs", true },
    )]
    fn test_glob_match(glob: &str, filename: &str, expected: bool) {
        assert_eq!(glob_match(glob, filename), expected);
    }

    #[test]
    fn test_glob_escapes_regex_metacharacters() {
        assert!(!glob_match("a+b.txt", "aab.txt"));
        assert!(glob_match("a+b.txt", "a+b.txt"));
    }

    #[test]
    fn test_container_file_detection() {
        assert!(is_container_file("dockerfile"));
        assert!(is_container_file("dockerfile.alpine"));
        assert!(is_container_file(".dockerignore"));
        assert!(!is_container_file("dockerfile_notes.txt"));
    }

    #[test]
    fn test_source_extensions() {
        assert!(is_source_extension("rs"));
        assert!(is_source_extension("kt"));
        assert!(!is_source_extension("md"));
    }
}
