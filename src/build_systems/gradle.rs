//! Gradle build system (build.gradle, build.gradle.kts)
//!
//! Settings files are not collected as descriptors; they are consulted by the
//! resolver and name extractor as siblings of a build file, which is what
//! keeps a multi-module root reported once, at its build file.

use super::{BuildSystemDescriptor, BuildSystemId, ModuleRule, NameRule};

/// Settings filenames checked next to a build file, in preference order.
pub const SETTINGS_FILES: [&str; 2] = ["settings.gradle", "settings.gradle.kts"];

pub fn descriptor() -> BuildSystemDescriptor {
    BuildSystemDescriptor {
        id: BuildSystemId::Gradle,
        primary_pattern: "build.gradle",
        additional_patterns: &["build.gradle.kts"],
        excluded_dirs: &[".gradle"],
        version_command: "gradle --version",
        module_rule: ModuleRule::GradleInclude,
        name_rule: NameRule::GradleSettings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradle_patterns() {
        let d = descriptor();
        assert_eq!(
            d.patterns().collect::<Vec<_>>(),
            vec!["build.gradle", "build.gradle.kts"]
        );
    }

    #[test]
    fn test_settings_files_are_not_descriptors() {
        let d = descriptor();
        assert_eq!(d.pattern_rank("settings.gradle"), None);
        assert_eq!(d.pattern_rank("settings.gradle.kts"), None);
    }
}
