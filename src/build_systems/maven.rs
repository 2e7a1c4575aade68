//! Maven build system (pom.xml)

use super::{BuildSystemDescriptor, BuildSystemId, ModuleRule, NameRule};

pub fn descriptor() -> BuildSystemDescriptor {
    BuildSystemDescriptor {
        id: BuildSystemId::Maven,
        primary_pattern: "pom.xml",
        additional_patterns: &[],
        excluded_dirs: &[],
        version_command: "mvn --version",
        module_rule: ModuleRule::MavenTags,
        name_rule: NameRule::MavenArtifactId,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maven_patterns() {
        let d = descriptor();
        assert_eq!(d.patterns().collect::<Vec<_>>(), vec!["pom.xml"]);
        assert_eq!(d.module_rule, ModuleRule::MavenTags);
    }
}
