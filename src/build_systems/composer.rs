//! PHP build system (composer.json)

use super::{BuildSystemDescriptor, BuildSystemId, ModuleRule, NameRule};

pub fn descriptor() -> BuildSystemDescriptor {
    BuildSystemDescriptor {
        id: BuildSystemId::Php,
        primary_pattern: "composer.json",
        additional_patterns: &[],
        excluded_dirs: &["vendor"],
        version_command: "composer --version",
        module_rule: ModuleRule::None,
        name_rule: NameRule::JsonNameField,
    }
}
