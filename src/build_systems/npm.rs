//! npm build system (package.json)

use super::{BuildSystemDescriptor, BuildSystemId, ModuleRule, NameRule};

pub fn descriptor() -> BuildSystemDescriptor {
    BuildSystemDescriptor {
        id: BuildSystemId::Npm,
        primary_pattern: "package.json",
        additional_patterns: &[],
        excluded_dirs: &["node_modules"],
        version_command: "npm --version",
        module_rule: ModuleRule::None,
        name_rule: NameRule::JsonNameField,
    }
}
