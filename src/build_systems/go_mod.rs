//! Go build system (go.mod)

use super::{BuildSystemDescriptor, BuildSystemId, ModuleRule, NameRule};

pub fn descriptor() -> BuildSystemDescriptor {
    BuildSystemDescriptor {
        id: BuildSystemId::Go,
        primary_pattern: "go.mod",
        additional_patterns: &[],
        excluded_dirs: &[],
        version_command: "go version",
        module_rule: ModuleRule::None,
        name_rule: NameRule::GoModulePath,
    }
}
