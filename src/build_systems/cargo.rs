//! Rust build system (Cargo.toml)

use super::{BuildSystemDescriptor, BuildSystemId, ModuleRule, NameRule};

pub fn descriptor() -> BuildSystemDescriptor {
    BuildSystemDescriptor {
        id: BuildSystemId::Rust,
        primary_pattern: "Cargo.toml",
        additional_patterns: &[],
        excluded_dirs: &["target"],
        version_command: "cargo --version",
        module_rule: ModuleRule::None,
        name_rule: NameRule::CargoPackageName,
    }
}
