//! Ruby build system (Gemfile)

use super::{BuildSystemDescriptor, BuildSystemId, ModuleRule, NameRule};

pub fn descriptor() -> BuildSystemDescriptor {
    BuildSystemDescriptor {
        id: BuildSystemId::Ruby,
        primary_pattern: "Gemfile",
        additional_patterns: &[],
        excluded_dirs: &["vendor", ".bundle"],
        version_command: "gem --version",
        module_rule: ModuleRule::None,
        name_rule: NameRule::RubyGemspec,
    }
}
