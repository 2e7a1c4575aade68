//! Python build system (setup.py, pyproject.toml, requirements.txt)

use super::{BuildSystemDescriptor, BuildSystemId, ModuleRule, NameRule};

pub fn descriptor() -> BuildSystemDescriptor {
    BuildSystemDescriptor {
        id: BuildSystemId::Python,
        primary_pattern: "setup.py",
        additional_patterns: &["pyproject.toml", "requirements.txt"],
        excluded_dirs: &["venv", ".venv", "env", "site-packages"],
        version_command: "python --version",
        module_rule: ModuleRule::None,
        name_rule: NameRule::PythonName,
    }
}
