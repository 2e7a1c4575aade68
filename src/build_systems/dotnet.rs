//! .NET build system (*.csproj, *.vbproj, *.fsproj, *.sln)

use super::{BuildSystemDescriptor, BuildSystemId, ModuleRule, NameRule};

pub fn descriptor() -> BuildSystemDescriptor {
    BuildSystemDescriptor {
        id: BuildSystemId::DotNet,
        primary_pattern: "*.csproj",
        additional_patterns: &["*.vbproj", "*.fsproj", "*.sln"],
        excluded_dirs: &["obj", ".vs"],
        version_command: "dotnet --version",
        module_rule: ModuleRule::None,
        name_rule: NameRule::DotNetAssembly,
    }
}
