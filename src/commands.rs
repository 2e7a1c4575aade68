//! SBOM command planning
//!
//! Maps a resolved project instance to the CycloneDX tool invocation for its
//! build system. Planning is pure string assembly; execution lives in
//! [`crate::exec`].

use crate::build_systems::BuildSystemId;
use crate::build_systems::DescriptorFile;
use std::path::{Path, PathBuf};

/// A shell command ready to run, with the directory it must run in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCommand {
    pub build_system: BuildSystemId,
    pub project_name: String,
    pub command: String,
    /// Always the directory containing the descriptor file; SBOM tools
    /// resolve lockfiles and manifests relative to it.
    pub working_dir: PathBuf,
}

/// Plan the CycloneDX invocation for one instance.
pub fn plan(
    descriptor: &DescriptorFile,
    project_name: &str,
    output_dir: &Path,
) -> PlannedCommand {
    let out = output_dir.display();
    let command = match descriptor.build_system {
        BuildSystemId::Maven => format!(
            "mvn org.cyclonedx:cyclonedx-maven-plugin:makeAggregateBom \
             -DoutputFormat=json -DoutputDirectory={out} -DoutputName={project_name}-bom"
        ),
        BuildSystemId::Gradle => format!(
            "gradle cyclonedxBom -PcyclonedxOutputFormat=json \
             -PcyclonedxOutputDirectory={out} -PcyclonedxOutputName={project_name}-bom"
        ),
        BuildSystemId::Npm => {
            format!("npx @cyclonedx/cyclonedx-npm --output-file {out}/{project_name}-bom.json")
        }
        BuildSystemId::Python => {
            format!("cyclonedx-py --format json --output {out}/{project_name}-bom.json")
        }
        BuildSystemId::Go => {
            format!("cyclonedx-gomod app -json=true -output {out}/{project_name}-bom.json")
        }
        BuildSystemId::DotNet => {
            format!("dotnet CycloneDX . -o {out} -f json -n {project_name}-bom")
        }
        BuildSystemId::Rust => {
            format!("cargo cyclonedx -f json --output-file {out}/{project_name}-bom.json")
        }
        BuildSystemId::Php => format!(
            "composer make-bom --output-format=json --output-file={out}/{project_name}-bom.json"
        ),
        BuildSystemId::Ruby => {
            format!("cyclonedx-ruby -o {out}/{project_name}-bom.json -t json")
        }
    };

    PlannedCommand {
        build_system: descriptor.build_system,
        project_name: project_name.to_string(),
        command,
        working_dir: descriptor.parent_dir().to_path_buf(),
    }
}
