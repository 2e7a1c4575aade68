use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Build environment scanner and SBOM command planner
#[derive(Parser, Debug)]
#[command(
    name = "envscan",
    about = "Scan a project tree for build systems and plan CycloneDX SBOM generation",
    version,
    author,
    long_about = "envscan walks a project tree looking for build system descriptor files \
                  (pom.xml, package.json, go.mod, ...), resolves multi-module layouts into \
                  distinct project instances, and plans or runs the matching CycloneDX \
                  SBOM generator for each one."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Verbose output (debug logging)")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Scan a directory for build systems",
        long_about = "Walks the directory tree, reports detected build systems, resolved \
                      project instances, infrastructure-as-code files, file type statistics \
                      and installed build tool versions.\n\n\
                      Examples:\n  \
                      envscan scan\n  \
                      envscan scan /path/to/repo --format json\n  \
                      envscan scan --no-versions -o report.json"
    )]
    Scan(ScanArgs),

    #[command(
        about = "Plan or run CycloneDX SBOM generation",
        long_about = "Scans the directory, then plans one CycloneDX command per resolved \
                      project instance and runs them unless --dry-run is given.\n\n\
                      Examples:\n  \
                      envscan sbom --dry-run\n  \
                      envscan sbom /path/to/repo --output-dir sboms"
    )]
    Sbom(SbomArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ScanArgs {
    #[arg(
        value_name = "PATH",
        help = "Directory to scan (defaults to current directory)"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Skip probing installed build tool versions")]
    pub no_versions: bool,

    #[arg(
        long,
        value_name = "DEPTH",
        help = "Maximum directory depth to descend (unlimited by default)"
    )]
    pub max_depth: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct SbomArgs {
    #[arg(
        value_name = "PATH",
        help = "Directory to scan (defaults to current directory)"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        short = 'd',
        long,
        value_name = "DIR",
        default_value = "generated-sboms",
        help = "Directory SBOM files are written to"
    )]
    pub output_dir: PathBuf,

    #[arg(long, help = "Print the planned commands without executing them")]
    pub dry_run: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_default_scan_args() {
        let args = CliArgs::parse_from(["envscan", "scan"]);
        match args.command {
            Commands::Scan(scan_args) => {
                assert_eq!(scan_args.format, OutputFormatArg::Human);
                assert!(scan_args.path.is_none());
                assert!(!scan_args.no_versions);
                assert!(scan_args.max_depth.is_none());
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn test_sbom_defaults() {
        let args = CliArgs::parse_from(["envscan", "sbom", "/tmp/repo"]);
        match args.command {
            Commands::Sbom(sbom_args) => {
                assert_eq!(sbom_args.path, Some(PathBuf::from("/tmp/repo")));
                assert_eq!(sbom_args.output_dir, PathBuf::from("generated-sboms"));
                assert!(!sbom_args.dry_run);
            }
            _ => panic!("Expected Sbom command"),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(CliArgs::try_parse_from(["envscan", "-q", "-v", "scan"]).is_err());
    }
}
