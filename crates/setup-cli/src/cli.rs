//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// setup-php - Generate PHP extension and coverage setup scripts
#[derive(Parser, Debug)]
#[command(name = "setup-php")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a setup.toml with script paths and extension overrides
    #[arg(short, long, global = true, env = "SETUP_PHP_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Runtime and platform the script targets.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TargetArgs {
    /// PHP version, e.g. 7.4
    #[arg(long = "php", value_name = "VERSION")]
    pub php: String,

    /// Target platform (linux, darwin or win32); defaults to the host
    #[arg(long = "os", value_name = "PLATFORM")]
    pub os: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Emit the commands installing a list of extensions
    ///
    /// Examples:
    ///   setup-php extensions --php 7.4 --os linux "xdebug, pcov, ast-beta"
    ///   setup-php extensions --php 5.6 --os win32 mysql
    Extensions {
        #[command(flatten)]
        target: TargetArgs,

        /// Comma-separated extension names
        list: String,
    },

    /// Emit the commands selecting a coverage driver
    Coverage {
        #[command(flatten)]
        target: TargetArgs,

        /// xdebug, pcov or none
        driver: String,
    },

    /// Emit extensions followed by coverage setup
    Script {
        #[command(flatten)]
        target: TargetArgs,

        /// Comma-separated extension names
        #[arg(short, long)]
        extensions: Option<String>,

        /// xdebug, pcov or none
        #[arg(long)]
        coverage: Option<String>,
    },

    /// List extensions with a dedicated install policy
    ListExtensions {
        /// Only show one platform
        #[arg(long = "os", value_name = "PLATFORM")]
        os: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_extensions_command() {
        let cli = Cli::parse_from([
            "setup-php",
            "extensions",
            "--php",
            "7.4",
            "--os",
            "linux",
            "xdebug, pcov",
        ]);
        assert!(!cli.verbose);
        assert_eq!(
            cli.command,
            Commands::Extensions {
                target: TargetArgs {
                    php: "7.4".to_string(),
                    os: Some("linux".to_string()),
                },
                list: "xdebug, pcov".to_string(),
            }
        );
    }

    #[test]
    fn parse_script_with_global_flags() {
        let cli = Cli::parse_from([
            "setup-php",
            "script",
            "--php",
            "8.0",
            "-e",
            "redis",
            "--coverage",
            "pcov",
            "--verbose",
            "--config",
            "ci/setup.toml",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("ci/setup.toml")));
        match cli.command {
            Commands::Script {
                target,
                extensions,
                coverage,
            } => {
                assert_eq!(target.php, "8.0");
                assert_eq!(target.os, None);
                assert_eq!(extensions.as_deref(), Some("redis"));
                assert_eq!(coverage.as_deref(), Some("pcov"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn php_version_is_required() {
        assert!(Cli::try_parse_from(["setup-php", "coverage", "pcov"]).is_err());
    }
}
