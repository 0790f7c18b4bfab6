mod check;
mod completions;
mod generate;

use std::{
    io,
    path::{Path, PathBuf},
};

use check::CheckCommand;
use clap::{Args, Parser, Subcommand, ValueEnum};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use makeset_codegen_rust::GenerateError;
use makeset_config::{ElementSpec, Error as ConfigError, Format, parse_spec};

/// Extension trait for exiting on phase errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for std::result::Result<T, GenerateError> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "makeset")]
#[command(version)]
#[command(about = "Generate set types specialized to one element type")]
pub(crate) struct Cli {
    /// Log phase boundaries and written files to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the set module (and its tests) from a configuration
    Generate(GenerateCommand),

    /// Validate and lint a configuration without generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Configuration format named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Toml,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Format::Json,
            FormatArg::Toml => Format::Toml,
        }
    }
}

/// Where to read the configuration from, shared by every subcommand that reads one.
#[derive(Args)]
pub struct ConfigSource {
    /// Path to the configuration file, or `-` for standard input
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Configuration format (defaults to the file extension, or JSON on stdin)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

impl ConfigSource {
    /// The configuration file, or `None` for standard input.
    pub fn path(&self) -> Option<&Path> {
        self.config.as_deref().filter(|p| *p != Path::new("-"))
    }

    /// Name used in reports.
    pub fn display_name(&self) -> String {
        self.path()
            .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string())
    }

    /// Read, parse and validate the configuration.
    pub fn load(&self) -> std::result::Result<ElementSpec, GenerateError> {
        let Some(path) = self.path() else {
            let format = self.format.map(Format::from).unwrap_or_default();
            return Ok(ElementSpec::from_reader(io::stdin().lock(), format)?);
        };
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        let format = self
            .format
            .map_or_else(|| Format::from_path(path), Format::from);
        tracing::debug!(path = %path.display(), ?format, "read configuration");
        Ok(parse_spec(&content, format, &path.display().to_string())?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::CommandFactory;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_dash_means_stdin() {
        let source = ConfigSource {
            config: Some(PathBuf::from("-")),
            format: None,
        };
        assert!(source.path().is_none());
        assert_eq!(source.display_name(), "<stdin>");
    }

    #[test]
    fn test_format_flag_overrides_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("intset.json");
        fs::write(&path, "package = \"intset\"\ntype = \"i64\"\nzero = \"0\"\n").unwrap();

        let source = ConfigSource {
            config: Some(path.clone()),
            format: Some(FormatArg::Toml),
        };
        assert_eq!(source.load().unwrap().package_name(), "intset");

        let source = ConfigSource {
            config: Some(path),
            format: None,
        };
        assert_eq!(source.load().unwrap_err().phase(), "configuration");
    }

    #[test]
    fn test_missing_file_is_a_configuration_error() {
        let temp = TempDir::new().unwrap();
        let source = ConfigSource {
            config: Some(temp.path().join("absent.toml")),
            format: None,
        };
        let err = source.load().unwrap_err();
        assert!(err.to_string().starts_with("configuration: failed to read"), "{err}");
    }
}
