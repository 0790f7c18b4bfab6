//! Configuration parsing from files, standard input and strings.

use std::{io::Read, path::Path, str::FromStr};

use crate::{ElementConfig, ElementSpec, Error, Result, error::SourceContext, validate::ParseContext};

/// Serialization format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Toml,
}

impl Format {
    /// Infer the format from a file extension; anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Parse a configuration document without validating it.
pub fn parse_config(content: &str, format: Format, filename: &str) -> Result<ElementConfig> {
    let source_ctx = SourceContext::new(content, filename);
    match format {
        Format::Json => serde_json::from_str(content).map_err(|e| source_ctx.json_error(e)),
        Format::Toml => toml::from_str(content).map_err(|e| source_ctx.toml_error(e)),
    }
}

/// Parse and validate a configuration document.
pub fn parse_spec(content: &str, format: Format, filename: &str) -> Result<ElementSpec> {
    let config = parse_config(content, format, filename)?;
    ParseContext::new(content, filename).validate(&config)
}

impl FromStr for ElementSpec {
    type Err = Box<Error>;

    /// Parse a JSON configuration.
    fn from_str(s: &str) -> Result<Self> {
        parse_spec(s, Format::Json, "config.json")
    }
}

impl ElementSpec {
    /// Read a configuration file, choosing the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        tracing::debug!(path = %path.display(), "read configuration");
        parse_spec(&content, Format::from_path(path), &path.display().to_string())
    }

    /// Read a configuration from a reader such as standard input.
    pub fn from_reader(mut reader: impl Read, format: Format) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content).map_err(|e| {
            Box::new(Error::Io {
                path: "<stdin>".into(),
                source: e,
            })
        })?;
        parse_spec(&content, format, "<stdin>")
    }
}
