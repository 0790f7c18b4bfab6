//! Diagnostic messages produced by lints.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A problem that stops generation.
    Error,
    /// Generation proceeds, but the output may not be what was intended.
    Warning,
    /// Informational note about the configuration.
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message about an element specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// The lint that produced this diagnostic.
    pub lint: &'static str,
    pub message: String,
    /// Configuration key the message is about (e.g., "testValues").
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn warning(lint: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            lint,
            message: message.into(),
            location: None,
        }
    }

    pub fn info(lint: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            lint,
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.lint, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {loc})")?;
        }
        Ok(())
    }
}
