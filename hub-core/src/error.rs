//! Structured errors for tool consumers
//!
//! Errors never crash the server. They are values carried back to the caller
//! with a machine-readable code and, where possible, a hint for fixing them.

use crate::NumberError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const INVALID_FACTOR: &str = "INVALID_FACTOR";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNIT_NOT_FOUND: &str = "UNIT_NOT_FOUND";
    pub const AMBIGUOUS_UNIT: &str = "AMBIGUOUS_UNIT";
    pub const NON_FINITE: &str = "NON_FINITE";
    pub const TOO_MANY_ENTRIES: &str = "TOO_MANY_ENTRIES";
    pub const ARG_MISSING: &str = "ARG_MISSING";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const UNKNOWN_TOOL: &str = "UNKNOWN_TOOL";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Request completed with a degraded result
    Warning,
    /// Request failed
    Error,
    /// Server state is unusable
    Fatal,
}

/// Structured error returned across the tool boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Severity level
    pub severity: Severity,
}

impl HubError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
            .with_suggestion("Enter a plain number such as 12.5 or 1e3")
    }

    pub fn invalid_factor(unit: &str, factor: f64) -> Self {
        Self::new(
            codes::INVALID_FACTOR,
            format!("Unit '{}' has invalid factor {}", unit, factor),
        )
        .with_suggestion("Factors must be positive finite numbers")
    }

    pub fn unknown_category(category: &str) -> Self {
        Self::new(codes::UNKNOWN_CATEGORY, format!("Unknown category: {}", category))
            .with_suggestion("Use list_categories to see available categories")
    }

    pub fn unit_not_found(category: &str, unit: &str) -> Self {
        Self::new(
            codes::UNIT_NOT_FOUND,
            format!("Unit '{}' not found in category '{}'", unit, category),
        )
        .with_suggestion(format!("Use list_categories(\"{}\") to see its units", category))
    }

    pub fn ambiguous_unit(unit: &str, categories: &[String]) -> Self {
        Self::new(
            codes::AMBIGUOUS_UNIT,
            format!("Unit '{}' exists in several categories: {}", unit, categories.join(", ")),
        )
        .with_suggestion("Pass the category explicitly")
    }

    pub fn non_finite(details: impl Into<String>) -> Self {
        Self::new(codes::NON_FINITE, format!("Non-finite value: {}", details.into()))
    }

    pub fn too_many_entries(requested: usize, max: usize) -> Self {
        Self::new(
            codes::TOO_MANY_ENTRIES,
            format!("Batch of {} entries exceeds the limit of {}", requested, max),
        )
        .with_suggestion("Use a larger step or a narrower range")
    }

    pub fn arg_missing(tool: &str, arg: &str) -> Self {
        Self::new(
            codes::ARG_MISSING,
            format!("{}() is missing required argument '{}'", tool, arg),
        )
        .with_suggestion(format!("Use tools/list to see the schema of '{}'", tool))
    }

    pub fn arg_type(tool: &str, arg: &str, expected: &str) -> Self {
        Self::new(
            codes::ARG_TYPE,
            format!("{}() argument '{}': expected {}", tool, arg, expected),
        )
    }

    pub fn unknown_tool(name: &str) -> Self {
        Self::new(codes::UNKNOWN_TOOL, format!("Unknown tool: {}", name))
            .with_suggestion("Use tools/list to see available tools")
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for HubError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for HubError {}

impl From<NumberError> for HubError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::ParseError(s) => Self::parse_error(format!("{:?} is not a number", s)),
            NumberError::NonFinite(v) => Self::non_finite(v.to_string()),
        }
    }
}
