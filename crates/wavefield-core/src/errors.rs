//! Structured error types shared across wavefield crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`WfError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (scenario names, offending values, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the wavefield harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum WfError {
    /// Physical inputs outside the domain of the force model.
    #[error("domain error: {0}")]
    Domain(ErrorInfo),
    /// A computed quantity overflowed or became NaN.
    #[error("non-finite error: {0}")]
    NonFinite(ErrorInfo),
    /// Invalid model configuration, classification or verdict rules.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization, schema and plan loading errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl WfError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            WfError::Domain(info)
            | WfError::NonFinite(info)
            | WfError::Config(info)
            | WfError::Serde(info) => info,
        }
    }

    /// Returns the stable lower-case family label shown for failed scenarios.
    pub fn family(&self) -> &'static str {
        match self {
            WfError::Domain(_) => "domain",
            WfError::NonFinite(_) => "non-finite",
            WfError::Config(_) => "config",
            WfError::Serde(_) => "serde",
        }
    }
}

/// Fails with [`WfError::NonFinite`] unless `value` is finite.
pub fn ensure_finite(quantity: &str, value: f64) -> Result<f64, WfError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WfError::NonFinite(
            ErrorInfo::new("non-finite-quantity", format!("{quantity} is not finite"))
                .with_context("quantity", quantity)
                .with_context("value", value.to_string()),
        ))
    }
}
