//! Tagged failure type shared by every pipeline stage
//!
//! Failures come in two kinds. `Validation` failures are caused by malformed or
//! conflicting user input and get a usage hint when reported; `Operational`
//! failures come from provisioning, templating, or platform steps.

use std::fmt;
use thiserror::Error;

/// Which class of failure ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    Operational,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Validation => write!(f, "validation"),
            FailureKind::Operational => write!(f, "operational"),
        }
    }
}

/// A fatal scaffolding failure
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ScaffoldError {
    pub kind: FailureKind,
    pub message: String,
}

impl ScaffoldError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Validation,
            message: message.into(),
        }
    }

    pub fn operational(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Operational,
            message: message.into(),
        }
    }

    /// Whether the usage hint should be printed alongside this failure
    pub fn is_validation(&self) -> bool {
        self.kind == FailureKind::Validation
    }
}

impl From<anyhow::Error> for ScaffoldError {
    fn from(err: anyhow::Error) -> Self {
        // Keep the whole context chain ("Failed to copy ...: No such file")
        Self::operational(format!("{:#}", err))
    }
}

impl From<std::io::Error> for ScaffoldError {
    fn from(err: std::io::Error) -> Self {
        Self::operational(err.to_string())
    }
}

pub type ScaffoldResult<T> = std::result::Result<T, ScaffoldError>;
