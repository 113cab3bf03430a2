//! Error types for scenario validation and projection I/O

use thiserror::Error;

/// Errors raised while validating scenarios or reading/writing projection data
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// A scenario parameter is outside its valid domain
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProjectionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field for validation failures
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ProjectionError::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
