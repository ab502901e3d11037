//! Error types for condition building

use thiserror::Error;

/// Errors that can occur while building SQL fragments
#[derive(Debug, Error)]
pub enum ConditionError {
    #[error("Invalid column name: {0}")]
    InvalidColumn(String),

    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    #[error("Invalid operand for column {column}: {reason}")]
    InvalidOperand { column: String, reason: String },

    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConditionError {
    pub fn invalid_column(column: impl Into<String>) -> Self {
        Self::InvalidColumn(column.into())
    }

    pub fn unsupported_operator(operator: impl Into<String>) -> Self {
        Self::UnsupportedOperator(operator.into())
    }

    pub fn invalid_operand(column: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOperand {
            column: column.into(),
            reason: reason.into(),
        }
    }

    pub fn unsupported_value(msg: impl Into<String>) -> Self {
        Self::UnsupportedValue(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ConditionError>;
