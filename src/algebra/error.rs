//! Relational algebra error types.

use crate::relation::Attribute;
use thiserror::Error;

/// Errors raised by relation construction and the algebra operators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    #[error("relations have different arities ({left} versus {right})")]
    ArityMismatch { left: usize, right: usize },

    #[error("incompatible types{}: {left} versus {right}", at_column(.column))]
    TypeIncompatible {
        /// 1-based column, when the clash is between two aligned columns
        column: Option<usize>,
        left: Attribute,
        right: Attribute,
    },

    #[error("index {reference} out of bounds (max {max})")]
    IndexOutOfBounds { reference: String, max: usize },

    #[error("invalid reference {reference}: {reason}")]
    InvalidReference { reference: String, reason: String },

    #[error("malformed relation: {reason}")]
    MalformedRelation { reason: String },

    #[error("comparison {condition} failed: {reason}")]
    ComparisonFailed { condition: String, reason: String },

    #[error("condition #{position} ({condition}): {source}")]
    Condition {
        /// 1-based position in the condition list
        position: usize,
        condition: String,
        source: Box<AlgebraError>,
    },
}

impl AlgebraError {
    /// The innermost error, skipping condition context
    pub fn root_cause(&self) -> &AlgebraError {
        match self {
            AlgebraError::Condition { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

fn at_column(column: &Option<usize>) -> String {
    match column {
        Some(column) => format!(" at index {}", column),
        None => String::new(),
    }
}

/// Result type for algebra operations.
pub type AlgebraResult<T> = Result<T, AlgebraError>;
