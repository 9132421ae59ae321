//! Error types for expression evaluation.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Error type returned by operator functions
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An operator function failed while evaluating a node.
///
/// Carries the full display name of the node that raised it. Errors raised
/// below a node pass through its ancestors unchanged.
#[derive(Debug, Clone)]
pub struct ExpressionError {
    node: String,
    source: Arc<dyn Error + Send + Sync + 'static>,
}

impl ExpressionError {
    pub fn new(node: impl Into<String>, source: BoxError) -> Self {
        Self {
            node: node.into(),
            source: Arc::from(source),
        }
    }

    /// Full display name of the failing node
    pub fn node(&self) -> &str {
        &self.node
    }

    /// The operator's own error, if it is of type `E`
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.source.downcast_ref::<E>()
    }
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.node, self.source)
    }
}

impl Error for ExpressionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}

/// Result type for expression evaluation
pub type ExpressionResult<T> = Result<T, ExpressionError>;
