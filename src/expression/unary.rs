//! Prefix unary operators and the nodes they build.

use crate::expression::node::Memo;
use crate::expression::{
    BoxError, Expr, Expression, ExpressionError, ExpressionResult, Node, Operand,
};
use std::fmt;
use std::ops::BitOr;
use std::sync::Arc;

type UnaryFn<R, T> = Arc<dyn Fn(&R) -> Result<T, BoxError> + Send + Sync>;

/// A named one-argument function that builds deferred nodes when applied
pub struct UnaryOperator<R, T> {
    name: Arc<str>,
    function: UnaryFn<R, T>,
}

impl<R: Operand, T: Operand> UnaryOperator<R, T> {
    /// Register a fallible function under a display name
    pub fn new<F, E>(name: impl Into<Arc<str>>, function: F) -> Self
    where
        F: Fn(&R) -> Result<T, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self {
            name: name.into(),
            function: Arc::new(move |operand: &R| -> Result<T, BoxError> {
                function(operand).map_err(Into::into)
            }),
        }
    }

    /// Register an infallible function under a display name
    pub fn from_fn<F>(name: impl Into<Arc<str>>, function: F) -> Self
    where
        F: Fn(&R) -> T + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            function: Arc::new(move |operand: &R| -> Result<T, BoxError> {
                Ok(function(operand))
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the node `name operand`. Raw values are wrapped as constants.
    pub fn apply(&self, operand: impl Into<Expr<R>>) -> Expr<T> {
        Expr::new(UnaryOperation {
            function: Arc::clone(&self.function),
            operator_name: Arc::clone(&self.name),
            right_child: operand.into(),
            value: Memo::new(),
        })
    }

    /// Run the function directly, without building a node
    pub fn call(&self, operand: &R) -> Result<T, BoxError> {
        (self.function)(operand)
    }
}

impl<R, T> fmt::Debug for UnaryOperator<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UnaryOperator").field(&self.name).finish()
    }
}

impl<R, T> Clone for UnaryOperator<R, T> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            function: Arc::clone(&self.function),
        }
    }
}

/// `op | operand` is the same as `op.apply(operand)`
impl<R, T, V> BitOr<V> for UnaryOperator<R, T>
where
    R: Operand,
    T: Operand,
    V: Into<Expr<R>>,
{
    type Output = Expr<T>;

    fn bitor(self, operand: V) -> Expr<T> {
        self.apply(operand)
    }
}

/// A unary operator applied to one operand
pub struct UnaryOperation<R, T> {
    function: UnaryFn<R, T>,
    operator_name: Arc<str>,
    right_child: Expr<R>,
    value: Memo<T>,
}

impl<R: Operand, T: Operand> Node for UnaryOperation<R, T> {
    fn root_name(&self) -> &str {
        &self.operator_name
    }

    fn full_name(&self) -> String {
        format!("{} {}", self.operator_name, self.right_child.full_name())
    }

    fn right_children(&self) -> Vec<&dyn Node> {
        vec![self.right_child.as_node()]
    }

    fn evaluate_text(&self) -> ExpressionResult<String> {
        self.evaluate().map(|value| format!("{:#}", value))
    }
}

impl<R: Operand, T: Operand> Expression<T> for UnaryOperation<R, T> {
    fn evaluate(&self) -> ExpressionResult<T> {
        self.value.get_or_evaluate(|| {
            let operand = self.right_child.evaluate()?;
            log::trace!("evaluating {}", self.full_name());
            (self.function)(&operand).map_err(|e| ExpressionError::new(self.full_name(), e))
        })
    }

    fn as_node(&self) -> &dyn Node {
        self
    }
}
