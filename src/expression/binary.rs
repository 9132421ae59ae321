//! Infix binary operators, their partially applied forms, and the nodes they build.
//!
//! A binary operator can be applied in three equivalent ways:
//!
//! ```ignore
//! op.apply(left, right)
//! op.right(right).left(left)   // right operand bound first
//! op.left(left).right(right)   // left operand bound first
//! left | op | right            // infix sugar, same as the previous line
//! ```

use crate::expression::node::Memo;
use crate::expression::{
    BoxError, Expr, Expression, ExpressionError, ExpressionResult, Node, Operand,
};
use std::fmt;
use std::ops::BitOr;
use std::sync::Arc;

type BinaryFn<L, R, T> = Arc<dyn Fn(&L, &R) -> Result<T, BoxError> + Send + Sync>;

/// A named two-argument function that builds deferred nodes when applied
pub struct BinaryOperator<L, R, T> {
    name: Arc<str>,
    function: BinaryFn<L, R, T>,
}

impl<L: Operand, R: Operand, T: Operand> BinaryOperator<L, R, T> {
    /// Register a fallible function under a display name
    pub fn new<F, E>(name: impl Into<Arc<str>>, function: F) -> Self
    where
        F: Fn(&L, &R) -> Result<T, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self {
            name: name.into(),
            function: Arc::new(move |left: &L, right: &R| -> Result<T, BoxError> {
                function(left, right).map_err(Into::into)
            }),
        }
    }

    /// Register an infallible function under a display name
    pub fn from_fn<F>(name: impl Into<Arc<str>>, function: F) -> Self
    where
        F: Fn(&L, &R) -> T + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            function: Arc::new(move |left: &L, right: &R| -> Result<T, BoxError> {
                Ok(function(left, right))
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the node `left name right`. Raw values are wrapped as constants.
    pub fn apply(&self, left: impl Into<Expr<L>>, right: impl Into<Expr<R>>) -> Expr<T> {
        Expr::new(BinaryOperation {
            function: Arc::clone(&self.function),
            operator_name: Arc::clone(&self.name),
            left_child: left.into(),
            right_child: right.into(),
            value: Memo::new(),
        })
    }

    /// Bind the left operand, awaiting the right one
    pub fn left(&self, left: impl Into<Expr<L>>) -> LeftBound<L, R, T> {
        LeftBound {
            operator: self.clone(),
            left_child: left.into(),
        }
    }

    /// Bind the right operand, awaiting the left one
    pub fn right(&self, right: impl Into<Expr<R>>) -> RightBound<L, R, T> {
        RightBound {
            operator: self.clone(),
            right_child: right.into(),
        }
    }

    /// Run the function directly, without building a node
    pub fn call(&self, left: &L, right: &R) -> Result<T, BoxError> {
        (self.function)(left, right)
    }
}

impl<L, R, T> fmt::Debug for BinaryOperator<L, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BinaryOperator").field(&self.name).finish()
    }
}

impl<L, R, T> Clone for BinaryOperator<L, R, T> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            function: Arc::clone(&self.function),
        }
    }
}

/// A binary operator with its left operand bound
pub struct LeftBound<L, R, T> {
    operator: BinaryOperator<L, R, T>,
    left_child: Expr<L>,
}

impl<L: Operand, R: Operand, T: Operand> LeftBound<L, R, T> {
    pub fn right(self, right: impl Into<Expr<R>>) -> Expr<T> {
        self.operator.apply(self.left_child, right)
    }
}

/// A binary operator with its right operand bound
pub struct RightBound<L, R, T> {
    operator: BinaryOperator<L, R, T>,
    right_child: Expr<R>,
}

impl<L: Operand, R: Operand, T: Operand> RightBound<L, R, T> {
    pub fn left(self, left: impl Into<Expr<L>>) -> Expr<T> {
        self.operator.apply(left, self.right_child)
    }
}

/// `left | op` binds the left operand
impl<L: Operand, R: Operand, T: Operand> BitOr<BinaryOperator<L, R, T>> for Expr<L> {
    type Output = LeftBound<L, R, T>;

    fn bitor(self, operator: BinaryOperator<L, R, T>) -> LeftBound<L, R, T> {
        operator.left(self)
    }
}

/// `(left | op) | right` completes the node
impl<L, R, T, V> BitOr<V> for LeftBound<L, R, T>
where
    L: Operand,
    R: Operand,
    T: Operand,
    V: Into<Expr<R>>,
{
    type Output = Expr<T>;

    fn bitor(self, right: V) -> Expr<T> {
        self.right(right)
    }
}

/// `op | right` binds the right operand
impl<L, R, T, V> BitOr<V> for BinaryOperator<L, R, T>
where
    L: Operand,
    R: Operand,
    T: Operand,
    V: Into<Expr<R>>,
{
    type Output = RightBound<L, R, T>;

    fn bitor(self, right: V) -> RightBound<L, R, T> {
        self.right(right)
    }
}

/// `left | (op | right)` completes the node
impl<L: Operand, R: Operand, T: Operand> BitOr<RightBound<L, R, T>> for Expr<L> {
    type Output = Expr<T>;

    fn bitor(self, bound: RightBound<L, R, T>) -> Expr<T> {
        bound.left(self)
    }
}

/// A binary operator applied to both operands
pub struct BinaryOperation<L, R, T> {
    function: BinaryFn<L, R, T>,
    operator_name: Arc<str>,
    left_child: Expr<L>,
    right_child: Expr<R>,
    value: Memo<T>,
}

impl<L: Operand, R: Operand, T: Operand> Node for BinaryOperation<L, R, T> {
    fn root_name(&self) -> &str {
        &self.operator_name
    }

    fn full_name(&self) -> String {
        format!(
            "{} {} {}",
            self.left_child.full_name(),
            self.operator_name,
            self.right_child.full_name()
        )
    }

    fn left_children(&self) -> Vec<&dyn Node> {
        vec![self.left_child.as_node()]
    }

    fn right_children(&self) -> Vec<&dyn Node> {
        vec![self.right_child.as_node()]
    }

    fn evaluate_text(&self) -> ExpressionResult<String> {
        self.evaluate().map(|value| format!("{:#}", value))
    }
}

impl<L: Operand, R: Operand, T: Operand> Expression<T> for BinaryOperation<L, R, T> {
    fn evaluate(&self) -> ExpressionResult<T> {
        self.value.get_or_evaluate(|| {
            // Both sides are evaluated before either failure is reported
            let left = self.left_child.evaluate();
            let right = self.right_child.evaluate();
            let (left, right) = (left?, right?);

            log::trace!("evaluating {}", self.full_name());
            (self.function)(&left, &right).map_err(|e| ExpressionError::new(self.full_name(), e))
        })
    }

    fn as_node(&self) -> &dyn Node {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::UnaryOperator;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn plus() -> BinaryOperator<i64, i64, i64> {
        BinaryOperator::from_fn("+", |a: &i64, b: &i64| a + b)
    }

    fn times() -> BinaryOperator<i64, i64, i64> {
        BinaryOperator::from_fn("×", |a: &i64, b: &i64| a * b)
    }

    fn negate() -> UnaryOperator<i64, i64> {
        UnaryOperator::from_fn("-", |a: &i64| -a)
    }

    #[test]
    fn test_infix_shape() {
        let expr = plus().apply(1i64, 2i64);
        let node = expr.as_node();

        assert_eq!(node.root_name(), "+");
        assert_eq!(node.full_name(), "1 + 2");
        assert_eq!(node.left_children().len(), 1);
        assert_eq!(node.right_children().len(), 1);
        assert_eq!(node.children().len(), 2);
        assert!(node.is_infix());
        assert_eq!(node.left_children()[0].root_name(), "1");
        assert_eq!(node.right_children()[0].root_name(), "2");
    }

    #[test]
    fn test_application_shapes_agree() {
        let direct = plus().apply(3i64, 4i64);
        let right_first = plus().right(4i64).left(3i64);
        let left_first = plus().left(3i64).right(4i64);
        let infix = Expr::from(3i64) | plus() | 4i64;
        let infix_right_bound = Expr::from(3i64) | (plus() | 4i64);

        for expr in [&right_first, &left_first, &infix, &infix_right_bound] {
            assert_eq!(expr.full_name(), direct.full_name());
            assert_eq!(expr.root_name(), direct.root_name());
            assert_eq!(expr.evaluate().ok(), direct.evaluate().ok());
        }
    }

    #[test]
    fn test_chained_infix_is_left_associative() {
        // (1 + -2) × 3
        let expr = Expr::from(1i64) | plus() | negate().apply(2i64) | times() | 3i64;
        assert_eq!(expr.full_name(), "1 + - 2 × 3");
        assert_eq!(expr.evaluate().ok(), Some(-3));

        let node = expr.as_node();
        assert_eq!(node.root_name(), "×");
        assert_eq!(node.left_children()[0].root_name(), "+");
    }

    #[test]
    fn test_operator_reuse() {
        let add_ten = plus().right(10i64);
        let op = plus();
        let a = op.apply(1i64, 2i64);
        let b = op.apply(a, 3i64);
        assert_eq!(b.evaluate().ok(), Some(6));
        assert_eq!(add_ten.left(b).evaluate().ok(), Some(16));
    }

    #[test]
    fn test_children_evaluated_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counted = BinaryOperator::from_fn("+", move |a: &i64, b: &i64| {
            counter.fetch_add(1, Ordering::SeqCst);
            a + b
        });

        let inner = counted.apply(1i64, 1i64);
        let outer = counted.apply(inner, 1i64);
        assert_eq!(outer.evaluate().ok(), Some(3));
        assert_eq!(outer.evaluate().ok(), Some(3));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_both_children_evaluated_before_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counted = UnaryOperator::from_fn("id", move |a: &i64| {
            counter.fetch_add(1, Ordering::SeqCst);
            *a
        });
        let failing = UnaryOperator::new("fail", |_: &i64| -> Result<i64, String> {
            Err("always fails".to_string())
        });

        let expr = plus().apply(failing.apply(0i64), counted.apply(5i64));
        let err = expr.evaluate().unwrap_err();

        assert_eq!(err.node(), "fail 0");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_names_node() {
        let divide = BinaryOperator::new("/", |a: &i64, b: &i64| {
            a.checked_div(*b).ok_or("division by zero")
        });
        let expr = divide.apply(plus().apply(1i64, 1i64), 0i64);
        let err = expr.evaluate().unwrap_err();
        assert_eq!(err.to_string(), "1 + 1 / 0: division by zero");
        assert!(expr.as_node().evaluate_text().is_err());
    }

    #[test]
    fn test_call_directly() {
        assert_eq!(times().call(&6, &7).ok(), Some(42));
        assert_eq!(times().name(), "×");
    }
}
