//! Node traits, the owning `Expr` handle and the per-node memo cell.

use crate::expression::{Constant, ExpressionResult, Operand};
use parking_lot::RwLock;
use std::fmt;

/// Type-erased structural view of an expression node.
///
/// A node with only right children has prefix shape, a node with children on
/// both sides has infix shape, and a node without children is a leaf.
pub trait Node: Send + Sync {
    /// Label of this node alone (operator or constant name)
    fn root_name(&self) -> &str;

    /// Display name of the whole subtree
    fn full_name(&self) -> String;

    fn left_children(&self) -> Vec<&dyn Node> {
        Vec::new()
    }

    fn right_children(&self) -> Vec<&dyn Node> {
        Vec::new()
    }

    /// Left children followed by right children
    fn children(&self) -> Vec<&dyn Node> {
        let mut children = self.left_children();
        children.extend(self.right_children());
        children
    }

    fn has_children(&self) -> bool {
        !self.left_children().is_empty() || !self.right_children().is_empty()
    }

    fn is_infix(&self) -> bool {
        !self.left_children().is_empty() && !self.right_children().is_empty()
    }

    /// Evaluate this node and render its value in alternate (`{:#}`) form
    fn evaluate_text(&self) -> ExpressionResult<String>;
}

/// A node producing values of type `T`
pub trait Expression<T>: Node {
    /// Evaluate the subtree. Each node computes its value at most once.
    fn evaluate(&self) -> ExpressionResult<T>;

    fn as_node(&self) -> &dyn Node;
}

/// Owning handle to an expression node
pub struct Expr<T> {
    node: Box<dyn Expression<T>>,
}

impl<T: Operand> Expr<T> {
    pub fn new<E>(node: E) -> Self
    where
        E: Expression<T> + 'static,
    {
        Self {
            node: Box::new(node),
        }
    }

    /// Constant leaf labelled with the value's display form
    pub fn constant(value: T) -> Self {
        Self::new(Constant::new(value))
    }

    /// Constant leaf with an explicit label
    pub fn named(value: T, name: impl Into<String>) -> Self {
        Self::new(Constant::named(value, name))
    }

    pub fn evaluate(&self) -> ExpressionResult<T> {
        self.node.evaluate()
    }

    pub fn root_name(&self) -> &str {
        self.node.root_name()
    }

    pub fn full_name(&self) -> String {
        self.node.full_name()
    }

    pub fn as_node(&self) -> &dyn Node {
        self.node.as_node()
    }
}

impl<T: Operand> From<T> for Expr<T> {
    fn from(value: T) -> Self {
        Self::constant(value)
    }
}

impl<T: Operand> fmt::Display for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

impl<T: Operand> fmt::Debug for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Expr").field(&self.full_name()).finish()
    }
}

enum EvalState<T> {
    Unevaluated,
    Evaluated(ExpressionResult<T>),
}

/// Write-once cache of a node's evaluation result.
///
/// The computation runs without holding the lock. If two threads race, the
/// first stored result is kept and returned to both.
pub(crate) struct Memo<T> {
    state: RwLock<EvalState<T>>,
}

impl<T: Clone> Memo<T> {
    pub(crate) fn new() -> Self {
        Self {
            state: RwLock::new(EvalState::Unevaluated),
        }
    }

    pub(crate) fn get_or_evaluate<F>(&self, evaluate: F) -> ExpressionResult<T>
    where
        F: FnOnce() -> ExpressionResult<T>,
    {
        {
            let state = self.state.read();
            if let EvalState::Evaluated(result) = &*state {
                return result.clone();
            }
        }

        let result = evaluate();

        let mut state = self.state.write();
        match &*state {
            EvalState::Evaluated(existing) => existing.clone(),
            EvalState::Unevaluated => {
                *state = EvalState::Evaluated(result.clone());
                result
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn is_evaluated(&self) -> bool {
        matches!(&*self.state.read(), EvalState::Evaluated(_))
    }
}
