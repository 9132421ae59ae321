//! Lazy expression-tree framework.
//!
//! This module provides:
//! - Expression nodes: constants, prefix unary and infix binary operations
//! - Memoized, depth-first evaluation of a node from its children
//! - Structural introspection (labels, display names, ordered children)
//! - Operator builders supporting prefix calls and `left | op | right` infix sugar
//! - Generic comparison operators

pub mod binary;
pub mod compare;
pub mod constant;
pub mod error;
pub mod node;
pub mod unary;

pub use binary::{BinaryOperation, BinaryOperator, LeftBound, RightBound};
pub use constant::Constant;
pub use error::{BoxError, ExpressionError, ExpressionResult};
pub use node::{Expr, Expression, Node};
pub use unary::{UnaryOperation, UnaryOperator};

use std::fmt;

/// Anything that can flow through an expression tree.
///
/// The alternate form (`{:#}`) is used when a node's value is rendered for
/// display next to its label.
pub trait Operand: Clone + fmt::Display + Send + Sync + 'static {}

impl<T> Operand for T where T: Clone + fmt::Display + Send + Sync + 'static {}
