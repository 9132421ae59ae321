//! Comparison operators over any ordered operand.

use crate::expression::{BinaryOperator, Operand};

pub fn equals<V: Operand + PartialEq>() -> BinaryOperator<V, V, bool> {
    BinaryOperator::from_fn("=", |a: &V, b: &V| a == b)
}

pub fn not_equals<V: Operand + PartialEq>() -> BinaryOperator<V, V, bool> {
    BinaryOperator::from_fn("\u{2260}", |a: &V, b: &V| a != b)
}

pub fn less_than<V: Operand + PartialOrd>() -> BinaryOperator<V, V, bool> {
    BinaryOperator::from_fn("<", |a: &V, b: &V| a < b)
}

pub fn greater_than<V: Operand + PartialOrd>() -> BinaryOperator<V, V, bool> {
    BinaryOperator::from_fn(">", |a: &V, b: &V| a > b)
}

pub fn less_than_or_equal_to<V: Operand + PartialOrd>() -> BinaryOperator<V, V, bool> {
    BinaryOperator::from_fn("\u{2264}", |a: &V, b: &V| a <= b)
}

pub fn greater_than_or_equal_to<V: Operand + PartialOrd>() -> BinaryOperator<V, V, bool> {
    BinaryOperator::from_fn("\u{2265}", |a: &V, b: &V| a >= b)
}

pub use self::equals as eq;
pub use self::greater_than as gt;
pub use self::greater_than_or_equal_to as ge;
pub use self::less_than as lt;
pub use self::less_than_or_equal_to as le;
pub use self::not_equals as ne;
