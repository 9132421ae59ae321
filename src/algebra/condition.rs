//! Selection and join conditions, and their resolution against relations.
//!
//! A condition compares two arguments. Each argument is either a signed
//! column reference or a literal:
//!
//! - `+k` is column `k` of the right relation (the only relation in a selection)
//! - `-k` is column `k` of the left relation (joins only)
//! - `0` never names a column

use crate::algebra::{AlgebraError, AlgebraResult};
use crate::expression::{compare, BinaryOperator};
use crate::relation::{Attribute, ConstantRelation, Relation, Value};
use std::fmt;

/// Comparison performed by a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl Comparison {
    /// The registered expression operator that decides this comparison
    pub fn operator(&self) -> BinaryOperator<Value, Value, bool> {
        match self {
            Comparison::Eq => compare::equals(),
            Comparison::Ne => compare::not_equals(),
            Comparison::Lt => compare::less_than(),
            Comparison::Gt => compare::greater_than(),
            Comparison::Le => compare::less_than_or_equal_to(),
            Comparison::Ge => compare::greater_than_or_equal_to(),
        }
    }

    /// Get the display string for this comparison
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::Ne => "\u{2260}",
            Comparison::Lt => "<",
            Comparison::Gt => ">",
            Comparison::Le => "\u{2264}",
            Comparison::Ge => "\u{2265}",
        }
    }

    /// Only equality narrows attributes
    pub fn narrows(&self) -> bool {
        matches!(self, Comparison::Eq)
    }
}

/// One side of a condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Column(i64),
    Literal(ConstantRelation),
}

impl Argument {
    pub fn is_column(&self) -> bool {
        matches!(self, Argument::Column(_))
    }
}

impl From<i64> for Argument {
    fn from(reference: i64) -> Self {
        Argument::Column(reference)
    }
}

impl From<i32> for Argument {
    fn from(reference: i32) -> Self {
        Argument::Column(reference as i64)
    }
}

impl From<ConstantRelation> for Argument {
    fn from(literal: ConstantRelation) -> Self {
        Argument::Literal(literal)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Column(k) if *k < 0 => write!(f, "#{}\u{2113}", k.unsigned_abs()),
            Argument::Column(k) => write!(f, "#{}", k),
            Argument::Literal(literal) => write!(f, "{}", literal),
        }
    }
}

/// A comparison between two arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub comparison: Comparison,
    pub left: Argument,
    pub right: Argument,
}

impl Condition {
    pub fn new(
        comparison: Comparison,
        left: impl Into<Argument>,
        right: impl Into<Argument>,
    ) -> Self {
        Self {
            comparison,
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn eq(left: impl Into<Argument>, right: impl Into<Argument>) -> Self {
        Self::new(Comparison::Eq, left, right)
    }

    pub fn ne(left: impl Into<Argument>, right: impl Into<Argument>) -> Self {
        Self::new(Comparison::Ne, left, right)
    }

    pub fn lt(left: impl Into<Argument>, right: impl Into<Argument>) -> Self {
        Self::new(Comparison::Lt, left, right)
    }

    pub fn gt(left: impl Into<Argument>, right: impl Into<Argument>) -> Self {
        Self::new(Comparison::Gt, left, right)
    }

    pub fn le(left: impl Into<Argument>, right: impl Into<Argument>) -> Self {
        Self::new(Comparison::Le, left, right)
    }

    pub fn ge(left: impl Into<Argument>, right: impl Into<Argument>) -> Self {
        Self::new(Comparison::Ge, left, right)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.left, self.comparison.as_str(), self.right)
    }
}

/// Comma-separated condition names, as used in operator labels
pub(crate) fn condition_list(conditions: &[Condition]) -> String {
    conditions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Which relation a column reference points into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Reads one argument's value from a (left element, right element) pair
#[derive(Debug, Clone, PartialEq)]
pub enum Accessor {
    Column(Side, usize),
    Constant(Value),
}

impl Accessor {
    /// Resolved column positions are always within the element arity
    pub(crate) fn get<'a>(&'a self, left: &'a [Value], right: &'a [Value]) -> &'a Value {
        match self {
            Accessor::Column(Side::Left, index) => &left[*index],
            Accessor::Column(Side::Right, index) => &right[*index],
            Accessor::Constant(value) => value,
        }
    }
}

/// Decode a signed column reference into a side and a 0-based index.
///
/// `left` is `None` for selections, where only positive references are valid.
pub fn resolve_column(
    reference: i64,
    left: Option<&Relation>,
    right: &Relation,
) -> AlgebraResult<(Side, usize)> {
    let name = Argument::Column(reference).to_string();

    if reference == 0 {
        return Err(AlgebraError::InvalidReference {
            reference: name,
            reason: "columns are numbered from 1".to_string(),
        });
    }

    let (side, relation) = if reference < 0 {
        match left {
            Some(left) => (Side::Left, left),
            None => {
                return Err(AlgebraError::InvalidReference {
                    reference: name,
                    reason: "there is no left relation to refer to".to_string(),
                })
            }
        }
    } else {
        (Side::Right, right)
    };

    let column = reference.unsigned_abs() as usize;
    if column > relation.arity() {
        return Err(AlgebraError::IndexOutOfBounds {
            reference: name,
            max: relation.arity(),
        });
    }

    Ok((side, column - 1))
}

/// Resolve an argument into an accessor and the attribute it currently has
pub fn resolve_argument(
    argument: &Argument,
    left: Option<&Relation>,
    right: &Relation,
) -> AlgebraResult<(Accessor, Attribute)> {
    match argument {
        Argument::Literal(literal) => Ok((
            Accessor::Constant(literal.value().clone()),
            literal.attribute().clone(),
        )),
        Argument::Column(reference) => {
            let (side, index) = resolve_column(*reference, left, right)?;
            let relation = match side {
                Side::Left => left.unwrap_or(right),
                Side::Right => right,
            };
            Ok((
                Accessor::Column(side, index),
                relation.attributes()[index].clone(),
            ))
        }
    }
}
