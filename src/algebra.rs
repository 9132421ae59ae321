//! Relational algebra over in-memory relations.
//!
//! Every operator is available two ways: as a method on [`Relation`] that
//! computes its result immediately, and as an expression operator that builds
//! a deferred, memoized node:
//!
//! ```
//! use relalg::algebra::{join, project, Condition};
//! use relalg::expression::Expr;
//! use relalg::relation::{Attribute, Element, Relation};
//!
//! let ints = vec![Attribute::single("int"); 2];
//! let a = Relation::new(ints.clone(), vec![Element::new([1, 2]), Element::new([3, 4])]).unwrap();
//! let b = Relation::new(ints, vec![Element::new([2, 5])]).unwrap();
//!
//! let joined = Expr::named(a, "A") | join([Condition::eq(-2, 1)]) | Expr::named(b, "B");
//! let expr = project(&[1, 4]).unwrap() | joined;
//! assert_eq!(expr.evaluate().unwrap().elements(), &[Element::new([1, 5])]);
//! ```
//!
//! [`Relation`]: crate::relation::Relation

pub mod condition;
pub mod difference;
pub mod elimination;
pub mod error;
pub mod join;
mod narrowing;
pub mod product;
pub mod projection;
pub mod selection;
pub mod union;

pub use condition::{Argument, Comparison, Condition};
pub use difference::difference;
pub use elimination::eliminate;
pub use error::{AlgebraError, AlgebraResult};
pub use join::join;
pub use product::product;
pub use projection::project;
pub use selection::select;
pub use union::union;

pub use difference::difference as minus;
pub use difference::difference as subtract;
pub use elimination::eliminate as distinct;
pub use elimination::eliminate as elim;
pub use elimination::eliminate as unique;
pub use product::product as prod;
pub use product::product as times;
pub use projection::project as pi;
pub use projection::project as proj;
pub use selection::select as sigma;

use crate::expression::{BinaryOperator, Expr, LeftBound, Operand, RightBound};
use crate::relation::Relation;
use std::ops::BitOr;

/// A deferred relational expression
pub type RelationExpr = Expr<Relation>;

/// `relation | op` binds a raw relation as the left operand
impl<R: Operand, T: Operand> BitOr<BinaryOperator<Relation, R, T>> for Relation {
    type Output = LeftBound<Relation, R, T>;

    fn bitor(self, operator: BinaryOperator<Relation, R, T>) -> LeftBound<Relation, R, T> {
        operator.left(self)
    }
}

/// `relation | (op | right)` completes the node
impl<R: Operand, T: Operand> BitOr<RightBound<Relation, R, T>> for Relation {
    type Output = Expr<T>;

    fn bitor(self, bound: RightBound<Relation, R, T>) -> Expr<T> {
        bound.left(self)
    }
}
