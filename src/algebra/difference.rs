//! Bag difference of two relations.

use crate::algebra::{AlgebraError, AlgebraResult};
use crate::expression::BinaryOperator;
use crate::relation::{Element, Relation};
use std::collections::HashSet;

impl Relation {
    /// Elements of `self` that have no exact match in `right`.
    ///
    /// Both relations must have the same arity and every pair of aligned
    /// attributes must share at least one type. The output keeps the left
    /// attributes.
    pub fn difference(&self, right: &Relation) -> AlgebraResult<Relation> {
        if self.arity() != right.arity() {
            return Err(AlgebraError::ArityMismatch {
                left: self.arity(),
                right: right.arity(),
            });
        }

        for (i, (l, r)) in self.attributes().iter().zip(right.attributes()).enumerate() {
            if l.intersection(r).is_none() {
                return Err(AlgebraError::TypeIncompatible {
                    column: Some(i + 1),
                    left: l.clone(),
                    right: r.clone(),
                });
            }
        }

        let exclude: HashSet<&Element> = right.elements().iter().collect();
        Ok(self.filter_elements(|element| !exclude.contains(element)))
    }
}

/// The difference operator `−`
pub fn difference() -> BinaryOperator<Relation, Relation, Relation> {
    BinaryOperator::new("\u{2212}", |left: &Relation, right: &Relation| {
        left.difference(right)
    })
}
