//! Bag union of two relations of equal arity.

use crate::algebra::{AlgebraError, AlgebraResult};
use crate::expression::BinaryOperator;
use crate::relation::Relation;

impl Relation {
    /// Concatenate the elements of both relations, keeping duplicates.
    ///
    /// Each output attribute is the union of the aligned input attributes.
    pub fn union(&self, right: &Relation) -> AlgebraResult<Relation> {
        if self.arity() != right.arity() {
            return Err(AlgebraError::ArityMismatch {
                left: self.arity(),
                right: right.arity(),
            });
        }

        let attributes = self
            .attributes()
            .iter()
            .zip(right.attributes())
            .map(|(l, r)| l.union(r))
            .collect();
        let elements = self
            .elements()
            .iter()
            .chain(right.elements())
            .cloned()
            .collect();

        Ok(Relation::from_parts(attributes, elements))
    }
}

/// The union operator `∪`
pub fn union() -> BinaryOperator<Relation, Relation, Relation> {
    BinaryOperator::new("\u{222a}", |left: &Relation, right: &Relation| {
        left.union(right)
    })
}
