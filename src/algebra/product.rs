//! Cartesian product of two relations.

use crate::expression::BinaryOperator;
use crate::relation::Relation;

impl Relation {
    /// Every left element concatenated with every right element, left columns first
    pub fn product(&self, right: &Relation) -> Relation {
        let attributes = self
            .attributes()
            .iter()
            .chain(right.attributes())
            .cloned()
            .collect();

        let mut elements = Vec::with_capacity(self.len() * right.len());
        for left_element in self.elements() {
            for right_element in right.elements() {
                elements.push(left_element.concat(right_element));
            }
        }

        Relation::from_parts(attributes, elements)
    }
}

/// The product operator `×`
pub fn product() -> BinaryOperator<Relation, Relation, Relation> {
    BinaryOperator::from_fn("\u{00d7}", |left: &Relation, right: &Relation| {
        left.product(right)
    })
}
