//! Duplicate elimination.

use crate::expression::UnaryOperator;
use crate::relation::{Element, Relation};
use std::collections::HashSet;

impl Relation {
    /// Drop repeated elements, keeping each first occurrence in its original position
    pub fn eliminate(&self) -> Relation {
        let mut seen: HashSet<&Element> = HashSet::with_capacity(self.len());
        let elements = self
            .elements()
            .iter()
            .filter(|element| seen.insert(*element))
            .cloned()
            .collect();
        Relation::from_parts(self.attributes().to_vec(), elements)
    }
}

/// The elimination operator `elim`
pub fn eliminate() -> UnaryOperator<Relation, Relation> {
    UnaryOperator::from_fn("elim", Relation::eliminate)
}
