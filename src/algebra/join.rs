//! Theta join: the product of two relations filtered by conditions.
//!
//! Conditions refer to the left relation with negative column references and
//! to the right relation with positive ones. Like selection, equality
//! conditions first narrow the attributes of the columns they compare.

use crate::algebra::condition::{condition_list, Condition};
use crate::algebra::narrowing::narrow;
use crate::algebra::AlgebraResult;
use crate::expression::BinaryOperator;
use crate::relation::{Element, Relation};
use log::debug;

impl Relation {
    /// Join `self` (left) with `right` on `conditions`.
    ///
    /// The full product is formed before filtering. The output attributes are
    /// the narrowed left attributes followed by the narrowed right ones.
    pub fn join(&self, right: &Relation, conditions: &[Condition]) -> AlgebraResult<Relation> {
        let narrowed = narrow(conditions, Some(self.clone()), right.clone())?;

        let pairs: Vec<(&Element, &Element)> = self
            .elements()
            .iter()
            .flat_map(|l| right.elements().iter().map(move |r| (l, r)))
            .collect();
        let candidates = pairs.len();

        let mut elements: Vec<Element> = Vec::new();
        for (l, r) in pairs {
            if narrowed.accepts(l.values(), r.values())? {
                elements.push(l.concat(r));
            }
        }

        debug!("join kept {} of {} element pairs", elements.len(), candidates);

        let left_attributes = match &narrowed.left {
            Some(left) => left.attributes(),
            None => self.attributes(),
        };
        let attributes = left_attributes
            .iter()
            .chain(narrowed.right.attributes())
            .cloned()
            .collect();

        Ok(Relation::from_parts(attributes, elements))
    }
}

/// The join operator `× σ[conditions]`
pub fn join(
    conditions: impl IntoIterator<Item = Condition>,
) -> BinaryOperator<Relation, Relation, Relation> {
    let conditions: Vec<Condition> = conditions.into_iter().collect();
    let name = format!("\u{00d7} \u{03c3}[{}]", condition_list(&conditions));
    BinaryOperator::new(name, move |left: &Relation, right: &Relation| {
        left.join(right, &conditions)
    })
}
