//! Selection: keep the elements of one relation that satisfy every condition.

use crate::algebra::condition::{condition_list, Condition};
use crate::algebra::narrowing::narrow;
use crate::algebra::AlgebraResult;
use crate::expression::UnaryOperator;
use crate::relation::Relation;
use log::debug;

impl Relation {
    /// Narrow attributes through the equality conditions, then filter.
    ///
    /// Every column reference must be positive. The result carries the
    /// narrowed attributes.
    pub fn select(&self, conditions: &[Condition]) -> AlgebraResult<Relation> {
        let narrowed = narrow(conditions, None, self.clone())?;
        let output = narrowed
            .right
            .try_filter_elements(|element| narrowed.accepts(&[], element.values()))?;

        debug!("selection kept {} of {} elements", output.len(), self.len());
        Ok(output)
    }
}

/// The selection operator `σ[conditions]`
pub fn select(
    conditions: impl IntoIterator<Item = Condition>,
) -> UnaryOperator<Relation, Relation> {
    let conditions: Vec<Condition> = conditions.into_iter().collect();
    let name = format!("\u{03c3}[{}]", condition_list(&conditions));
    UnaryOperator::new(name, move |relation: &Relation| relation.select(&conditions))
}
