//! Fixed-point attribute narrowing shared by selection and join.
//!
//! An equality condition `A = B` means surviving values of both columns lie
//! in the intersection of their attributes, so each column referenced by such
//! a condition is narrowed to that intersection. Narrowing one column can
//! enable further narrowing through another condition (`A = B`, `B = C`), so
//! passes over all conditions repeat until one pass changes nothing.
//! Every narrowing strictly shrinks a finite tag set, so the loop terminates.

use crate::algebra::condition::{resolve_argument, Accessor, Condition, Side};
use crate::algebra::{AlgebraError, AlgebraResult};
use crate::expression::BinaryOperator;
use crate::relation::{Attribute, Relation, Value};
use log::debug;

/// A condition whose arguments have been resolved to accessors
#[derive(Debug, Clone)]
pub(crate) struct ResolvedCondition {
    name: String,
    operator: BinaryOperator<Value, Value, bool>,
    left: Accessor,
    right: Accessor,
}

impl ResolvedCondition {
    fn new(condition: &Condition, left: Accessor, right: Accessor) -> Self {
        Self {
            name: condition.to_string(),
            operator: condition.comparison.operator(),
            left,
            right,
        }
    }

    pub(crate) fn holds(&self, left: &[Value], right: &[Value]) -> AlgebraResult<bool> {
        self.operator
            .call(self.left.get(left, right), self.right.get(left, right))
            .map_err(|e| AlgebraError::ComparisonFailed {
                condition: self.name.clone(),
                reason: e.to_string(),
            })
    }
}

/// Relations after narrowing, with the conditions resolved against them
#[derive(Debug)]
pub(crate) struct Narrowed {
    pub(crate) left: Option<Relation>,
    pub(crate) right: Relation,
    pub(crate) conditions: Vec<ResolvedCondition>,
    pub(crate) passes: usize,
}

impl Narrowed {
    /// True if an element (pair) satisfies every condition
    pub(crate) fn accepts(&self, left: &[Value], right: &[Value]) -> AlgebraResult<bool> {
        for condition in &self.conditions {
            if !condition.holds(left, right)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn relation_mut(&mut self, side: Side) -> &mut Relation {
        match (side, self.left.as_mut()) {
            (Side::Left, Some(left)) => left,
            _ => &mut self.right,
        }
    }

    fn narrow(&mut self, side: Side, index: usize, attribute: Attribute) {
        let relation = self.relation_mut(side);
        *relation = relation.replace_attribute(index, attribute);
    }
}

fn in_condition(position: usize, condition: &Condition, source: AlgebraError) -> AlgebraError {
    AlgebraError::Condition {
        position: position + 1,
        condition: condition.to_string(),
        source: Box::new(source),
    }
}

/// Narrow the attributes of `right` (and `left`, for joins) until no equality
/// condition can narrow any further.
///
/// Fails if a condition compares two literals, refers to a column that does
/// not exist, or equates two columns whose attributes are disjoint.
pub(crate) fn narrow(
    conditions: &[Condition],
    left: Option<Relation>,
    right: Relation,
) -> AlgebraResult<Narrowed> {
    for (k, condition) in conditions.iter().enumerate() {
        if !condition.left.is_column() && !condition.right.is_column() {
            return Err(in_condition(
                k,
                condition,
                AlgebraError::InvalidReference {
                    reference: condition.to_string(),
                    reason: "a condition must refer to at least one column".to_string(),
                },
            ));
        }
    }

    let mut state = Narrowed {
        left,
        right,
        conditions: Vec::with_capacity(conditions.len()),
        passes: 0,
    };

    loop {
        state.passes += 1;
        state.conditions.clear();
        let mut changed = false;

        for (k, condition) in conditions.iter().enumerate() {
            let (lhs, la) = resolve_argument(&condition.left, state.left.as_ref(), &state.right)
                .map_err(|e| in_condition(k, condition, e))?;
            let (rhs, ra) = resolve_argument(&condition.right, state.left.as_ref(), &state.right)
                .map_err(|e| in_condition(k, condition, e))?;

            if condition.comparison.narrows() {
                let narrowed = la.intersection(&ra).ok_or_else(|| {
                    in_condition(
                        k,
                        condition,
                        AlgebraError::TypeIncompatible {
                            column: None,
                            left: la.clone(),
                            right: ra.clone(),
                        },
                    )
                })?;

                for (accessor, attribute) in [(&lhs, &la), (&rhs, &ra)] {
                    if let Accessor::Column(side, index) = accessor {
                        if narrowed.is_narrower_than(attribute) {
                            debug!(
                                "{}: narrowing column {} of {:?} relation from {} to {}",
                                condition,
                                index + 1,
                                side,
                                attribute,
                                narrowed
                            );
                            state.narrow(*side, *index, narrowed.clone());
                            changed = true;
                        }
                    }
                }
            }

            state.conditions.push(ResolvedCondition::new(condition, lhs, rhs));
        }

        if !changed {
            debug!("narrowing converged after {} passes", state.passes);
            return Ok(state);
        }
    }
}
