//! Projection onto a list of columns.

use crate::algebra::{AlgebraError, AlgebraResult};
use crate::expression::UnaryOperator;
use crate::relation::Relation;
use std::collections::HashSet;

fn check_indices(indices: &[usize]) -> AlgebraResult<()> {
    let mut seen = HashSet::with_capacity(indices.len());
    for &index in indices {
        if index == 0 {
            return Err(AlgebraError::InvalidReference {
                reference: "#0".to_string(),
                reason: "columns are numbered from 1".to_string(),
            });
        }
        if !seen.insert(index) {
            return Err(AlgebraError::InvalidReference {
                reference: format!("#{}", index),
                reason: "column is projected more than once".to_string(),
            });
        }
    }
    Ok(())
}

impl Relation {
    /// Keep the 1-based columns in `indices`, in that order.
    ///
    /// Duplicate elements are kept. An empty index list is rejected, since a
    /// relation needs at least one attribute.
    pub fn project(&self, indices: &[usize]) -> AlgebraResult<Relation> {
        if indices.is_empty() {
            return Err(AlgebraError::MalformedRelation {
                reason: "projection needs at least one column".to_string(),
            });
        }
        check_indices(indices)?;

        if let Some(&index) = indices.iter().find(|&&i| i > self.arity()) {
            return Err(AlgebraError::IndexOutOfBounds {
                reference: format!("#{}", index),
                max: self.arity(),
            });
        }

        let positions: Vec<usize> = indices.iter().map(|i| i - 1).collect();
        let attributes = positions
            .iter()
            .map(|&i| self.attributes()[i].clone())
            .collect();
        let elements = self
            .elements()
            .iter()
            .map(|element| element.pick(&positions))
            .collect();

        Ok(Relation::from_parts(attributes, elements))
    }
}

/// The projection operator `π[indices]`.
///
/// Zero and repeated indices are rejected here. Indices beyond the operand's
/// arity can only be detected when the node is evaluated.
pub fn project(indices: &[usize]) -> AlgebraResult<UnaryOperator<Relation, Relation>> {
    check_indices(indices)?;

    let indices = indices.to_vec();
    let name = format!(
        "\u{03c0}[{}]",
        indices
            .iter()
            .map(|i| format!("#{}", i))
            .collect::<Vec<_>>()
            .join(",")
    );
    Ok(UnaryOperator::new(name, move |relation: &Relation| {
        relation.project(&indices)
    }))
}
