//! In-memory relations.
//!
//! This module provides the value objects every algebra operator consumes
//! and produces:
//!
//! - **Attribute**: set of type tags describing a column's domain
//! - **Value** / **Element**: cells and rows
//! - **Relation**: ordered attributes plus a bag of elements
//! - **ConstantRelation**: a single literal used inside conditions
//!
//! Relations are immutable. Element storage is shared between a relation and
//! the relations derived from it when only the attributes change.

pub mod attribute;
pub mod constant;
pub mod element;
pub mod value;

pub use attribute::{record_id, Attribute};
pub use constant::ConstantRelation;
pub use element::Element;
pub use value::Value;

use crate::algebra::{AlgebraError, AlgebraResult};
use std::fmt;
use std::sync::Arc;

/// Ordered attributes plus an ordered bag of elements of matching arity
#[derive(Debug, Clone)]
pub struct Relation {
    attributes: Vec<Attribute>,
    elements: Arc<[Element]>,
}

impl Relation {
    /// Create a relation, validating that it has at least one attribute and
    /// that every element matches its arity.
    pub fn new(attributes: Vec<Attribute>, elements: Vec<Element>) -> AlgebraResult<Self> {
        if attributes.is_empty() {
            return Err(AlgebraError::MalformedRelation {
                reason: "relation must have at least one attribute".to_string(),
            });
        }

        for (i, element) in elements.iter().enumerate() {
            if element.arity() != attributes.len() {
                return Err(AlgebraError::MalformedRelation {
                    reason: format!(
                        "element {} has {} values but relation has {} attributes",
                        i + 1,
                        element.arity(),
                        attributes.len()
                    ),
                });
            }
        }

        Ok(Self::from_parts(attributes, elements))
    }

    /// Build a relation whose shape is already known to be valid
    pub(crate) fn from_parts(attributes: Vec<Attribute>, elements: Vec<Element>) -> Self {
        debug_assert!(!attributes.is_empty());
        debug_assert!(elements.iter().all(|e| e.arity() == attributes.len()));
        Self {
            attributes,
            elements: elements.into(),
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Attribute at a 0-based position
    pub fn attribute(&self, index: usize) -> Option<&Attribute> {
        self.attributes.get(index)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn arity(&self) -> usize {
        self.attributes.len()
    }

    /// Number of elements, duplicates included
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a relation where the attribute at `index` (0-based) is replaced.
    /// The elements are shared with `self`.
    pub fn replace_attribute(&self, index: usize, attribute: Attribute) -> Relation {
        let mut attributes = self.attributes.clone();
        attributes[index] = attribute;
        Self {
            attributes,
            elements: Arc::clone(&self.elements),
        }
    }

    /// Keep the elements matching `predicate`, in order
    pub fn filter_elements<P>(&self, mut predicate: P) -> Relation
    where
        P: FnMut(&Element) -> bool,
    {
        let elements: Vec<Element> = self
            .elements
            .iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect();
        Self::from_parts(self.attributes.clone(), elements)
    }

    /// Keep the elements for which `predicate` returns `Ok(true)`, stopping at
    /// the first error
    pub(crate) fn try_filter_elements<P>(&self, mut predicate: P) -> AlgebraResult<Relation>
    where
        P: FnMut(&Element) -> AlgebraResult<bool>,
    {
        let mut elements = Vec::new();
        for element in self.elements.iter() {
            if predicate(element)? {
                elements.push(element.clone());
            }
        }
        Ok(Self::from_parts(self.attributes.clone(), elements))
    }

    /// Prepend a record-id column numbering the sorted elements from 0.
    /// Returns the indexed relation together with its record-id attribute.
    pub fn indexed(&self, index_name: &str) -> (Relation, Attribute) {
        let rid = record_id(index_name);

        let mut attributes = Vec::with_capacity(self.arity() + 1);
        attributes.push(rid.clone());
        attributes.extend(self.attributes.iter().cloned());

        let mut sorted: Vec<&Element> = self.elements.iter().collect();
        sorted.sort();
        let elements = sorted
            .into_iter()
            .enumerate()
            .map(|(i, element)| Element::new([i]).concat(element))
            .collect();

        (Self::from_parts(attributes, elements), rid)
    }

    fn sorted_elements(&self) -> Vec<&Element> {
        let mut elements: Vec<&Element> = self.elements.iter().collect();
        elements.sort();
        elements
    }
}

/// Attribute sequences must match exactly; elements are compared as multisets.
impl PartialEq for Relation {
    fn eq(&self, other: &Self) -> bool {
        self.attributes == other.attributes
            && self.len() == other.len()
            && self.sorted_elements() == other.sorted_elements()
    }
}

impl Eq for Relation {}

/// `{}` prints the attributes only, `{:#}` prints an aligned table of the elements
impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() || self.is_empty() {
            let header: Vec<String> = self.attributes.iter().map(ToString::to_string).collect();
            return write!(f, "( {} )", header.join(" , "));
        }

        let header: Vec<String> = self.attributes.iter().map(ToString::to_string).collect();
        let rows: Vec<Vec<String>> = self
            .elements
            .iter()
            .map(|element| element.values().iter().map(ToString::to_string).collect())
            .collect();

        let widths: Vec<usize> = (0..self.arity())
            .map(|i| {
                rows.iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header[i].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let pad = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join(" , ")
        };

        write!(f, "( {} )", pad(&header))?;
        for row in &rows {
            write!(f, "\n  {}", pad(row))?;
        }
        Ok(())
    }
}
