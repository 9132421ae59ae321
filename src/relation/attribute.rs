//! Column attributes: non-empty sets of type tags.
//!
//! Attributes form a lattice ordered by set inclusion. Equality conditions
//! narrow a column by intersection, union widens it.

use crate::algebra::{AlgebraError, AlgebraResult};
use std::collections::BTreeSet;
use std::fmt;

/// The domain of a column, described by one or more type tags
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Attribute {
    types: BTreeSet<String>,
}

impl Attribute {
    /// Create an attribute from a set of type tags. Fails if no tag is given.
    pub fn new<I, S>(types: I) -> AlgebraResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let types: BTreeSet<String> = types.into_iter().map(Into::into).collect();
        if types.is_empty() {
            return Err(AlgebraError::MalformedRelation {
                reason: "attribute must have at least one type".to_string(),
            });
        }
        Ok(Self { types })
    }

    /// Create an attribute with exactly one type tag
    pub fn single(tag: impl Into<String>) -> Self {
        Self {
            types: BTreeSet::from([tag.into()]),
        }
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.types.contains(tag)
    }

    /// Number of type tags (always at least one)
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Narrow to the shared types. Returns `None` when the domains are disjoint.
    pub fn intersection(&self, other: &Attribute) -> Option<Attribute> {
        let types: BTreeSet<String> = self.types.intersection(&other.types).cloned().collect();
        if types.is_empty() {
            None
        } else {
            Some(Self { types })
        }
    }

    /// Widen to all types of either attribute
    pub fn union(&self, other: &Attribute) -> Attribute {
        Self {
            types: self.types.union(&other.types).cloned().collect(),
        }
    }

    /// True if `self` is a strict subset of `other`
    pub fn is_narrower_than(&self, other: &Attribute) -> bool {
        self.types.len() < other.types.len() && self.types.is_subset(&other.types)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.types.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(tag)?;
        }
        Ok(())
    }
}

/// Attribute tagging the record ids of an indexed relation
pub fn record_id(relation_name: &str) -> Attribute {
    Attribute::single(format!("{}.rid", relation_name))
}
