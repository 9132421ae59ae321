use crate::relation::{Attribute, Element, Relation, Value};
use std::fmt;

/// A literal inside a condition: one attribute, one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantRelation {
    attribute: Attribute,
    value: Value,
}

impl ConstantRelation {
    pub fn new(attribute: Attribute, value: impl Into<Value>) -> Self {
        Self {
            attribute,
            value: value.into(),
        }
    }

    /// Literal whose attribute is the value's default type tag
    pub fn of(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self {
            attribute: Attribute::single(value.type_tag()),
            value,
        }
    }

    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn to_relation(&self) -> Relation {
        Relation::from_parts(
            vec![self.attribute.clone()],
            vec![Element::new([self.value.clone()])],
        )
    }
}

impl From<ConstantRelation> for Relation {
    fn from(constant: ConstantRelation) -> Self {
        constant.to_relation()
    }
}

impl fmt::Display for ConstantRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
