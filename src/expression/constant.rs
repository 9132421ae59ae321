use crate::expression::{Expression, ExpressionResult, Node, Operand};

/// Leaf node holding an already-known value
pub struct Constant<T> {
    value: T,
    name: String,
}

impl<T: Operand> Constant<T> {
    pub fn new(value: T) -> Self {
        let name = value.to_string();
        Self { value, name }
    }

    pub fn named(value: T, name: impl Into<String>) -> Self {
        Self {
            value,
            name: name.into(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Operand> Node for Constant<T> {
    fn root_name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> String {
        self.name.clone()
    }

    fn evaluate_text(&self) -> ExpressionResult<String> {
        Ok(format!("{:#}", self.value))
    }
}

impl<T: Operand> Expression<T> for Constant<T> {
    fn evaluate(&self) -> ExpressionResult<T> {
        Ok(self.value.clone())
    }

    fn as_node(&self) -> &dyn Node {
        self
    }
}
