pub mod algebra;
pub mod expression;
pub mod relation;
