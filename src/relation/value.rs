use std::fmt;

/// Values that can be stored in an element
///
/// Values are totally ordered: by variant first (`Boolean < Int < String`),
/// then by payload. Comparison conditions rely on this ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Boolean(bool),
    Int(i64),
    String(String),
}

impl Value {
    /// Default type tag of this value, used when no attribute is given explicitly
    pub fn type_tag(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "bool",
            Value::Int(_) => "int",
            Value::String(_) => "str",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Int(value as i64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tags() {
        assert_eq!(Value::Boolean(true).type_tag(), "bool");
        assert_eq!(Value::Int(42).type_tag(), "int");
        assert_eq!(Value::from("hello").type_tag(), "str");
    }

    #[test]
    fn test_value_ordering() {
        assert!(Value::Int(1) < Value::Int(2));
        assert!(Value::from("a") < Value::from("b"));
        // Variant order decides across types
        assert!(Value::Boolean(true) < Value::Int(0));
        assert!(Value::Int(i64::MAX) < Value::from(""));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(Value::Boolean(false).to_string(), "false");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Int(3).as_int(), Some(3));
        assert_eq!(Value::Int(3).as_str(), None);
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::Boolean(true).as_bool(), Some(true));
    }
}
