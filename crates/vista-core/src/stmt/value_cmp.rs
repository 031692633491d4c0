use super::*;
use std::cmp::Ordering;

impl PartialOrd for Value {
    /// Orders values of the same primitive type. Null sorts before every
    /// other value. Values of different types, records and lists are
    /// unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Null, _) => Some(Ordering::Less),
            (_, Value::Null) => Some(Ordering::Greater),
            (Value::Bool(lhs), Value::Bool(rhs)) => lhs.partial_cmp(rhs),
            (Value::I64(lhs), Value::I64(rhs)) => lhs.partial_cmp(rhs),
            (Value::String(lhs), Value::String(rhs)) => lhs.partial_cmp(rhs),
            (Value::Uuid(lhs), Value::Uuid(rhs)) => lhs.partial_cmp(rhs),
            _ => None,
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(value) if value == other)
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::I64(value) if value == other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::String(value) if value == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Value::String(value) if value == *other)
    }
}

impl PartialEq<uuid::Uuid> for Value {
    fn eq(&self, other: &uuid::Uuid) -> bool {
        matches!(self, Value::Uuid(value) if value == other)
    }
}
