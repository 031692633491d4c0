use super::Value;
use serde::Deserialize;
use uuid::Uuid;

/// Type of a primitive field or of an evaluated value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Bool,
    I64,
    String,
    Uuid,

    /// The type of the null literal
    Null,

    /// A list of values of the given type
    List(Box<Type>),

    /// A record with one type per field
    Record(Vec<Type>),
}

impl Type {
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Primitive types are the ones a source field or view member can hold
    /// directly.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Bool | Self::I64 | Self::String | Self::Uuid)
    }

    /// Whether `<`, `<=`, `>` and `>=` are meaningful for the type.
    pub fn is_ordered(&self) -> bool {
        matches!(self, Self::I64 | Self::String | Self::Uuid)
    }

    /// Converts a literal to this type if it is already of this type, is
    /// null, or has an unambiguous textual representation (a GUID written as
    /// a string literal).
    pub fn coerce(&self, value: Value) -> Option<Value> {
        match (self, value) {
            (_, Value::Null) => Some(Value::Null),
            (Self::Bool, value @ Value::Bool(_)) => Some(value),
            (Self::I64, value @ Value::I64(_)) => Some(value),
            (Self::String, value @ Value::String(_)) => Some(value),
            (Self::Uuid, value @ Value::Uuid(_)) => Some(value),
            (Self::Uuid, Value::String(s)) => Uuid::parse_str(&s).ok().map(Value::Uuid),
            _ => None,
        }
    }
}
