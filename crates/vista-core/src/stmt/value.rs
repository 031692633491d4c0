use super::*;
use crate::{Error, Result};
use uuid::Uuid;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// A list of values
    List(Vec<Value>),

    /// Null value
    #[default]
    Null,

    /// Record value
    Record(ValueRecord),

    /// String value
    String(String),

    /// A globally unique identifier
    Uuid(Uuid),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub fn record_from_vec(fields: Vec<Self>) -> Self {
        ValueRecord::from_vec(fields).into()
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn to_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "bool")),
        }
    }

    pub fn to_option_bool(self) -> Result<Option<bool>> {
        match self {
            Self::Null => Ok(None),
            Self::Bool(v) => Ok(Some(v)),
            _ => Err(Error::type_conversion(self, "Option<bool>")),
        }
    }

    pub fn to_i64(self) -> Result<i64> {
        match self {
            Self::I64(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "i64")),
        }
    }

    pub fn to_option_i64(self) -> Result<Option<i64>> {
        match self {
            Self::Null => Ok(None),
            Self::I64(v) => Ok(Some(v)),
            _ => Err(Error::type_conversion(self, "Option<i64>")),
        }
    }

    pub fn to_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "String")),
        }
    }

    pub fn to_option_string(self) -> Result<Option<String>> {
        match self {
            Self::Null => Ok(None),
            Self::String(v) => Ok(Some(v)),
            _ => Err(Error::type_conversion(self, "Option<String>")),
        }
    }

    pub fn to_uuid(self) -> Result<Uuid> {
        match self {
            Self::Uuid(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "Uuid")),
        }
    }

    pub fn to_option_uuid(self) -> Result<Option<Uuid>> {
        match self {
            Self::Null => Ok(None),
            Self::Uuid(v) => Ok(Some(v)),
            _ => Err(Error::type_conversion(self, "Option<Uuid>")),
        }
    }

    pub fn to_record(self) -> Result<ValueRecord> {
        match self {
            Self::Record(record) => Ok(record),
            _ => Err(Error::type_conversion(self, "record")),
        }
    }

    pub fn to_list(self) -> Result<Vec<Value>> {
        match self {
            Self::List(items) => Ok(items),
            _ => Err(Error::type_conversion(self, "list")),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&ValueRecord> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn infer_ty(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::I64(_) => Type::I64,
            Self::List(items) => match items.first() {
                Some(item) => Type::List(Box::new(item.infer_ty())),
                None => Type::List(Box::new(Type::Null)),
            },
            Self::Null => Type::Null,
            Self::Record(record) => Type::Record(record.iter().map(Self::infer_ty).collect()),
            Self::String(_) => Type::String,
            Self::Uuid(_) => Type::Uuid,
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::I64(value.into())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<ValueRecord> for Value {
    fn from(value: ValueRecord) -> Self {
        Self::Record(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}
