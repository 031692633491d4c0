use super::*;
use crate::stmt::{ExprField, Type, Value};

#[derive(Debug, Clone)]
pub enum Field {
    /// Read from a source path
    Primitive(FieldPrimitive),

    /// A nested object or collection read through a source relation
    Relation(FieldRelation),

    /// Computed from a runtime parameter
    Param(FieldParam),

    /// Not mapped. Always materializes the default.
    Ignore(FieldIgnore),
}

#[derive(Debug, Clone)]
pub struct FieldPrimitive {
    /// Source fields walked from the row. Every step but the last is a
    /// `BelongsTo` relation, which allows flattening nested source values
    /// into a scalar view member.
    pub path: ExprField,

    /// Type of the value
    pub ty: Type,
}

#[derive(Debug, Clone)]
pub struct FieldRelation {
    /// Source fields walked from the row. The last step is the relation the
    /// nested rows are read through.
    pub path: ExprField,

    /// Source model of the nested rows
    pub source: source::ModelId,

    /// View model of the nested values
    pub view: view::ModelId,

    /// `true` for collections, `false` for single objects
    pub many: bool,
}

#[derive(Debug, Clone)]
pub struct FieldParam {
    /// Key looked up in the request's parameters
    pub key: String,

    /// Value used when the key is absent
    pub default: Value,

    pub ty: Type,
}

#[derive(Debug, Clone)]
pub struct FieldIgnore {
    pub default: Value,

    /// Type of the member, or `Type::Null` for ignored relations
    pub ty: Type,
}

impl Field {
    pub fn is_relation(&self) -> bool {
        matches!(self, Self::Relation(..))
    }

    pub fn as_relation(&self) -> Option<&FieldRelation> {
        match self {
            Self::Relation(relation) => Some(relation),
            _ => None,
        }
    }

    pub fn as_primitive(&self) -> Option<&FieldPrimitive> {
        match self {
            Self::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }
}

impl FieldRelation {
    /// Value materialized when the relation is not expanded.
    pub fn unexpanded(&self) -> Value {
        if self.many {
            Value::List(vec![])
        } else {
            Value::Null
        }
    }
}
