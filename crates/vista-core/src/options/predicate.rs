use super::Path;
use crate::stmt::{BinaryOp, Value};

/// A filter predicate in view vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    Not(Box<Predicate>),

    /// `lhs op rhs`
    Compare {
        lhs: Operand,
        op: BinaryOp,
        rhs: Operand,
    },

    /// A string function, such as `contains(Name, 'L1')`
    Call {
        func: Func,
        path: Path,
        value: Value,
    },

    /// True when some element of the collection at `path` satisfies
    /// `predicate`. Paths inside `predicate` start with `var`.
    Any {
        path: Path,
        var: String,
        predicate: Box<Predicate>,
    },

    /// True when every element of the collection at `path` satisfies
    /// `predicate`.
    All {
        path: Path,
        var: String,
        predicate: Box<Predicate>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Path(Path),
    Value(Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Contains,
    StartsWith,
    EndsWith,
}

impl Predicate {
    pub fn compare(lhs: impl Into<Operand>, op: BinaryOp, rhs: impl Into<Operand>) -> Self {
        Self::Compare {
            lhs: lhs.into(),
            op,
            rhs: rhs.into(),
        }
    }

    pub fn eq(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Self {
        Self::compare(lhs, BinaryOp::Eq, rhs)
    }

    pub fn ne(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Self {
        Self::compare(lhs, BinaryOp::Ne, rhs)
    }

    pub fn gt(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Self {
        Self::compare(lhs, BinaryOp::Gt, rhs)
    }

    pub fn ge(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Self {
        Self::compare(lhs, BinaryOp::Ge, rhs)
    }

    pub fn lt(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Self {
        Self::compare(lhs, BinaryOp::Lt, rhs)
    }

    pub fn le(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Self {
        Self::compare(lhs, BinaryOp::Le, rhs)
    }

    pub fn and(lhs: Predicate, rhs: Predicate) -> Self {
        match (lhs, rhs) {
            (Self::And(mut lhs), Self::And(rhs)) => {
                lhs.extend(rhs);
                Self::And(lhs)
            }
            (Self::And(mut lhs), rhs) => {
                lhs.push(rhs);
                Self::And(lhs)
            }
            (lhs, rhs) => Self::And(vec![lhs, rhs]),
        }
    }

    pub fn or(lhs: Predicate, rhs: Predicate) -> Self {
        match (lhs, rhs) {
            (Self::Or(mut lhs), Self::Or(rhs)) => {
                lhs.extend(rhs);
                Self::Or(lhs)
            }
            (Self::Or(mut lhs), rhs) => {
                lhs.push(rhs);
                Self::Or(lhs)
            }
            (lhs, rhs) => Self::Or(vec![lhs, rhs]),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(predicate: Predicate) -> Self {
        Self::Not(Box::new(predicate))
    }

    pub fn call(func: Func, path: impl Into<Path>, value: impl Into<Value>) -> Self {
        Self::Call {
            func,
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn contains(path: impl Into<Path>, value: impl Into<Value>) -> Self {
        Self::call(Func::Contains, path, value)
    }

    pub fn starts_with(path: impl Into<Path>, value: impl Into<Value>) -> Self {
        Self::call(Func::StartsWith, path, value)
    }

    pub fn ends_with(path: impl Into<Path>, value: impl Into<Value>) -> Self {
        Self::call(Func::EndsWith, path, value)
    }

    pub fn any(path: impl Into<Path>, var: impl Into<String>, predicate: Predicate) -> Self {
        Self::Any {
            path: path.into(),
            var: var.into(),
            predicate: Box::new(predicate),
        }
    }

    pub fn all(path: impl Into<Path>, var: impl Into<String>, predicate: Predicate) -> Self {
        Self::All {
            path: path.into(),
            var: var.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl Func {
    pub fn name(self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::StartsWith => "startswith",
            Self::EndsWith => "endswith",
        }
    }
}

impl Operand {
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::Path(path) => Some(path),
            Self::Value(_) => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }
}

impl From<Path> for Operand {
    fn from(value: Path) -> Self {
        Self::Path(value)
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

impl From<uuid::Uuid> for Operand {
    fn from(value: uuid::Uuid) -> Self {
        Self::Value(value.into())
    }
}
