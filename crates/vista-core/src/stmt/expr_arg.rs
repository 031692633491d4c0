use super::*;

/// A runtime parameter.
///
/// Evaluates to the value supplied for `key` in the request's [`Params`], or
/// to `default` when the caller did not supply one.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprArg {
    pub key: String,
    pub default: Value,
}

impl Expr {
    pub fn arg(key: impl Into<String>, default: impl Into<Value>) -> Self {
        ExprArg {
            key: key.into(),
            default: default.into(),
        }
        .into()
    }
}

impl From<ExprArg> for Expr {
    fn from(value: ExprArg) -> Self {
        Self::Arg(value)
    }
}
