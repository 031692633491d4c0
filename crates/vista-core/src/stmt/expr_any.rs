use super::*;

/// True when at least one element of a collection satisfies `filter`.
///
/// `path` is evaluated against the current row and must yield a list of
/// records; `filter` is evaluated against each element in turn. "All"
/// predicates are expressed as `not(any(not(filter)))`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAny {
    pub path: ExprField,
    pub filter: Box<Expr>,
}

impl Expr {
    pub fn any(path: impl Into<ExprField>, filter: impl Into<Self>) -> Self {
        ExprAny {
            path: path.into(),
            filter: Box::new(filter.into()),
        }
        .into()
    }

    pub fn all(path: impl Into<ExprField>, filter: impl Into<Self>) -> Self {
        Self::not(Self::any(path, Self::not(filter)))
    }
}

impl From<ExprAny> for Expr {
    fn from(value: ExprAny) -> Self {
        Self::Any(value)
    }
}
