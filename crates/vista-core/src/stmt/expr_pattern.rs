use super::*;

/// Matches a string expression against a literal pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprPattern {
    pub kind: PatternKind,
    pub expr: Box<Expr>,
    pub pattern: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    BeginsWith,
    Contains,
    EndsWith,
}

impl PatternKind {
    pub fn is_match(self, haystack: &str, pattern: &str) -> bool {
        match self {
            Self::BeginsWith => haystack.starts_with(pattern),
            Self::Contains => haystack.contains(pattern),
            Self::EndsWith => haystack.ends_with(pattern),
        }
    }
}

impl Expr {
    pub fn pattern(kind: PatternKind, expr: impl Into<Self>, pattern: impl Into<String>) -> Self {
        ExprPattern {
            kind,
            expr: Box::new(expr.into()),
            pattern: pattern.into(),
        }
        .into()
    }

    pub fn begins_with(expr: impl Into<Self>, pattern: impl Into<String>) -> Self {
        Self::pattern(PatternKind::BeginsWith, expr, pattern)
    }

    pub fn contains(expr: impl Into<Self>, pattern: impl Into<String>) -> Self {
        Self::pattern(PatternKind::Contains, expr, pattern)
    }

    pub fn ends_with(expr: impl Into<Self>, pattern: impl Into<String>) -> Self {
        Self::pattern(PatternKind::EndsWith, expr, pattern)
    }
}

impl From<ExprPattern> for Expr {
    fn from(value: ExprPattern) -> Self {
        Self::Pattern(value)
    }
}
