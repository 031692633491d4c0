use super::*;

/// An expression over source rows.
///
/// Expressions are evaluated against one source row at a time. Field
/// references walk relations through the [`Input`] supplied at evaluation
/// time, so a single [`ExprField`] can reach a value several relations away
/// from the row being evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of binary expressions
    And(ExprAnd),

    /// True if any element of a collection satisfies a predicate
    Any(ExprAny),

    /// Runtime parameter, falling back to a default when not supplied
    Arg(ExprArg),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// References a field, possibly through a chain of relations
    Field(ExprField),

    /// Whether an expression is (or is not) null
    IsNull(ExprIsNull),

    /// Negates a boolean expression
    Not(ExprNot),

    /// OR a set of binary expressions
    Or(ExprOr),

    /// String pattern match
    Pattern(ExprPattern),

    /// Record of expressions, one per projected field
    Record(ExprRecord),

    /// A nested query evaluated once per row
    Stmt(ExprStmt),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    /// Is a value that evaluates to null
    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(true)))
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(false)))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    pub fn is_stmt(&self) -> bool {
        matches!(self, Self::Stmt(..))
    }

    /// Returns true if the expression evaluates to the same value for every
    /// row. Arguments count as constant since they are fixed per request.
    pub fn is_const(&self) -> bool {
        match self {
            Self::Value(_) | Self::Arg(_) => true,
            Self::Record(expr_record) => expr_record.iter().all(Self::is_const),
            Self::And(expr) => expr.iter().all(Self::is_const),
            Self::Or(expr) => expr.iter().all(Self::is_const),
            Self::Not(expr) => expr.expr.is_const(),
            Self::IsNull(expr) => expr.expr.is_const(),
            Self::BinaryOp(expr) => expr.lhs.is_const() && expr.rhs.is_const(),
            Self::Pattern(expr) => expr.expr.is_const(),
            Self::Any(_) | Self::Field(_) | Self::Stmt(_) => false,
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Value(Value::Null))
    }
}

impl Node for Expr {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_expr(self);
    }

    fn visit_mut<V: VisitMut>(&mut self, mut visit: V) {
        visit.visit_expr_mut(self);
    }
}

impl Default for Expr {
    fn default() -> Self {
        Self::Value(Value::default())
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}
