use super::LowerQuery;
use crate::{Error, Result};
use std::fmt;
use vista_core::{
    options::{Func, Operand, Path, Predicate},
    schema::mapping::{self, Resolved},
    stmt::{BinaryOp, Expr, ExprField, PatternKind, Type, Value},
    Schema,
};

/// Lowers predicates written in the vocabulary of one mapping's view.
///
/// Inside a lambda, `mapping` is the mapping of the collection's elements
/// and every path must start with `var`.
struct LowerFilter<'a> {
    schema: &'a Schema,
    mapping: &'a mapping::Model,
    var: Option<&'a str>,
}

impl LowerQuery<'_> {
    pub(super) fn lower_filter(&self, predicate: &Predicate) -> Result<Expr> {
        LowerFilter {
            schema: self.schema,
            mapping: self.mapping,
            var: None,
        }
        .lower(predicate)
    }
}

impl LowerFilter<'_> {
    fn lower(&self, predicate: &Predicate) -> Result<Expr> {
        match predicate {
            Predicate::And(operands) => Ok(Expr::and_from_vec(self.lower_all(operands)?)),
            Predicate::Or(operands) => Ok(Expr::or_from_vec(self.lower_all(operands)?)),
            Predicate::Not(operand) => Ok(Expr::not(self.lower(operand)?)),
            Predicate::Compare { lhs, op, rhs } => self.lower_compare(lhs, *op, rhs),
            Predicate::Call { func, path, value } => self.lower_call(*func, path, value),
            Predicate::Any {
                path,
                var,
                predicate,
            } => {
                let (field, filter) = self.lower_lambda("any", path, var, predicate)?;
                Ok(Expr::any(field, filter))
            }
            Predicate::All {
                path,
                var,
                predicate,
            } => {
                let (field, filter) = self.lower_lambda("all", path, var, predicate)?;
                Ok(Expr::all(field, filter))
            }
        }
    }

    fn lower_all(&self, predicates: &[Predicate]) -> Result<Vec<Expr>> {
        predicates.iter().map(|predicate| self.lower(predicate)).collect()
    }

    fn lower_compare(&self, lhs: &Operand, op: BinaryOp, rhs: &Operand) -> Result<Expr> {
        match (lhs, rhs) {
            (Operand::Path(lhs), Operand::Path(rhs)) => self.lower_compare_paths(lhs, op, rhs),
            (Operand::Path(path), Operand::Value(value)) => {
                self.lower_compare_value(path, op, value)
            }
            (Operand::Value(value), Operand::Path(path)) => {
                self.lower_compare_value(path, op.commute(), value)
            }
            (Operand::Value(lhs), Operand::Value(rhs)) => {
                if !lhs.is_null() && !rhs.is_null() && lhs.infer_ty() != rhs.infer_ty() {
                    return Err(Error::type_mismatch(
                        format!("{lhs:?}"),
                        lhs.infer_ty(),
                        rhs.infer_ty(),
                    ));
                }

                Ok(Expr::binary_op(lhs.clone(), op, rhs.clone()))
            }
        }
    }

    fn lower_compare_value(&self, path: &Path, op: BinaryOp, value: &Value) -> Result<Expr> {
        let resolved = self.resolve(path)?;

        // A single-object relation compared with null is an existence check
        if let Resolved::Relation {
            field, many: false, ..
        } = &resolved
        {
            if value.is_null() && !op.is_relational() {
                return Ok(if op.is_eq() {
                    Expr::is_null(field.clone())
                } else {
                    Expr::is_not_null(field.clone())
                });
            }
        }

        let (expr, ty) = self.scalar(path, resolved, op)?;

        if value.is_null() {
            return Ok(match op {
                BinaryOp::Eq => Expr::is_null(expr),
                BinaryOp::Ne => Expr::is_not_null(expr),
                // Never true; kept so the evaluator decides
                _ => Expr::binary_op(expr, op, Expr::null()),
            });
        }

        if op.is_relational() && !ty.is_ordered() {
            return Err(Error::unsupported_operator(format!(
                "`{op}` is not defined for {ty:?} member `{path}`"
            )));
        }

        let Some(value) = ty.coerce(value.clone()) else {
            return Err(Error::type_mismatch(path.to_string(), ty, value.infer_ty()));
        };

        Ok(Expr::binary_op(expr, op, value))
    }

    fn lower_compare_paths(&self, lhs: &Path, op: BinaryOp, rhs: &Path) -> Result<Expr> {
        let (lhs_expr, lhs_ty) = self.scalar(lhs, self.resolve(lhs)?, op)?;
        let (rhs_expr, rhs_ty) = self.scalar(rhs, self.resolve(rhs)?, op)?;

        if lhs_ty != rhs_ty {
            return Err(Error::type_mismatch(lhs.to_string(), lhs_ty, rhs_ty));
        }

        if op.is_relational() && !lhs_ty.is_ordered() {
            return Err(Error::unsupported_operator(format!(
                "`{op}` is not defined for {lhs_ty:?} member `{lhs}`"
            )));
        }

        Ok(Expr::binary_op(lhs_expr, op, rhs_expr))
    }

    fn lower_call(&self, func: Func, path: &Path, value: &Value) -> Result<Expr> {
        let (expr, ty) = self.scalar(path, self.resolve(path)?, func.name())?;

        if !ty.is_string() {
            return Err(Error::unsupported_operator(format!(
                "`{}` requires a string member, `{path}` is {ty:?}",
                func.name()
            )));
        }

        let Value::String(pattern) = value else {
            return Err(Error::type_mismatch(
                path.to_string(),
                Type::String,
                value.infer_ty(),
            ));
        };

        let kind = match func {
            Func::Contains => PatternKind::Contains,
            Func::StartsWith => PatternKind::BeginsWith,
            Func::EndsWith => PatternKind::EndsWith,
        };

        Ok(Expr::pattern(kind, expr, pattern.clone()))
    }

    /// Lowers the body of an `any`/`all` lambda against the mapping of the
    /// collection's elements.
    fn lower_lambda(
        &self,
        name: &str,
        path: &Path,
        var: &str,
        predicate: &Predicate,
    ) -> Result<(ExprField, Expr)> {
        match self.resolve(path)? {
            Resolved::Relation {
                field,
                source,
                view,
                many: true,
            } => {
                let nested = LowerFilter {
                    schema: self.schema,
                    mapping: self.schema.mapping_for(source, view)?,
                    var: Some(var),
                };

                Ok((field, nested.lower(predicate)?))
            }
            _ => Err(Error::unsupported_operator(format!(
                "`{name}` requires a collection, `{path}` is not one"
            ))),
        }
    }

    fn resolve(&self, path: &Path) -> Result<Resolved> {
        let Some(var) = self.var else {
            return self.mapping.resolve_path(self.schema, path);
        };

        match path.strip_var(var) {
            Some(rest) if !rest.is_empty() => self.mapping.resolve_path(self.schema, &rest),
            Some(_) => Err(Error::unsupported_operator(format!(
                "lambda variable `{var}` cannot be used as an operand; compare one of its members"
            ))),
            None => Err(Error::unsupported_operator(format!(
                "`{path}` must start with the lambda variable `{var}`"
            ))),
        }
    }

    /// Returns the expression and type of a scalar path, rejecting relations.
    fn scalar(
        &self,
        path: &Path,
        resolved: Resolved,
        operator: impl fmt::Display,
    ) -> Result<(Expr, Type)> {
        match resolved {
            Resolved::Primitive { field, ty } => Ok((Expr::Field(field), ty)),
            Resolved::Computed { expr, ty } => Ok((expr, ty)),
            Resolved::Relation { .. } => Err(Error::unsupported_operator(format!(
                "`{operator}` on relation `{path}`; compare one of its members"
            ))),
        }
    }
}
