use super::*;
use crate::{Error, Result};

impl QueryOptions {
    /// Checks the options are structurally well-formed.
    ///
    /// `top` and `skip` must be non-negative and every path must be a
    /// non-empty sequence of identifiers. Nested expand options are checked
    /// recursively. Whether paths resolve against a view is decided later,
    /// during translation.
    pub fn validate(&self) -> Result<()> {
        self.validate_at(&mut Vec::new())
    }

    fn validate_at(&self, at: &mut Vec<String>) -> Result<()> {
        if let Some(top) = self.top {
            if top < 0 {
                return Err(invalid(at, format!("top must be non-negative, got {top}")));
            }
        }

        if let Some(skip) = self.skip {
            if skip < 0 {
                return Err(invalid(at, format!("skip must be non-negative, got {skip}")));
            }
        }

        for item in &self.order_by {
            validate_path(at, &item.path)?;
        }

        if let Some(filter) = &self.filter {
            validate_predicate(at, filter)?;
        }

        for (name, nested) in &self.expand {
            if !is_identifier(name) {
                return Err(invalid(at, format!("invalid expand name `{name}`")));
            }

            at.push(name.clone());
            nested.validate_at(at)?;
            at.pop();
        }

        Ok(())
    }
}

fn validate_predicate(at: &[String], predicate: &Predicate) -> Result<()> {
    match predicate {
        Predicate::And(operands) | Predicate::Or(operands) => {
            if operands.is_empty() {
                return Err(invalid(at, "empty and/or predicate"));
            }

            for operand in operands {
                validate_predicate(at, operand)?;
            }

            Ok(())
        }
        Predicate::Not(predicate) => validate_predicate(at, predicate),
        Predicate::Compare { lhs, rhs, .. } => {
            for operand in [lhs, rhs] {
                if let Operand::Path(path) = operand {
                    validate_path(at, path)?;
                }
            }

            Ok(())
        }
        Predicate::Call { path, .. } => validate_path(at, path),
        Predicate::Any {
            path,
            var,
            predicate,
        }
        | Predicate::All {
            path,
            var,
            predicate,
        } => {
            validate_path(at, path)?;

            if !is_identifier(var) {
                return Err(invalid(at, format!("invalid lambda variable `{var}`")));
            }

            validate_predicate(at, predicate)
        }
    }
}

fn validate_path(at: &[String], path: &Path) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(at, "empty property path"));
    }

    if !path.steps().iter().all(|step| is_identifier(step)) {
        return Err(invalid(at, format!("malformed property path `{path}`")));
    }

    Ok(())
}

fn is_identifier(step: &str) -> bool {
    let mut chars = step.chars();

    match chars.next() {
        Some(ch) if ch.is_alphabetic() || ch == '_' => {}
        _ => return false,
    }

    chars.all(|ch| ch.is_alphanumeric() || ch == '_')
}

fn invalid(at: &[String], message: impl Into<String>) -> Error {
    let message = message.into();

    if at.is_empty() {
        Error::invalid_query_options(message)
    } else {
        Error::invalid_query_options(format!("{message} (in expand `{}`)", at.join("/")))
    }
}
