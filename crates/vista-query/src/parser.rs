use crate::{
    lexer::Lexer,
    token::{Spanned, Token},
};
use uuid::Uuid;
use vista_core::{
    options::{Func, Operand, OrderByItem, Path, Predicate},
    stmt::{BinaryOp, Value},
    Error, Result,
};

/// Recursive descent parser for filter and order-by expressions.
///
/// Precedence, loosest first: `or`, `and`, `not`, comparisons.
pub(crate) struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &'a str) -> Parser<'a> {
        Parser {
            lexer: Lexer::new(src),
        }
    }

    pub(crate) fn parse_filter(&mut self) -> Result<Predicate> {
        let predicate = self.parse_or()?;
        self.expect_eof()?;
        Ok(predicate)
    }

    pub(crate) fn parse_order_by(&mut self) -> Result<Vec<OrderByItem>> {
        let mut items = vec![];

        loop {
            let path = self.parse_path()?;

            let item = if self.eat_ident("desc")? {
                OrderByItem::desc(path)
            } else {
                self.eat_ident("asc")?;
                OrderByItem::asc(path)
            };

            items.push(item);

            if !self.eat(&Token::Comma)? {
                break;
            }
        }

        self.expect_eof()?;
        Ok(items)
    }

    fn parse_or(&mut self) -> Result<Predicate> {
        let mut operands = vec![self.parse_and()?];

        while self.eat_ident("or")? {
            operands.push(self.parse_and()?);
        }

        Ok(combine(operands, Predicate::Or))
    }

    fn parse_and(&mut self) -> Result<Predicate> {
        let mut operands = vec![self.parse_unary()?];

        while self.eat_ident("and")? {
            operands.push(self.parse_unary()?);
        }

        Ok(combine(operands, Predicate::And))
    }

    fn parse_unary(&mut self) -> Result<Predicate> {
        if self.eat_ident("not")? {
            return Ok(Predicate::not(self.parse_unary()?));
        }

        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Predicate> {
        if self.eat(&Token::LParen)? {
            let predicate = self.parse_or()?;
            self.expect(&Token::RParen)?;
            return Ok(predicate);
        }

        if let Some(func) = self.peek_func()? {
            return self.parse_call(func);
        }

        let lhs = match self.peek_literal()? {
            Some(value) => {
                self.next()?;
                Operand::Value(value)
            }
            None => {
                let path = self.parse_path()?;

                if let Some(quantifier) = self.peek_lambda()? {
                    return self.parse_lambda(quantifier, path);
                }

                Operand::Path(path)
            }
        };

        let op = self.parse_op()?;
        let rhs = self.parse_operand()?;

        Ok(Predicate::compare(lhs, op, rhs))
    }

    fn parse_operand(&mut self) -> Result<Operand> {
        match self.peek_literal()? {
            Some(value) => {
                self.next()?;
                Ok(Operand::Value(value))
            }
            None => Ok(Operand::Path(self.parse_path()?)),
        }
    }

    fn parse_op(&mut self) -> Result<BinaryOp> {
        let spanned = self.next()?;

        let op = match &spanned.token {
            Token::Ident(ident) => match &ident[..] {
                "eq" => Some(BinaryOp::Eq),
                "ne" => Some(BinaryOp::Ne),
                "gt" => Some(BinaryOp::Gt),
                "ge" => Some(BinaryOp::Ge),
                "lt" => Some(BinaryOp::Lt),
                "le" => Some(BinaryOp::Le),
                _ => None,
            },
            _ => None,
        };

        op.ok_or_else(|| unexpected("a comparison operator", &spanned))
    }

    /// `contains(Name, 'L1')` and friends.
    fn parse_call(&mut self, func: Func) -> Result<Predicate> {
        self.next()?;
        self.expect(&Token::LParen)?;

        let path = self.parse_path()?;
        self.expect(&Token::Comma)?;

        let Some(value) = self.peek_literal()? else {
            let spanned = self.next()?;
            return Err(unexpected("a literal", &spanned));
        };

        self.next()?;
        self.expect(&Token::RParen)?;

        Ok(Predicate::call(func, path, value))
    }

    /// `Buildings/any(b: b/Name eq 'x')`. The path has been parsed; the
    /// remaining tokens start at the `/` before the quantifier.
    fn parse_lambda(&mut self, quantifier: Quantifier, path: Path) -> Result<Predicate> {
        self.expect(&Token::Slash)?;
        self.next()?;
        self.expect(&Token::LParen)?;

        let var = self.parse_ident()?;
        self.expect(&Token::Colon)?;

        let predicate = self.parse_or()?;
        self.expect(&Token::RParen)?;

        Ok(match quantifier {
            Quantifier::Any => Predicate::any(path, var, predicate),
            Quantifier::All => Predicate::all(path, var, predicate),
        })
    }

    /// Parses `/`-separated identifiers, stopping before a lambda.
    fn parse_path(&mut self) -> Result<Path> {
        let mut path = Path::default();
        path.push(self.parse_ident()?);

        while self.is_nth(0, &Token::Slash)? && self.peek_lambda()?.is_none() {
            self.next()?;
            path.push(self.parse_ident()?);
        }

        Ok(path)
    }

    fn parse_ident(&mut self) -> Result<String> {
        let spanned = self.next()?;

        match spanned.token {
            Token::Ident(ident) => Ok(ident),
            _ => Err(unexpected("an identifier", &spanned)),
        }
    }

    /// Returns the literal at the head of the input without consuming it.
    ///
    /// `guid'...'` is the one literal spanning two tokens; its prefix is
    /// consumed here.
    fn peek_literal(&mut self) -> Result<Option<Value>> {
        let Some(Spanned { token, offset }) = self.lexer.peek_nth(0)?.cloned() else {
            return Ok(None);
        };

        Ok(Some(match token {
            Token::Str(value) => Value::String(value),
            Token::Int(value) => Value::I64(value),
            Token::Guid(value) => Value::Uuid(value),
            Token::Ident(ident) => match &ident[..] {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                "null" => Value::Null,
                "guid" => {
                    let Some(Token::Str(value)) =
                        self.lexer.peek_nth(1)?.map(|spanned| spanned.token.clone())
                    else {
                        return Ok(None);
                    };

                    let guid = Uuid::parse_str(&value).map_err(|_| {
                        Error::parse(format!("`{value}` is not a valid guid"), offset)
                    })?;

                    self.next()?;
                    Value::Uuid(guid)
                }
                _ => return Ok(None),
            },
            _ => return Ok(None),
        }))
    }

    fn peek_func(&mut self) -> Result<Option<Func>> {
        let func = match self.lexer.peek_nth(0)? {
            Some(Spanned {
                token: Token::Ident(ident),
                ..
            }) => match &ident[..] {
                "contains" => Func::Contains,
                "startswith" => Func::StartsWith,
                "endswith" => Func::EndsWith,
                _ => return Ok(None),
            },
            _ => return Ok(None),
        };

        Ok(self.is_nth(1, &Token::LParen)?.then_some(func))
    }

    /// Detects `/any(` or `/all(` at the head of the input.
    fn peek_lambda(&mut self) -> Result<Option<Quantifier>> {
        if !self.is_nth(0, &Token::Slash)? || !self.is_nth(2, &Token::LParen)? {
            return Ok(None);
        }

        Ok(match self.lexer.peek_nth(1)? {
            Some(spanned) if spanned.token.is_ident("any") => Some(Quantifier::Any),
            Some(spanned) if spanned.token.is_ident("all") => Some(Quantifier::All),
            _ => None,
        })
    }

    fn is_nth(&mut self, n: usize, token: &Token) -> Result<bool> {
        Ok(self
            .lexer
            .peek_nth(n)?
            .is_some_and(|spanned| spanned.token == *token))
    }

    fn eat(&mut self, token: &Token) -> Result<bool> {
        if self.is_nth(0, token)? {
            self.next()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn eat_ident(&mut self, name: &str) -> Result<bool> {
        let is_next = self
            .lexer
            .peek_nth(0)?
            .is_some_and(|spanned| spanned.token.is_ident(name));

        if is_next {
            self.next()?;
        }

        Ok(is_next)
    }

    fn expect(&mut self, token: &Token) -> Result<()> {
        let spanned = self.next()?;

        if spanned.token == *token {
            Ok(())
        } else {
            Err(unexpected(&token.to_string(), &spanned))
        }
    }

    fn expect_eof(&mut self) -> Result<()> {
        match self.lexer.next()? {
            None => Ok(()),
            Some(spanned) => Err(unexpected("end of input", &spanned)),
        }
    }

    /// Consumes the next token, failing at end of input.
    fn next(&mut self) -> Result<Spanned> {
        let end = self.lexer.end();

        self.lexer
            .next()?
            .ok_or_else(|| Error::parse("unexpected end of input", end))
    }
}

#[derive(Debug, Clone, Copy)]
enum Quantifier {
    Any,
    All,
}

fn combine(mut operands: Vec<Predicate>, f: fn(Vec<Predicate>) -> Predicate) -> Predicate {
    if operands.len() == 1 {
        operands.swap_remove(0)
    } else {
        f(operands)
    }
}

fn unexpected(expected: &str, found: &Spanned) -> Error {
    Error::parse(
        format!("expected {expected}, found {}", found.token),
        found.offset,
    )
}
