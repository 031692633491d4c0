use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Ident(String),
    Str(String),
    Int(i64),
    Guid(Uuid),
    Slash,
    Comma,
    Colon,
    LParen,
    RParen,
}

/// A token and the byte offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub(crate) token: Token,
    pub(crate) offset: usize,
}

impl Token {
    pub(crate) fn is_ident(&self, name: &str) -> bool {
        matches!(self, Token::Ident(ident) if ident == name)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(ident) => write!(f, "`{ident}`"),
            Token::Str(value) => write!(f, "string '{value}'"),
            Token::Int(value) => write!(f, "integer {value}"),
            Token::Guid(value) => write!(f, "guid {value}"),
            Token::Slash => f.write_str("`/`"),
            Token::Comma => f.write_str("`,`"),
            Token::Colon => f.write_str("`:`"),
            Token::LParen => f.write_str("`(`"),
            Token::RParen => f.write_str("`)`"),
        }
    }
}
