use crate::token::{Spanned, Token};
use std::collections::VecDeque;
use uuid::Uuid;
use vista_core::{Error, Result};

const GUID_LEN: usize = 36;

pub(crate) struct Lexer<'a> {
    src: &'a str,

    /// Bytes consumed so far
    pos: usize,

    next: VecDeque<Spanned>,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(src: &'a str) -> Lexer<'a> {
        Lexer {
            src,
            pos: 0,
            next: VecDeque::new(),
        }
    }

    pub(crate) fn next(&mut self) -> Result<Option<Spanned>> {
        self.lex_n(1)?;
        Ok(self.next.pop_front())
    }

    pub(crate) fn peek_nth(&mut self, n: usize) -> Result<Option<&Spanned>> {
        self.lex_n(n + 1)?;
        Ok(self.next.get(n))
    }

    /// Offset reported for errors at the end of input.
    pub(crate) fn end(&self) -> usize {
        self.pos + self.src.len()
    }

    fn lex_n(&mut self, n: usize) -> Result<()> {
        while self.next.len() < n {
            self.skip_whitespace();

            let offset = self.pos;

            let Some(ch) = self.peek_char() else {
                return Ok(());
            };

            if let Some(guid) = guid_prefix(self.src) {
                self.consume(GUID_LEN);
                self.next.push_back(Spanned {
                    token: Token::Guid(guid),
                    offset,
                });
                continue;
            }

            let token = match ch {
                '/' => self.punct(Token::Slash),
                ',' => self.punct(Token::Comma),
                ':' => self.punct(Token::Colon),
                '(' => self.punct(Token::LParen),
                ')' => self.punct(Token::RParen),
                '\'' => self.lex_str(offset)?,
                '-' if self.peek_char_n(1).is_some_and(|ch| ch.is_ascii_digit()) => {
                    self.consume(1);
                    self.lex_int(offset, true)?
                }
                ch if ch.is_ascii_digit() => self.lex_int(offset, false)?,
                ch if ch == '_' || ch.is_alphabetic() => {
                    let mut ident = String::new();

                    while let Some(ch) = self.take_if(ident_ch) {
                        ident.push(ch);
                    }

                    Token::Ident(ident)
                }
                ch => {
                    return Err(Error::parse(format!("unexpected character `{ch}`"), offset));
                }
            };

            self.next.push_back(Spanned { token, offset });
        }

        Ok(())
    }

    fn punct(&mut self, token: Token) -> Token {
        self.consume(1);
        token
    }

    /// Lexes a quoted string. A doubled quote stands for one quote.
    fn lex_str(&mut self, offset: usize) -> Result<Token> {
        self.consume(1);

        let mut value = String::new();

        loop {
            match self.try_next_char() {
                Some('\'') if self.peek_char() == Some('\'') => {
                    self.consume(1);
                    value.push('\'');
                }
                Some('\'') => return Ok(Token::Str(value)),
                Some(ch) => value.push(ch),
                None => return Err(Error::parse("unterminated string literal", offset)),
            }
        }
    }

    fn lex_int(&mut self, offset: usize, negative: bool) -> Result<Token> {
        let mut digits = String::new();

        if negative {
            digits.push('-');
        }

        while let Some(ch) = self.take_if(|ch| ch.is_ascii_digit()) {
            digits.push(ch);
        }

        digits
            .parse()
            .map(Token::Int)
            .map_err(|_| Error::parse(format!("integer literal `{digits}` is out of range"), offset))
    }

    fn try_next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.consume(ch.len_utf8());
        Some(ch)
    }

    fn peek_char(&self) -> Option<char> {
        self.peek_char_n(0)
    }

    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.src.chars().nth(n)
    }

    fn take_if<P>(&mut self, predicate: P) -> Option<char>
    where
        P: FnOnce(char) -> bool,
    {
        match self.peek_char() {
            Some(ch) if predicate(ch) => {
                self.consume(ch.len_utf8());
                Some(ch)
            }
            _ => None,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !ch.is_whitespace() {
                return;
            }

            self.consume(ch.len_utf8());
        }
    }

    fn consume(&mut self, amount: usize) {
        let (_, src) = self.src.split_at(amount);
        self.src = src;
        self.pos += amount;
    }
}

fn ident_ch(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

/// Matches an unquoted GUID (`8-4-4-4-12` hex digits) at the start of `src`.
fn guid_prefix(src: &str) -> Option<Uuid> {
    let candidate = src.get(..GUID_LEN)?;

    let well_formed = candidate.bytes().enumerate().all(|(i, b)| match i {
        8 | 13 | 18 | 23 => b == b'-',
        _ => b.is_ascii_hexdigit(),
    });

    if !well_formed || src[GUID_LEN..].starts_with(ident_ch) {
        return None;
    }

    Uuid::parse_str(candidate).ok()
}
