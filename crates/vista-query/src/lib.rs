//! Parses view query strings into [`QueryOptions`].
//!
//! ```text
//! $top=5&$filter=Name eq 'One'&$orderby=Name desc&$expand=Buildings($top=2;$orderby=Name)
//! ```
//!
//! Recognized options are `top`, `skip`, `filter`, `orderby` and `expand`,
//! with or without a leading `$`. Options nested under an expansion are
//! separated by `;`.

mod expand;
mod lexer;
mod options;
mod parser;
mod split;
mod token;

pub use expand::parse_expand;
pub use options::{parse, parse_pairs};

use parser::Parser;
use vista_core::{
    options::{OrderByItem, Predicate},
    QueryOptions, Result,
};

/// Parses a filter expression such as `Builder/City/Name eq 'Leeds'`.
pub fn parse_filter(src: &str) -> Result<Predicate> {
    Parser::new(src).parse_filter()
}

/// Parses a comma-separated list of `path [asc|desc]` clauses.
pub fn parse_order_by(src: &str) -> Result<Vec<OrderByItem>> {
    Parser::new(src).parse_order_by()
}

/// Parses `;`-separated options, as found inside an expansion's parentheses.
pub fn parse_nested(src: &str) -> Result<QueryOptions> {
    options::parse_nested(src)
}
