use crate::{expand::parse_expand, split::split_top_level, Parser};
use url::form_urlencoded;
use vista_core::{Error, QueryOptions, Result};

/// Parses a URL query string such as `$top=5&$filter=Name eq 'One'`.
///
/// A leading `?` is ignored. Keys and values are percent-decoded and `+`
/// decodes to a space.
pub fn parse(src: &str) -> Result<QueryOptions> {
    let src = src.strip_prefix('?').unwrap_or(src);
    parse_pairs(form_urlencoded::parse(src.as_bytes()))
}

/// Builds options from already-decoded key/value pairs.
pub fn parse_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<QueryOptions>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut options = QueryOptions::default();

    for (key, value) in pairs {
        apply(&mut options, key.as_ref(), value.as_ref())?;
    }

    Ok(options)
}

/// Parses the `;`-separated options found inside `Name(...)` of an expand
/// item.
pub(crate) fn parse_nested(src: &str) -> Result<QueryOptions> {
    let mut options = QueryOptions::default();

    for (offset, piece) in split_top_level(src, ';')? {
        if piece.trim().is_empty() {
            continue;
        }

        let Some((key, value)) = piece.split_once('=') else {
            return Err(Error::parse(
                format!("expected `key=value`, found `{}`", piece.trim()),
                offset,
            ));
        };

        let value_offset = offset + key.len() + 1;
        apply(&mut options, key.trim(), value).map_err(|err| err.shift_offset(value_offset))?;
    }

    Ok(options)
}

fn apply(options: &mut QueryOptions, key: &str, value: &str) -> Result<()> {
    let name = key.strip_prefix('$').unwrap_or(key).to_ascii_lowercase();

    match &name[..] {
        "top" => {
            ensure_unset(key, options.top.is_some())?;
            options.top = Some(parse_count(value)?);
        }
        "skip" => {
            ensure_unset(key, options.skip.is_some())?;
            options.skip = Some(parse_count(value)?);
        }
        "filter" => {
            ensure_unset(key, options.filter.is_some())?;
            options.filter = Some(Parser::new(value).parse_filter()?);
        }
        "orderby" => {
            ensure_unset(key, !options.order_by.is_empty())?;
            options.order_by = Parser::new(value).parse_order_by()?;
        }
        "expand" => {
            ensure_unset(key, !options.expand.is_empty())?;
            options.expand = parse_expand(value)?;
        }
        _ => {
            return Err(Error::invalid_query_options(format!(
                "unknown query option `{key}`"
            )));
        }
    }

    Ok(())
}

fn ensure_unset(key: &str, is_set: bool) -> Result<()> {
    if is_set {
        return Err(Error::invalid_query_options(format!(
            "query option `{key}` given more than once"
        )));
    }

    Ok(())
}

/// Negative values parse here and are rejected by validation.
fn parse_count(value: &str) -> Result<i64> {
    let trimmed = value.trim();

    trimmed
        .parse()
        .map_err(|_| Error::parse(format!("`{trimmed}` is not an integer"), 0))
}
