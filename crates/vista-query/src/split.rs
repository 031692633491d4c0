use vista_core::{Error, Result};

/// Splits `src` on `sep` where it appears outside quotes and parentheses.
///
/// Each piece is returned with its byte offset in `src`. Pieces are not
/// trimmed.
pub(crate) fn split_top_level(src: &str, sep: char) -> Result<Vec<(usize, &str)>> {
    let mut pieces = vec![];
    let mut depth = 0_usize;
    let mut quoted = None;
    let mut start = 0;

    for (offset, ch) in src.char_indices() {
        if quoted.is_some() {
            // A doubled quote closes and immediately reopens
            if ch == '\'' {
                quoted = None;
            }
            continue;
        }

        match ch {
            '\'' => quoted = Some(offset),
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return Err(Error::parse("unbalanced `)`", offset));
                }
                depth -= 1;
            }
            _ if ch == sep && depth == 0 => {
                pieces.push((start, &src[start..offset]));
                start = offset + ch.len_utf8();
            }
            _ => {}
        }
    }

    if let Some(open) = quoted {
        return Err(Error::parse("unterminated string literal", open));
    }

    if depth > 0 {
        return Err(Error::parse("unclosed `(`", src.len()));
    }

    pieces.push((start, &src[start..]));
    Ok(pieces)
}
