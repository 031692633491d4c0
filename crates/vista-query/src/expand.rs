use crate::{options::parse_nested, split::split_top_level};
use indexmap::IndexMap;
use vista_core::{options::Path, Error, QueryOptions, Result};

/// Parses an expand list such as `Builder/City,Buildings($top=2;$orderby=Name)`.
///
/// `A/B` expands `B` under `A`. Items naming the same relation are merged.
pub fn parse_expand(src: &str) -> Result<IndexMap<String, QueryOptions>> {
    let mut root = QueryOptions::default();

    for (offset, piece) in split_top_level(src, ',')? {
        let (path, options) = parse_item(offset, piece)?;

        let mut steps = path.steps().iter().rev();
        let Some(last) = steps.next() else {
            return Err(Error::parse("empty expand item", offset));
        };

        // Wrap the options from the innermost step outwards
        let mut name = last.clone();
        let mut options = options;

        for step in steps {
            options = QueryOptions::default().expand_with(name, options);
            name = step.clone();
        }

        root.merge_expand(name, options)?;
    }

    Ok(root.expand)
}

fn parse_item(offset: usize, piece: &str) -> Result<(Path, QueryOptions)> {
    let leading = piece.len() - piece.trim_start().len();
    let item = piece.trim();
    let offset = offset + leading;

    if item.is_empty() {
        return Err(Error::parse("empty expand item", offset));
    }

    let Some(open) = item.find('(') else {
        return Ok((Path::parse(item), QueryOptions::default()));
    };

    let Some(inner) = item[open + 1..].strip_suffix(')') else {
        return Err(Error::parse(
            format!("unexpected input after `{}`", &item[..open]),
            offset + open,
        ));
    };

    let options = parse_nested(inner).map_err(|err| err.shift_offset(offset + open + 1))?;

    Ok((Path::parse(item[..open].trim_end()), options))
}
