/// Finds the position of `name` among `names`.
///
/// An exact match wins. Otherwise the first ASCII case-insensitive match is
/// returned, so `name` resolves to a member declared as `Name`.
pub(crate) fn position<'a>(
    mut names: impl Iterator<Item = &'a str> + Clone,
    name: &str,
) -> Option<usize> {
    if let Some(index) = names.clone().position(|candidate| candidate == name) {
        return Some(index);
    }

    names.position(|candidate| candidate.eq_ignore_ascii_case(name))
}
