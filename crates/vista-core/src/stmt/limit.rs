/// Skip/take window applied to the ordered rows of one query level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    /// Maximum number of rows to return
    pub limit: Option<usize>,

    /// Number of rows to skip before returning any
    pub offset: Option<usize>,
}

impl Limit {
    pub fn new(limit: Option<usize>, offset: Option<usize>) -> Option<Limit> {
        if limit.is_none() && offset.is_none() {
            None
        } else {
            Some(Limit { limit, offset })
        }
    }

    /// Applies the window to `items`, skipping first and then taking.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let offset = self.offset.unwrap_or(0);
        let limit = self.limit.unwrap_or(usize::MAX);
        items.into_iter().skip(offset).take(limit).collect()
    }
}
