/// Sort direction of an order-by clause.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn is_asc(self) -> bool {
        matches!(self, Direction::Asc)
    }

    pub fn is_desc(self) -> bool {
        matches!(self, Direction::Desc)
    }
}
