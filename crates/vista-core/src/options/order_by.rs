use super::Path;
use crate::stmt::Direction;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByItem {
    pub path: Path,
    pub direction: Direction,
}

impl OrderByItem {
    pub fn asc(path: impl Into<Path>) -> Self {
        Self {
            path: path.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(path: impl Into<Path>) -> Self {
        Self {
            path: path.into(),
            direction: Direction::Desc,
        }
    }
}

impl From<Path> for OrderByItem {
    fn from(path: Path) -> Self {
        Self::asc(path)
    }
}
