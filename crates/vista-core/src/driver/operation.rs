mod insert;
pub use insert::Insert;

mod scan;
pub use scan::Scan;

#[derive(Debug)]
pub enum Operation {
    /// Store new rows
    Insert(Insert),

    /// Read every row of a source model
    Scan(Scan),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Insert(_) => "insert",
            Self::Scan(_) => "scan",
        }
    }
}
