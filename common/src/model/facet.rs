use std::fmt;

/// The single filter axis of the applications screen.
///
/// An application contributes its explicit status when it has one and the
/// locale date of its creation otherwise. Both kinds share one dropdown, so
/// "Pending" and "1/15/2024" are peers in the same list. This mirrors how
/// the screen has always behaved; splitting it into a status filter and a
/// date filter needs a product decision first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Facet {
    Status(String),
    Date(String),
}

impl Facet {
    pub fn label(&self) -> &str {
        match self {
            Facet::Status(label) | Facet::Date(label) => label,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
