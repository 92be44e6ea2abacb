//! Multi-column sort state for the product table.
//!
//! The backend accepts up to two `sortBy`/`sortOrder` parameter pairs; this
//! module owns which columns are active, in which direction, and in which
//! precedence order. All mutation goes through [`SortSpec::toggle`].

/// A sortable column of the product table, named by its backend query key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    /// Product name.
    Name,
    /// Product category.
    Category,
    /// Unit price.
    Price,
    /// Expiration date.
    ExpiryDate,
    /// Quantity on hand.
    Stock,
}

impl SortColumn {
    /// All columns in table order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Category,
        Self::Price,
        Self::ExpiryDate,
        Self::Stock,
    ];

    /// Backend query key for the `sortBy` parameter.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Price => "price",
            Self::ExpiryDate => "expirydate",
            Self::Stock => "stock",
        }
    }

    /// Parse a backend query key or settings value back into a column.
    #[must_use]
    pub fn from_param(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "category" => Some(Self::Category),
            "price" => Some(Self::Price),
            "expirydate" | "expiry_date" | "expiry" => Some(Self::ExpiryDate),
            "stock" | "quantity" => Some(Self::Stock),
            _ => None,
        }
    }

    /// Column header label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Category => "Category",
            Self::Price => "Price",
            Self::ExpiryDate => "Expiration Date",
            Self::Stock => "Stock",
        }
    }
}

/// Direction of an active sort column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// Backend query value for the `sortOrder` parameter.
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Arrow glyph for the table header.
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::Ascending => '▲',
            Self::Descending => '▼',
        }
    }
}

/// Ordered list of active sort columns with their directions.
///
/// Invariants: a column appears at most once, the list never exceeds
/// [`Self::MAX_ACTIVE`] entries, and list order is sort precedence
/// (first entry is the primary sort).
#[derive(Clone, Debug, Default)]
pub struct SortSpec {
    entries: Vec<(SortColumn, SortDirection)>,
}

impl SortSpec {
    /// Cap on simultaneously active sort columns.
    pub const MAX_ACTIVE: usize = 2;

    /// Construct an empty spec (no server-side ordering).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Cycle `column` through its states: inactive → descending → ascending
    /// → inactive.
    ///
    /// Activating a column when [`Self::MAX_ACTIVE`] are already active
    /// evicts the oldest (first-activated) entry. A freshly activated column
    /// always starts descending; no direction is remembered across removal.
    /// Callers must re-run the fetch cycle after any toggle.
    pub fn toggle(&mut self, column: SortColumn) {
        if let Some(pos) = self.entries.iter().position(|(c, _)| *c == column) {
            match self.entries[pos].1 {
                SortDirection::Descending => self.entries[pos].1 = SortDirection::Ascending,
                // Ascending is the last state before deactivation.
                SortDirection::Ascending => {
                    self.entries.remove(pos);
                }
            }
        } else {
            if self.entries.len() == Self::MAX_ACTIVE {
                self.entries.remove(0);
            }
            self.entries.push((column, SortDirection::Descending));
        }
    }

    /// Active entries in precedence order.
    #[must_use]
    pub fn entries(&self) -> &[(SortColumn, SortDirection)] {
        &self.entries
    }

    /// Precedence index and direction of `column`, if active.
    #[must_use]
    pub fn status_of(&self, column: SortColumn) -> Option<(usize, SortDirection)> {
        self.entries
            .iter()
            .position(|(c, _)| *c == column)
            .map(|pos| (pos, self.entries[pos].1))
    }

    /// Whether no column is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
