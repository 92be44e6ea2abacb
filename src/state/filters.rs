//! Filter criteria applied to the product list.

use crate::state::types::StockStatus;

/// Value object describing what the list is filtered by.
///
/// Owned by the search/filter bar and replaced wholesale on each user edit;
/// the fetch cycle only reads it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    /// Free-text search over product names, passed to the backend verbatim.
    pub search: String,
    /// Selected category names; unordered, no duplicates.
    pub categories: Vec<String>,
    /// Stock-status filter, or `None` for "Availability" (no filter).
    pub stock_status: Option<StockStatus>,
}

impl Filters {
    /// Add `category` to the selection, or remove it if already selected.
    pub fn toggle_category(&mut self, category: &str) {
        if let Some(pos) = self.categories.iter().position(|c| c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category.to_string());
        }
    }

    /// Step the availability filter: none → In Stock → Low stock →
    /// Out of Stock → none.
    pub fn cycle_stock_status(&mut self) {
        self.stock_status = match self.stock_status {
            None => Some(StockStatus::ALL[0]),
            Some(current) => StockStatus::ALL
                .iter()
                .position(|&s| s == current)
                .and_then(|idx| StockStatus::ALL.get(idx + 1))
                .copied(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_category_adds_and_removes() {
        let mut f = Filters::default();
        f.toggle_category("Food");
        f.toggle_category("Dairy");
        assert_eq!(f.categories, vec!["Food", "Dairy"]);
        f.toggle_category("Food");
        assert_eq!(f.categories, vec!["Dairy"]);
        // No duplicates ever.
        f.toggle_category("Dairy");
        f.toggle_category("Dairy");
        assert_eq!(f.categories, vec!["Dairy"]);
    }

    #[test]
    fn stock_status_cycles_back_to_none() {
        let mut f = Filters::default();
        f.cycle_stock_status();
        assert_eq!(f.stock_status, Some(StockStatus::InStock));
        f.cycle_stock_status();
        assert_eq!(f.stock_status, Some(StockStatus::LowStock));
        f.cycle_stock_status();
        assert_eq!(f.stock_status, Some(StockStatus::OutOfStock));
        f.cycle_stock_status();
        assert_eq!(f.stock_status, None);
    }
}
