//! The fetched page of inventory rows and its derived display state.
//!
//! Rows are replaced wholesale on every fetch completion. The per-row
//! out-of-stock badge is derived from the fetched `stockStatus` and flipped
//! optimistically when the user toggles it, before the backend confirms.

use std::collections::HashMap;

use ratatui::widgets::TableState;

use crate::state::types::{InventoryItem, StockStatus};

/// Current page of rows plus selection and badge state.
#[derive(Debug, Default)]
pub struct ProductTable {
    rows: Vec<InventoryItem>,
    /// Badge flags keyed by inventory id; `true` means "Out of Stock".
    marked_out: HashMap<i64, bool>,
    /// Index into `rows` that is currently highlighted.
    pub selected: usize,
    /// Table widget selection/scroll state.
    pub view: TableState,
}

impl ProductTable {
    /// Replace the page with freshly fetched rows.
    ///
    /// Re-derives every badge from the fetched stock status and clamps the
    /// selection to the new bounds.
    pub fn set_rows(&mut self, rows: Vec<InventoryItem>) {
        self.marked_out = rows
            .iter()
            .map(|it| (it.id, it.stock_status == StockStatus::OutOfStock))
            .collect();
        self.rows = rows;
        if self.rows.is_empty() {
            self.selected = 0;
            self.view.select(None);
        } else {
            self.selected = self.selected.min(self.rows.len() - 1);
            self.view.select(Some(self.selected));
        }
    }

    /// Rows of the current page.
    #[must_use]
    pub fn rows(&self) -> &[InventoryItem] {
        &self.rows
    }

    /// Inventory ids of every row on the page.
    #[must_use]
    pub fn row_ids(&self) -> Vec<i64> {
        self.rows.iter().map(|it| it.id).collect()
    }

    /// Whether the badge for `id` currently reads "Out of Stock".
    #[must_use]
    pub fn is_marked_out(&self, id: i64) -> bool {
        self.marked_out.get(&id).copied().unwrap_or(false)
    }

    /// Optimistically flip the badge for `id`, returning the new flag.
    pub fn toggle_mark(&mut self, id: i64) -> bool {
        let flag = !self.is_marked_out(id);
        self.marked_out.insert(id, flag);
        flag
    }

    /// Force the badge for `id`, used to roll back a failed optimistic flip.
    pub fn set_mark(&mut self, id: i64, out_of_stock: bool) {
        self.marked_out.insert(id, out_of_stock);
    }

    /// Currently highlighted row, if any.
    #[must_use]
    pub fn selected_row(&self) -> Option<&InventoryItem> {
        self.rows.get(self.selected)
    }

    /// Move the highlight by `delta`, clamped to the page bounds.
    pub fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let len = self.rows.len() as isize;
        let idx = (self.selected as isize + delta).clamp(0, len - 1);
        self.selected = idx as usize;
        self.view.select(Some(self.selected));
    }

    /// Number of rows on the page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::Product;

    fn item(id: i64, status: StockStatus) -> InventoryItem {
        InventoryItem {
            id,
            product: Product {
                id,
                name: format!("item {id}"),
                category: "Food".into(),
                price: 1.0,
                expiry_date: None,
                date_created: None,
                date_updated: None,
            },
            quantity: 10,
            stock_status: status,
        }
    }

    #[test]
    fn badges_derive_from_stock_status() {
        let mut table = ProductTable::default();
        table.set_rows(vec![
            item(1, StockStatus::InStock),
            item(2, StockStatus::OutOfStock),
            item(3, StockStatus::LowStock),
        ]);
        assert!(!table.is_marked_out(1));
        assert!(table.is_marked_out(2));
        assert!(!table.is_marked_out(3));
    }

    #[test]
    fn optimistic_toggle_and_rollback() {
        let mut table = ProductTable::default();
        table.set_rows(vec![item(1, StockStatus::InStock)]);
        assert!(table.toggle_mark(1));
        assert!(table.is_marked_out(1));
        // Failed call rolls the flag back.
        table.set_mark(1, false);
        assert!(!table.is_marked_out(1));
    }

    #[test]
    fn selection_clamps_when_page_shrinks() {
        let mut table = ProductTable::default();
        table.set_rows(vec![
            item(1, StockStatus::InStock),
            item(2, StockStatus::InStock),
            item(3, StockStatus::InStock),
        ]);
        table.move_selection(10);
        assert_eq!(table.selected, 2);
        table.set_rows(vec![item(9, StockStatus::InStock)]);
        assert_eq!(table.selected, 0);
        assert_eq!(table.selected_row().map(|it| it.id), Some(9));
        table.set_rows(Vec::new());
        assert_eq!(table.selected, 0);
        assert!(table.selected_row().is_none());
    }
}
