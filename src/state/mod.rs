//! Core application state for Ventry's TUI.
//!
//! Unlike a single shared blob, state is split into one container per
//! concern — sorting, pagination, filters, the fetched table page, and the
//! product form — each with a single writer. [`AppState`] composes them and
//! adds the UI chrome (focus, modal, refresh bookkeeping) mutated by the
//! event and UI layers.

mod filters;
mod form;
mod pagination;
mod sort;
mod table;
mod types;

pub use filters::Filters;
pub use form::{FormField, ProductForm};
pub use pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZES, PageWindow};
pub use sort::{SortColumn, SortDirection, SortSpec};
pub use table::ProductTable;
pub use types::{
    CategoryMetric, InventoryItem, Metrics, PaginatedResponse, Product, StockStatus,
};

/// Which UI pane currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Search input at the top.
    Search,
    /// Product table.
    #[default]
    Table,
}

/// Modal dialog state for the UI.
#[derive(Debug, Clone, Default)]
pub enum Modal {
    /// No modal open.
    #[default]
    None,
    /// Informational alert with a non-interactive message.
    Alert {
        /// Message body.
        message: String,
    },
    /// Create/edit product form.
    Form(ProductForm),
    /// Confirmation dialog for deleting one item.
    ConfirmDelete {
        /// The item to delete.
        item: InventoryItem,
    },
    /// Confirmation dialog for marking the whole page out of stock.
    ConfirmMarkPage {
        /// Number of rows on the page.
        count: usize,
    },
}

/// Application state shared by the event, networking, and UI layers.
#[derive(Debug, Default)]
pub struct AppState {
    /// Filter criteria owned by the search/filter bar.
    pub filters: Filters,
    /// Active sort columns.
    pub sort: SortSpec,
    /// Paging window over the filtered set.
    pub pages: PageWindow,
    /// Fetched page of rows plus badges and selection.
    pub table: ProductTable,
    /// Categories offered by the filter bar and the form.
    pub categories: Vec<String>,
    /// Last fetched metrics summary, if any.
    pub metrics: Option<Metrics>,
    /// Whether the metrics pane is visible.
    pub metrics_visible: bool,
    /// Pane with keyboard focus.
    pub focus: Focus,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// Set when the fetch cycle must re-run (filters/sort/page changed or a
    /// mutation completed).
    pub refresh_needed: bool,
    /// Identifier of the latest fetch whose results may be displayed.
    pub latest_seq: u64,
    /// Next fetch identifier to allocate.
    pub next_seq: u64,
}

impl AppState {
    /// Signal that dependent data must be refetched.
    pub const fn request_refresh(&mut self) {
        self.refresh_needed = true;
    }

    /// Consume the refresh flag, returning whether it was set.
    pub const fn take_refresh(&mut self) -> bool {
        let was = self.refresh_needed;
        self.refresh_needed = false;
        was
    }

    /// Allocate the next fetch sequence id and record it as the latest.
    ///
    /// Responses tagged with an older id must be discarded by the receiver.
    pub const fn allocate_seq(&mut self) -> u64 {
        let id = self.next_seq;
        self.next_seq += 1;
        self.latest_seq = id;
        id
    }
}
