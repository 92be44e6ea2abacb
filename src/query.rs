//! Query assembly for the list-fetch cycle.
//!
//! A [`Query`] is built fresh from the filter, sort, and paging containers on
//! every fetch and never persisted. Each dispatched fetch is tagged with a
//! monotonically increasing sequence id so stale responses can be discarded
//! when completions arrive out of order.

use crate::state::{Filters, InventoryItem, PageWindow, SortSpec, StockStatus};

/// Ephemeral snapshot of everything the list endpoint needs.
#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    /// 1-based page index.
    pub page: u64,
    /// Items per page.
    pub size: u64,
    /// Active sort columns with their directions, in precedence order.
    pub sort: Vec<(&'static str, &'static str)>,
    /// Free-text search, verbatim.
    pub search: String,
    /// Selected categories.
    pub categories: Vec<String>,
    /// Stock-status filter, if any.
    pub stock_status: Option<StockStatus>,
}

impl Query {
    /// Snapshot the three state containers into a query.
    #[must_use]
    pub fn build(filters: &Filters, sort: &SortSpec, pages: &PageWindow) -> Self {
        Self {
            page: pages.current_page(),
            size: pages.page_size(),
            sort: sort
                .entries()
                .iter()
                .map(|(col, dir)| (col.as_param(), dir.as_param()))
                .collect(),
            search: filters.search.clone(),
            categories: filters.categories.clone(),
            stock_status: filters.stock_status,
        }
    }

    /// Flatten into request parameters; repeated keys carry the sort pairs
    /// and category list.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];
        for (col, _) in &self.sort {
            params.push(("sortBy", (*col).to_string()));
        }
        for (_, dir) in &self.sort {
            params.push(("sortOrder", (*dir).to_string()));
        }
        params.push(("search", self.search.clone()));
        for cat in &self.categories {
            params.push(("categories", cat.clone()));
        }
        if let Some(status) = self.stock_status {
            params.push(("stockStatus", status.as_param().to_string()));
        }
        params
    }
}

/// A fetch dispatched to the list worker.
#[derive(Clone, Debug)]
pub struct FetchRequest {
    /// Monotonic identifier used to correlate the response.
    pub seq: u64,
    /// The assembled query.
    pub query: Query,
}

/// A page of results corresponding to a prior [`FetchRequest`].
#[derive(Clone, Debug)]
pub struct PageResult {
    /// Echoed identifier from the originating request.
    pub seq: u64,
    /// Items for the requested page.
    pub items: Vec<InventoryItem>,
    /// Total item count across all pages.
    pub total_items: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SortColumn;

    #[test]
    fn search_passes_through_verbatim() {
        let filters = Filters {
            search: "choc".into(),
            ..Filters::default()
        };
        let q = Query::build(&filters, &SortSpec::new(), &PageWindow::default());
        assert_eq!(q.search, "choc");
        let params = q.params();
        assert!(params.contains(&("search", "choc".to_string())));
        // No trimming or case folding.
        let filters = Filters {
            search: "  Choc ".into(),
            ..Filters::default()
        };
        let q = Query::build(&filters, &SortSpec::new(), &PageWindow::default());
        assert_eq!(q.search, "  Choc ");
    }

    #[test]
    fn params_carry_repeated_sort_pairs() {
        let mut sort = SortSpec::new();
        sort.toggle(SortColumn::Category);
        sort.toggle(SortColumn::Price);
        sort.toggle(SortColumn::Price); // price now ascending
        let q = Query::build(&Filters::default(), &sort, &PageWindow::default());
        let params = q.params();
        let sort_by: Vec<&str> = params
            .iter()
            .filter(|(k, _)| *k == "sortBy")
            .map(|(_, v)| v.as_str())
            .collect();
        let sort_order: Vec<&str> = params
            .iter()
            .filter(|(k, _)| *k == "sortOrder")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(sort_by, vec!["category", "price"]);
        assert_eq!(sort_order, vec!["desc", "asc"]);
    }

    #[test]
    fn params_include_window_and_filters() {
        let mut pages = PageWindow::new(20);
        pages.set_total_items(100);
        pages.set_current_page(3);
        let filters = Filters {
            search: String::new(),
            categories: vec!["Food".into(), "Dairy".into()],
            stock_status: Some(StockStatus::OutOfStock),
        };
        let q = Query::build(&filters, &SortSpec::new(), &pages);
        let params = q.params();
        assert!(params.contains(&("page", "3".to_string())));
        assert!(params.contains(&("size", "20".to_string())));
        assert!(params.contains(&("categories", "Food".to_string())));
        assert!(params.contains(&("categories", "Dairy".to_string())));
        assert!(params.contains(&("stockStatus", "OUT_OF_STOCK".to_string())));
    }

    #[test]
    fn no_stock_status_param_when_unfiltered() {
        let q = Query::build(&Filters::default(), &SortSpec::new(), &PageWindow::default());
        assert!(q.params().iter().all(|(k, _)| *k != "stockStatus"));
    }
}
