use ventry as crate_root;

use chrono::NaiveDate;
use crate_root::config;
use crate_root::query::Query;
use crate_root::state::{
    AppState, Filters, InventoryItem, PageWindow, Product, ProductForm, SortColumn, SortDirection,
    SortSpec, StockStatus,
};
use crate_root::util;

fn item(id: i64, name: &str, quantity: i64, status: StockStatus) -> InventoryItem {
    InventoryItem {
        id,
        product: Product {
            id,
            name: name.to_string(),
            category: "Food".to_string(),
            price: 2.5,
            expiry_date: None,
            date_created: None,
            date_updated: None,
        },
        quantity,
        stock_status: status,
    }
}

#[test]
fn sort_click_sequence_matches_header_behavior() {
    let mut sort = SortSpec::new();
    // Click name twice: descending then ascending.
    sort.toggle(SortColumn::Name);
    sort.toggle(SortColumn::Name);
    assert_eq!(
        sort.status_of(SortColumn::Name),
        Some((0, SortDirection::Ascending))
    );
    // Activate price and stock; name (oldest) gets evicted on the third.
    sort.toggle(SortColumn::Price);
    sort.toggle(SortColumn::Stock);
    assert_eq!(sort.status_of(SortColumn::Name), None);
    assert_eq!(
        sort.status_of(SortColumn::Price),
        Some((0, SortDirection::Descending))
    );
    assert_eq!(
        sort.status_of(SortColumn::Stock),
        Some((1, SortDirection::Descending))
    );
    // Third click on an active column removes it; reactivation starts over
    // at descending.
    sort.toggle(SortColumn::Price);
    sort.toggle(SortColumn::Price);
    sort.toggle(SortColumn::Price);
    assert_eq!(
        sort.status_of(SortColumn::Price),
        Some((1, SortDirection::Descending))
    );
}

#[test]
fn query_snapshot_reflects_all_containers() {
    let mut app = AppState::default();
    app.filters.search = "milk".to_string();
    app.filters.toggle_category("Dairy");
    app.filters.cycle_stock_status();
    app.sort.toggle(SortColumn::ExpiryDate);
    app.pages.set_total_items(60);
    app.pages.set_current_page(2);

    let q = Query::build(&app.filters, &app.sort, &app.pages);
    let params = q.params();
    assert!(params.contains(&("page", "2".to_string())));
    assert!(params.contains(&("size", "10".to_string())));
    assert!(params.contains(&("sortBy", "expirydate".to_string())));
    assert!(params.contains(&("sortOrder", "desc".to_string())));
    assert!(params.contains(&("search", "milk".to_string())));
    assert!(params.contains(&("categories", "Dairy".to_string())));
    assert!(params.contains(&("stockStatus", "IN_STOCK".to_string())));
}

/// What: sequence ids distinguish stale fetches from the latest one
///
/// - Input: two allocated fetch ids
/// - Output: only the second matches `latest_seq`, so a response carrying
///   the first would be dropped
#[test]
fn stale_fetch_results_are_identifiable() {
    let mut app = AppState::default();
    let first = app.allocate_seq();
    let second = app.allocate_seq();
    assert!(second > first);
    // Only the latest id may be applied.
    assert_ne!(first, app.latest_seq);
    assert_eq!(second, app.latest_seq);
}

#[test]
fn shrinking_result_set_resets_then_clamps_page() {
    let mut pages = PageWindow::new(10);
    pages.set_total_items(95); // 10 pages
    pages.set_current_page(8);
    // Deleting items changes the total; the window snaps back to page 1.
    pages.set_total_items(41);
    assert_eq!(pages.current_page(), 1);
    assert_eq!(pages.page_count(), 5);
    // A stale page index past the end clamps to the last page.
    pages.set_current_page(12);
    pages.clamp_current();
    assert_eq!(pages.current_page(), 5);
}

/// What: badges derive from fetched stock status and optimistic flips revert
///
/// - Input: a fetched page, one optimistic toggle, then a forced rollback
/// - Output: badge state matches the backend again after the rollback
#[test]
fn fetched_rows_drive_badges_and_survive_rollback() {
    let mut app = AppState::default();
    app.table.set_rows(vec![
        item(1, "Milk", 8, StockStatus::LowStock),
        item(2, "Bread", 0, StockStatus::OutOfStock),
    ]);
    assert!(!app.table.is_marked_out(1));
    assert!(app.table.is_marked_out(2));

    // Optimistic flip, then the backend call fails and the flag reverts.
    assert!(app.table.toggle_mark(1));
    app.table.set_mark(1, false);
    assert!(!app.table.is_marked_out(1));
}

#[test]
fn form_round_trip_preserves_edited_record() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
    let mut existing = item(7, "Oat Cookies", 15, StockStatus::InStock);
    existing.product.expiry_date = NaiveDate::from_ymd_opt(2026, 10, 1);

    let mut form = ProductForm::edit(&existing);
    assert_eq!(form.editing, Some(7));
    assert_eq!(form.expiry, "2026-10-01");
    form.stock = "20".to_string();
    let updated = form.validate(today).expect("valid form");
    assert_eq!(updated.id, 7);
    assert_eq!(updated.quantity, 20);
    assert_eq!(updated.product.expiry_date, existing.product.expiry_date);
}

#[test]
fn severity_bands_match_display_rules() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
    let soon = NaiveDate::from_ymd_opt(2026, 9, 2);
    let near = NaiveDate::from_ymd_opt(2026, 9, 9);
    let far = NaiveDate::from_ymd_opt(2026, 12, 1);
    assert_eq!(util::expiry_band(soon, today), util::ExpiryBand::Imminent);
    assert_eq!(util::expiry_band(near, today), util::ExpiryBand::Near);
    assert_eq!(util::expiry_band(far, today), util::ExpiryBand::Far);
    assert_eq!(util::stock_band(3), util::StockBand::Critical);
    assert_eq!(util::stock_band(7), util::StockBand::Low);
    assert_eq!(util::stock_band(30), util::StockBand::Normal);
}

#[test]
fn settings_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.conf");
    std::fs::write(
        &path,
        "api_base_url = http://stock.lan:8080\npage_size_default = 5\n",
    )
    .expect("write");
    let text = std::fs::read_to_string(&path).expect("read");
    let s = config::parse_settings(&text);
    assert_eq!(s.api_base_url, "http://stock.lan:8080");
    assert_eq!(s.page_size_default, 5);
}

#[test]
fn category_filter_is_additive_and_reversible() {
    let mut filters = Filters::default();
    filters.toggle_category("Food");
    filters.toggle_category("Dairy");
    let q = Query::build(&filters, &SortSpec::new(), &PageWindow::default());
    assert_eq!(q.categories, vec!["Food", "Dairy"]);
    filters.toggle_category("Food");
    let q = Query::build(&filters, &SortSpec::new(), &PageWindow::default());
    assert_eq!(q.categories, vec!["Dairy"]);
}
