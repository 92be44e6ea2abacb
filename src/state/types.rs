//! Wire-level data types shared with the inventory backend.
//!
//! Field names are camelCase on the wire and enum values use the backend's
//! SCREAMING_SNAKE_CASE names. The client holds only transient copies of
//! these records, one page at a time.

use chrono::NaiveDate;

/// Stock availability of an inventory item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    /// Item is available.
    InStock,
    /// Item is running low.
    LowStock,
    /// Item is unavailable.
    OutOfStock,
}

impl StockStatus {
    /// Filter cycle order used by the availability selector.
    pub const ALL: [Self; 3] = [Self::InStock, Self::LowStock, Self::OutOfStock];

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low stock",
            Self::OutOfStock => "Out of Stock",
        }
    }

    /// Backend query value for the `stockStatus` parameter.
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::InStock => "IN_STOCK",
            Self::LowStock => "LOW_STOCK",
            Self::OutOfStock => "OUT_OF_STOCK",
        }
    }
}

/// Product details carried inside an inventory item.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier (0 for not-yet-created records).
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Category the product belongs to.
    pub category: String,
    /// Unit price.
    pub price: f64,
    /// Expiration date, if the product expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    /// Date the record was created.
    #[serde(default)]
    pub date_created: Option<NaiveDate>,
    /// Date the record was last updated.
    #[serde(default)]
    pub date_updated: Option<NaiveDate>,
}

/// One inventory record: a product plus its quantity and stock status.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Unique inventory identifier.
    pub id: i64,
    /// The product details.
    pub product: Product,
    /// Quantity on hand.
    pub quantity: i64,
    /// Current stock status as reported by the backend.
    pub stock_status: StockStatus,
}

/// One page of inventory items plus the total across all pages.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse {
    /// Items for the requested page.
    pub items: Vec<InventoryItem>,
    /// Total number of items matching the filters.
    pub total_items: u64,
}

/// Per-category aggregate figures.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMetric {
    /// Category name.
    pub category: String,
    /// Number of products in stock within the category.
    pub total_products_in_stock: u64,
    /// Total monetary value in stock within the category.
    pub total_value_in_stock: f64,
    /// Average price in stock within the category.
    pub average_price_in_stock: f64,
}

/// Overall inventory metrics returned by the metrics endpoint.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Total monetary value of everything in stock.
    pub total_value_in_stock: f64,
    /// Average price across everything in stock.
    pub average_price_in_stock: f64,
    /// Breakdown per category.
    #[serde(default)]
    pub category_metrics: Vec<CategoryMetric>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_status_uses_backend_names() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"OUT_OF_STOCK\"");
        let back: StockStatus = serde_json::from_str("\"LOW_STOCK\"").unwrap();
        assert_eq!(back, StockStatus::LowStock);
    }

    #[test]
    fn response_parses_camel_case_payload() {
        let body = r#"{
            "items": [{
                "id": 3,
                "product": {
                    "id": 3,
                    "name": "Chocolate Cookies",
                    "category": "Food",
                    "price": 4.5,
                    "expiryDate": "2026-09-04",
                    "dateCreated": "2026-08-01",
                    "dateUpdated": "2026-08-01"
                },
                "quantity": 12,
                "stockStatus": "IN_STOCK"
            }],
            "totalItems": 47
        }"#;
        let page: PaginatedResponse = serde_json::from_str(body).unwrap();
        assert_eq!(page.total_items, 47);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].product.name, "Chocolate Cookies");
        assert_eq!(page.items[0].stock_status, StockStatus::InStock);
        assert_eq!(
            page.items[0].product.expiry_date,
            NaiveDate::from_ymd_opt(2026, 9, 4)
        );
    }

    #[test]
    fn item_without_expiry_omits_field() {
        let item = Product {
            id: 0,
            name: "Milk".into(),
            category: "Dairy".into(),
            price: 1.2,
            expiry_date: None,
            date_created: None,
            date_updated: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("expiryDate"));
    }
}
