//! Create/edit product form: field buffers and client-side validation.
//!
//! Validation failures never reach the network; they block submission and
//! surface as an inline message on the form.

use chrono::NaiveDate;

use crate::state::types::{InventoryItem, Product, StockStatus};

/// Stock quantity pre-filled for new products.
const DEFAULT_STOCK: &str = "10";

/// Message shown when the name contains characters outside `[A-Za-z0-9 ]`.
const NAME_CHARSET_MSG: &str = "Only letters (A-Z, a-z) and numbers are allowed.";
/// Generic message for missing/zero required fields.
const INVALID_FIELDS_MSG: &str = "Some fields contain errors. Please review and try again.";
/// Message shown for a past or unparsable expiration date.
const EXPIRY_MSG: &str = "Expiration date must be a future date (YYYY-MM-DD).";

/// Which form field currently receives keystrokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    /// Product name.
    Name,
    /// Category (existing or newly typed).
    Category,
    /// Stock quantity.
    Stock,
    /// Unit price.
    Price,
    /// Optional expiration date.
    Expiry,
}

impl FormField {
    /// Fields in tab order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Category,
        Self::Stock,
        Self::Price,
        Self::Expiry,
    ];

    /// Next field in tab order, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous field in tab order, wrapping.
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Form label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Product name",
            Self::Category => "Category",
            Self::Stock => "Stock",
            Self::Price => "Unit Price",
            Self::Expiry => "Expiration Date",
        }
    }
}

/// Buffered form state for creating or editing a product.
#[derive(Clone, Debug)]
pub struct ProductForm {
    /// Inventory id being edited, or `None` when creating.
    pub editing: Option<i64>,
    /// Product name buffer.
    pub name: String,
    /// Category buffer.
    pub category: String,
    /// Stock quantity buffer.
    pub stock: String,
    /// Unit price buffer.
    pub price: String,
    /// Expiration date buffer (`YYYY-MM-DD` or empty).
    pub expiry: String,
    /// Field with input focus.
    pub field: FormField,
    /// Inline validation or submission message, if the last submit failed.
    pub error: Option<String>,
    /// Set while a submission is in flight; cleared when the backend
    /// rejects it so the user can edit and retry.
    pub submitting: bool,
}

impl ProductForm {
    /// Empty form for a new product.
    #[must_use]
    pub fn new() -> Self {
        Self {
            editing: None,
            name: String::new(),
            category: String::new(),
            stock: DEFAULT_STOCK.to_string(),
            price: String::new(),
            expiry: String::new(),
            field: FormField::Name,
            error: None,
            submitting: false,
        }
    }

    /// Form pre-filled from an existing inventory item.
    #[must_use]
    pub fn edit(item: &InventoryItem) -> Self {
        Self {
            editing: Some(item.id),
            name: item.product.name.clone(),
            category: item.product.category.clone(),
            stock: item.quantity.to_string(),
            price: item.product.price.to_string(),
            expiry: item
                .product
                .expiry_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            field: FormField::Name,
            error: None,
            submitting: false,
        }
    }

    /// Append a character to the focused field's buffer.
    pub fn input_char(&mut self, c: char) {
        self.buffer_mut().push(c);
        self.error = None;
    }

    /// Delete the last character of the focused field's buffer.
    pub fn backspace(&mut self) {
        self.buffer_mut().pop();
        self.error = None;
    }

    /// Buffer of the focused field.
    #[must_use]
    pub fn buffer(&self) -> &str {
        match self.field {
            FormField::Name => &self.name,
            FormField::Category => &self.category,
            FormField::Stock => &self.stock,
            FormField::Price => &self.price,
            FormField::Expiry => &self.expiry,
        }
    }

    fn buffer_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Name => &mut self.name,
            FormField::Category => &mut self.category,
            FormField::Stock => &mut self.stock,
            FormField::Price => &mut self.price,
            FormField::Expiry => &mut self.expiry,
        }
    }

    /// Validate the buffers and build the wire record for submission.
    ///
    /// Rules: name non-empty and `[A-Za-z0-9 ]` only; category non-empty;
    /// stock and price parse and are non-zero; expiry, when given, is a
    /// `YYYY-MM-DD` date strictly after `today`. New records are submitted
    /// as in-stock.
    pub fn validate(&self, today: NaiveDate) -> Result<InventoryItem, String> {
        if !self
            .name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ')
        {
            return Err(NAME_CHARSET_MSG.to_string());
        }
        if self.name.trim().is_empty() || self.category.trim().is_empty() {
            return Err(INVALID_FIELDS_MSG.to_string());
        }
        let quantity: i64 = self
            .stock
            .trim()
            .parse()
            .map_err(|_| INVALID_FIELDS_MSG.to_string())?;
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| INVALID_FIELDS_MSG.to_string())?;
        if quantity == 0 || price == 0.0 {
            return Err(INVALID_FIELDS_MSG.to_string());
        }
        let expiry_date = if self.expiry.trim().is_empty() {
            None
        } else {
            let date = NaiveDate::parse_from_str(self.expiry.trim(), "%Y-%m-%d")
                .map_err(|_| EXPIRY_MSG.to_string())?;
            if date <= today {
                return Err(EXPIRY_MSG.to_string());
            }
            Some(date)
        };

        let id = self.editing.unwrap_or(0);
        Ok(InventoryItem {
            id,
            product: Product {
                id,
                name: self.name.clone(),
                category: self.category.trim().to_string(),
                price,
                expiry_date,
                date_created: Some(today),
                date_updated: Some(today),
            },
            quantity,
            stock_status: StockStatus::InStock,
        })
    }
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
    }

    fn filled() -> ProductForm {
        let mut form = ProductForm::new();
        form.name = "Chocolate Cookies".into();
        form.category = "Food".into();
        form.stock = "12".into();
        form.price = "4.50".into();
        form
    }

    #[test]
    fn valid_form_builds_in_stock_item() {
        let item = filled().validate(today()).unwrap();
        assert_eq!(item.id, 0);
        assert_eq!(item.product.name, "Chocolate Cookies");
        assert_eq!(item.quantity, 12);
        assert_eq!(item.stock_status, StockStatus::InStock);
        assert_eq!(item.product.expiry_date, None);
    }

    #[test]
    fn name_charset_is_enforced() {
        let mut form = filled();
        form.name = "Choc@late!".into();
        let err = form.validate(today()).unwrap_err();
        assert!(err.contains("letters"));
    }

    #[test]
    fn required_and_nonzero_fields_block_submission() {
        let mut form = filled();
        form.category = String::new();
        assert!(form.validate(today()).is_err());

        let mut form = filled();
        form.stock = "0".into();
        assert!(form.validate(today()).is_err());

        let mut form = filled();
        form.price = "0".into();
        assert!(form.validate(today()).is_err());

        let mut form = filled();
        form.stock = "a lot".into();
        assert!(form.validate(today()).is_err());
    }

    #[test]
    fn expiry_must_be_in_the_future() {
        let mut form = filled();
        form.expiry = "2026-08-28".into(); // today
        assert!(form.validate(today()).is_err());
        form.expiry = "2026-08-29".into(); // tomorrow
        let item = form.validate(today()).unwrap();
        assert_eq!(
            item.product.expiry_date,
            NaiveDate::from_ymd_opt(2026, 8, 29)
        );
    }

    #[test]
    fn edit_prefills_and_keeps_id() {
        let source = filled().validate(today()).unwrap();
        let mut existing = source.clone();
        existing.id = 42;
        existing.product.id = 42;
        let form = ProductForm::edit(&existing);
        assert_eq!(form.editing, Some(42));
        assert_eq!(form.stock, "12");
        let resubmitted = form.validate(today()).unwrap();
        assert_eq!(resubmitted.id, 42);
    }

    #[test]
    fn typing_targets_focused_field() {
        let mut form = ProductForm::new();
        form.input_char('M');
        form.field = FormField::Price;
        form.input_char('9');
        assert_eq!(form.name, "M");
        assert_eq!(form.price, "9");
        form.backspace();
        assert_eq!(form.price, "");
    }
}
