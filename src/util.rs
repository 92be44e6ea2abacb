//! Small presentation helpers shared by the table and metrics views.

use chrono::{Local, NaiveDate};

/// Severity band for a product's expiration date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpiryBand {
    /// No expiration date set.
    None,
    /// Expires within 7 days (or already expired).
    Imminent,
    /// Expires within 14 days.
    Near,
    /// More than 14 days away.
    Far,
}

/// Classify an expiration date relative to `today`.
#[must_use]
pub fn expiry_band(expiry: Option<NaiveDate>, today: NaiveDate) -> ExpiryBand {
    let Some(date) = expiry else {
        return ExpiryBand::None;
    };
    let days = (date - today).num_days();
    if days <= 7 {
        ExpiryBand::Imminent
    } else if days <= 14 {
        ExpiryBand::Near
    } else {
        ExpiryBand::Far
    }
}

/// Severity band for a stock quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockBand {
    /// Fewer than 5 units.
    Critical,
    /// 5 to 10 units.
    Low,
    /// More than 10 units.
    Normal,
}

/// Classify a stock quantity.
#[must_use]
pub const fn stock_band(quantity: i64) -> StockBand {
    if quantity < 5 {
        StockBand::Critical
    } else if quantity <= 10 {
        StockBand::Low
    } else {
        StockBand::Normal
    }
}

/// Format a price with two decimals.
#[must_use]
pub fn fmt_money(value: f64) -> String {
    format!("{value:.2}")
}

/// Today's date in the local timezone.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn expiry_bands_split_at_one_and_two_weeks() {
        let today = d(2026, 8, 28);
        assert_eq!(expiry_band(None, today), ExpiryBand::None);
        assert_eq!(expiry_band(Some(d(2026, 8, 20)), today), ExpiryBand::Imminent);
        assert_eq!(expiry_band(Some(d(2026, 9, 4)), today), ExpiryBand::Imminent);
        assert_eq!(expiry_band(Some(d(2026, 9, 5)), today), ExpiryBand::Near);
        assert_eq!(expiry_band(Some(d(2026, 9, 11)), today), ExpiryBand::Near);
        assert_eq!(expiry_band(Some(d(2026, 9, 12)), today), ExpiryBand::Far);
    }

    #[test]
    fn stock_bands_split_at_five_and_ten() {
        assert_eq!(stock_band(0), StockBand::Critical);
        assert_eq!(stock_band(4), StockBand::Critical);
        assert_eq!(stock_band(5), StockBand::Low);
        assert_eq!(stock_band(10), StockBand::Low);
        assert_eq!(stock_band(11), StockBand::Normal);
    }

    #[test]
    fn money_always_shows_cents() {
        assert_eq!(fmt_money(4.5), "4.50");
        assert_eq!(fmt_money(12.0), "12.00");
        assert_eq!(fmt_money(0.999), "1.00");
    }
}
