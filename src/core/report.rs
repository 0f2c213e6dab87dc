//! Text formatting shared by the catalog, delivery, and order renderings.
//!
//! Every amount shown to the shopper goes through [`format_rupees`] so that menus,
//! confirmations, and the final summary agree on how a price looks.

/// Currency symbol prefixed to every rendered amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats an amount with the rupee symbol.
///
/// Whole amounts keep a single decimal place (`₹60.0`); fractional amounts use the
/// shortest decimal that round-trips (`₹12.5`). No padding to two places is applied,
/// and large amounts stay in plain decimal form (`₹10000000.0`).
///
/// # Arguments
/// * `amount` - The amount to render
///
/// # Returns
/// Formatted string like "₹60.0" or "₹12.5"
#[must_use]
pub fn format_rupees(amount: f64) -> String {
    #[allow(clippy::float_cmp)]
    let is_whole = amount.is_finite() && amount.fract() == 0.0;
    if is_whole {
        format!("{CURRENCY_SYMBOL}{amount:.1}")
    } else {
        format!("{CURRENCY_SYMBOL}{amount}")
    }
}

/// Renders a 1-based numbered menu, one entry per line.
///
/// Creates lines like `1. Vegetables` for each item in order.
#[must_use]
pub fn format_numbered_menu<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item.as_ref()))
        .collect()
}
