//! Order business logic - line items, running total, and the final summary.
//!
//! An [`Order`] borrows products from the catalog and owns its [`Delivery`]. It is
//! open for additions until [`Order::summary`] is produced, after which it is
//! finalized and refuses further lines.

use crate::{
    core::{catalog::Product, delivery::Delivery, report::format_rupees},
    errors::{Error, Result},
};
use tracing::{debug, info};

/// A validated per-line quantity in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u8);

impl Quantity {
    /// Smallest quantity a line may hold.
    pub const MIN: u8 = 1;
    /// Largest quantity a line may hold.
    pub const MAX: u8 = 5;

    /// Validates a raw quantity.
    ///
    /// # Errors
    /// Returns `Error::InvalidQuantity` if the value is outside `1..=5`.
    pub fn new(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|q| (Self::MIN..=Self::MAX).contains(q))
            .map(Self)
            .ok_or(Error::InvalidQuantity {
                quantity: value,
                min: Self::MIN,
                max: Self::MAX,
            })
    }

    /// The quantity as a plain integer.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// One product and quantity within an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine<'c> {
    product: &'c Product,
    quantity: Quantity,
}

impl<'c> OrderLine<'c> {
    /// The catalog product on this line.
    #[must_use]
    pub const fn product(&self) -> &'c Product {
        self.product
    }

    /// Quantity ordered.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Unit price times quantity, always recomputed.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.product.price() * f64::from(self.quantity.get())
    }

    /// Message shown right after the line is added.
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!(
            "{} x{} added to the order at {}",
            self.product.name(),
            self.quantity.get(),
            format_rupees(self.line_total())
        )
    }

    /// Summary rendering: `Vegetable: Potato x3 - ₹60.0`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {} x{} - {}",
            self.product.category(),
            self.product.name(),
            self.quantity.get(),
            format_rupees(self.line_total())
        )
    }
}

/// Lifecycle of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderState {
    /// Accepting new lines
    Open,
    /// Summary produced; closed to additions
    Finalized,
}

/// A shopper's order for one session.
#[derive(Debug)]
pub struct Order<'c> {
    lines: Vec<OrderLine<'c>>,
    running_total: f64,
    delivery: Delivery,
    state: OrderState,
}

impl<'c> Order<'c> {
    /// Starts an empty, open order.
    #[must_use]
    pub const fn new(delivery: Delivery) -> Self {
        Self {
            lines: Vec::new(),
            running_total: 0.0,
            delivery,
            state: OrderState::Open,
        }
    }

    /// Appends a line and adds its total to the running total.
    ///
    /// # Errors
    /// Returns `Error::OrderFinalized` once the summary has been produced; the
    /// order is left unchanged.
    pub fn add_line(&mut self, product: &'c Product, quantity: Quantity) -> Result<&OrderLine<'c>> {
        if self.state == OrderState::Finalized {
            return Err(Error::OrderFinalized);
        }

        let line = OrderLine { product, quantity };
        self.running_total += line.line_total();
        debug!(
            product = product.name(),
            quantity = quantity.get(),
            line_total = line.line_total(),
            running_total = self.running_total,
            "Added order line"
        );
        self.lines.push(line);

        let index = self.lines.len() - 1;
        Ok(&self.lines[index])
    }

    /// Renders every line, the total, and the delivery block, then finalizes the order.
    pub fn summary(&mut self) -> String {
        if self.state == OrderState::Open {
            info!(
                lines = self.lines.len(),
                total = self.running_total,
                "Order finalized"
            );
            self.state = OrderState::Finalized;
        }

        let mut out = String::from("\nOrder Summary:");
        for line in &self.lines {
            out.push('\n');
            out.push_str(&line.summary_line());
        }
        out.push_str("\n\nTotal Payment: ");
        out.push_str(&format_rupees(self.running_total));
        out.push('\n');
        out.push_str(&self.delivery.describe());
        out
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[OrderLine<'c>] {
        &self.lines
    }

    /// Sum of all line totals.
    #[must_use]
    pub const fn running_total(&self) -> f64 {
        self.running_total
    }

    /// Delivery attached to this order.
    #[must_use]
    pub const fn delivery(&self) -> &Delivery {
        &self.delivery
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> OrderState {
        self.state
    }

    /// Whether the summary has been produced.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.state == OrderState::Finalized
    }
}
