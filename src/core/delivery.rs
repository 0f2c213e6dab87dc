//! Delivery business logic - address, payment, time slot, and partner assignment.
//!
//! A [`Delivery`] is created once per session. The delivery partner is drawn through a
//! [`PartnerPicker`] so callers decide where the randomness comes from.

use crate::errors::{Error, Result};
use chrono::NaiveTime;
use rand::Rng;
use std::fmt;
use tracing::info;

/// Partners available for assignment when no configuration overrides them.
pub const DEFAULT_PARTNERS: &[&str] = &["Hitesh", "Pravin", "Krish", "Kiran"];

const SLOT_FORMAT: &str = "%-I:%M %p";
const SLOT_PARSE_FORMAT: &str = "%I:%M %p";

/// A delivery time the shopper can choose, rendered like "2:00 PM".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DeliverySlot(NaiveTime);

impl DeliverySlot {
    /// Wraps a wall-clock time.
    #[must_use]
    pub const fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    /// Parses a slot written as `h:MM AM` or `hh:MM PM`.
    ///
    /// # Errors
    /// Returns `Error::Config` if the text is not a 12-hour clock time.
    pub fn parse(text: &str) -> Result<Self> {
        NaiveTime::parse_from_str(text.trim(), SLOT_PARSE_FORMAT)
            .map(Self::new)
            .map_err(|e| Error::Config {
                message: format!("Invalid delivery slot '{text}': {e}"),
            })
    }

    /// The five standard slots, 10:00 AM through 6:00 PM.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        [10, 12, 14, 16, 18]
            .into_iter()
            .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
            .map(Self::new)
            .collect()
    }

    /// The underlying time of day.
    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for DeliverySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SLOT_FORMAT))
    }
}

/// Source of the partner index used when a delivery is created.
pub trait PartnerPicker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform partner selection backed by any `rand` generator.
#[derive(Debug)]
pub struct RngPicker<R>(pub R);

impl RngPicker<rand::rngs::ThreadRng> {
    /// Picker drawing from the thread-local generator.
    #[must_use]
    pub fn thread_local() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: Rng> PartnerPicker for RngPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Delivery details attached to one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    address: String,
    payment_mode: String,
    slot: DeliverySlot,
    partner: String,
}

impl Delivery {
    /// Creates the delivery and assigns a partner chosen by `picker`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The address or payment mode is empty or whitespace-only
    /// - `partners` is empty, or the picker returns an index outside it
    pub fn new(
        address: impl Into<String>,
        payment_mode: impl Into<String>,
        slot: DeliverySlot,
        partners: &[String],
        picker: &mut impl PartnerPicker,
    ) -> Result<Self> {
        let address = address.into().trim().to_string();
        let payment_mode = payment_mode.into().trim().to_string();

        if address.is_empty() {
            return Err(Error::EmptyField { field: "Address" });
        }
        if payment_mode.is_empty() {
            return Err(Error::EmptyField {
                field: "Payment method",
            });
        }
        if partners.is_empty() {
            return Err(Error::Config {
                message: "No delivery partners configured".to_string(),
            });
        }

        let index = picker.pick(partners.len());
        let partner = partners.get(index).cloned().ok_or_else(|| Error::Config {
            message: format!(
                "Partner index {index} out of range for {} partners",
                partners.len()
            ),
        })?;

        info!(%slot, %partner, "Delivery scheduled");

        Ok(Self {
            address,
            payment_mode,
            slot,
            partner,
        })
    }

    /// Delivery address as entered.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Payment method as entered.
    #[must_use]
    pub fn payment_mode(&self) -> &str {
        &self.payment_mode
    }

    /// Chosen delivery slot.
    #[must_use]
    pub const fn slot(&self) -> DeliverySlot {
        self.slot
    }

    /// Assigned delivery partner.
    #[must_use]
    pub fn partner(&self) -> &str {
        &self.partner
    }

    /// Multi-line delivery block printed at the end of the order summary.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "\nDelivery Details:\n\
             Address: {}\n\
             Payment Method: {}\n\
             Expected Delivery Time: {}\n\
             Delivery Partner: {}",
            self.address, self.payment_mode, self.slot, self.partner
        )
    }
}
