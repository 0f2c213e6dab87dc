//! Shared test utilities for the grocery platform.
//!
//! This module provides deterministic partner selection, sample deliveries, and
//! scripted console sessions with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    config::AppConfig,
    core::{
        catalog::{Catalog, Product},
        delivery::{DEFAULT_PARTNERS, Delivery, DeliverySlot, PartnerPicker},
        order::Order,
    },
    session::Session,
};
use std::io::Cursor;

/// Picker that always returns the same index.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl PartnerPicker for FixedPicker {
    fn pick(&mut self, _len: usize) -> usize {
        self.0
    }
}

/// The four standard partner names as owned strings.
pub fn default_partners() -> Vec<String> {
    DEFAULT_PARTNERS.iter().map(ToString::to_string).collect()
}

/// Creates a test delivery with sensible defaults.
///
/// # Defaults
/// * `address`: "12 Market Rd"
/// * `payment_mode`: "UPI"
/// * `slot`: 12:00 PM
pub fn sample_delivery(partner_index: usize) -> Delivery {
    Delivery::new(
        "12 Market Rd",
        "UPI",
        DeliverySlot::defaults()[1],
        &default_partners(),
        &mut FixedPicker(partner_index),
    )
    .unwrap()
}

/// Looks up a product by 1-based category and product numbers.
pub fn product_at(catalog: &Catalog, category: usize, product: usize) -> &Product {
    catalog.category(category).unwrap().product(product).unwrap()
}

/// Builds a session over an in-memory script.
pub fn scripted_session<'c>(
    config: &'c AppConfig,
    script: &str,
    partner_index: usize,
) -> Session<'c, Cursor<Vec<u8>>, Vec<u8>, FixedPicker> {
    Session::new(
        config,
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        FixedPicker(partner_index),
    )
}

/// Runs a scripted session to checkout.
/// Returns (finalized order, everything written to the console).
pub fn run_scripted<'c>(
    config: &'c AppConfig,
    script: &str,
    partner_index: usize,
) -> (Order<'c>, String) {
    let mut session = scripted_session(config, script, partner_index);
    let order = session.run().unwrap();
    let out = String::from_utf8(session.into_output()).unwrap();
    (order, out)
}
