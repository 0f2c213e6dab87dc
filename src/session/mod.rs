//! Interactive shopping session.
//!
//! [`Session`] drives the console protocol: delivery details first, then the
//! category/product/quantity loop, then the order summary at checkout. All
//! out-of-range answers are re-asked; nothing the shopper types ends the session
//! except checkout or closing the input.

/// Console prompting helpers
pub mod prompt;

use crate::{
    config::AppConfig,
    core::{
        catalog::{Catalog, Category, Product},
        delivery::{Delivery, DeliverySlot, PartnerPicker},
        order::{Order, Quantity},
        report::format_numbered_menu,
    },
    errors::{Error, Result},
};
use prompt::Prompter;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const ADDRESS_PROMPT: &str = "Enter delivery address:";
const PAYMENT_PROMPT: &str = "Enter mode of payment (Cash, Credit Card, UPI):";
const SLOT_PROMPT: &str = "Enter the number for your preferred delivery time: ";
const SLOT_INVALID: &str = "Invalid choice, please try again.";
const CATEGORY_PROMPT: &str = "\nEnter the category number to view items (or 0 to checkout): ";
const CATEGORY_INVALID: &str = "Invalid category choice, please try again.";
const PRODUCT_PROMPT: &str = "Enter the product number to add to the order (or 0 to go back): ";
const PRODUCT_INVALID: &str = "Invalid product choice, please try again.";
const QUANTITY_PROMPT: &str = "Enter quantity (1 to 5): ";
const QUANTITY_INVALID: &str = "Invalid quantity. Enter a value between 1 and 5: ";

/// One shopper's pass from delivery details to checkout.
pub struct Session<'c, R, W, P> {
    config: &'c AppConfig,
    prompter: Prompter<R, W>,
    picker: P,
}

/// What the product prompt resolved to.
enum ProductChoice<'c> {
    Back,
    Selected(&'c Product),
}

impl<'c, R: BufRead, W: Write, P: PartnerPicker> Session<'c, R, W, P> {
    /// Creates a session reading from `input` and writing to `output`.
    pub const fn new(config: &'c AppConfig, input: R, output: W, picker: P) -> Self {
        Self {
            config,
            prompter: Prompter::new(input, output),
            picker,
        }
    }

    /// Runs the whole protocol and returns the finalized order.
    ///
    /// # Errors
    /// Returns `Error::InputClosed` if input ends before checkout, or `Error::Io`
    /// if the console cannot be written.
    pub fn run(&mut self) -> Result<Order<'c>> {
        let delivery = self.collect_delivery()?;
        let mut order = Order::new(delivery);
        self.shop(&mut order)?;
        self.checkout(&mut order)?;
        Ok(order)
    }

    /// Asks for address, payment method, and delivery slot, then assigns a partner.
    pub fn collect_delivery(&mut self) -> Result<Delivery> {
        let address = self.prompter.ask_text(ADDRESS_PROMPT)?;
        let payment_mode = self.prompter.ask_text(PAYMENT_PROMPT)?;
        let slot = self.choose_slot()?;

        Delivery::new(
            address,
            payment_mode,
            slot,
            &self.config.delivery_partners,
            &mut self.picker,
        )
    }

    fn choose_slot(&mut self) -> Result<DeliverySlot> {
        let slots = &self.config.delivery_slots;
        self.prompter.say("Choose delivery time:")?;
        for line in format_numbered_menu(slots.iter().map(ToString::to_string)) {
            self.prompter.say(&line)?;
        }

        loop {
            let choice = self.prompter.ask_number(SLOT_PROMPT)?;
            if let Some(slot) = pick_one_based(slots, choice) {
                debug!(%slot, "Delivery slot chosen");
                return Ok(*slot);
            }
            debug!(choice, "Delivery slot out of range");
            self.prompter.say(SLOT_INVALID)?;
        }
    }

    /// Runs the category/product/quantity loop until the shopper checks out.
    pub fn shop(&mut self, order: &mut Order<'c>) -> Result<()> {
        let catalog: &'c Catalog = &self.config.catalog;

        self.prompter.say("\nCategories:")?;
        for line in format_numbered_menu(catalog.categories().iter().map(Category::name)) {
            self.prompter.say(&line)?;
        }

        loop {
            let choice = self.prompter.ask_number(CATEGORY_PROMPT)?;
            if choice == 0 {
                info!(lines = order.lines().len(), "Checkout requested");
                return Ok(());
            }

            let Some(category) = to_index(choice).and_then(|i| catalog.category(i)) else {
                debug!(choice, "Category out of range");
                self.prompter.say(CATEGORY_INVALID)?;
                continue;
            };

            if let ProductChoice::Selected(product) = self.choose_product(category)? {
                let quantity = self.choose_quantity()?;
                let line = order.add_line(product, quantity)?;
                let confirmation = line.confirmation();
                self.prompter.say(&confirmation)?;
            }
        }
    }

    fn choose_product(&mut self, category: &'c Category) -> Result<ProductChoice<'c>> {
        self.prompter
            .say(&format!("\nAvailable {}:", category.name()))?;
        for line in format_numbered_menu(category.products().iter().map(Product::listing)) {
            self.prompter.say(&line)?;
        }

        loop {
            let choice = self.prompter.ask_number(PRODUCT_PROMPT)?;
            if choice == 0 {
                return Ok(ProductChoice::Back);
            }
            if let Some(product) = to_index(choice).and_then(|i| category.product(i)) {
                return Ok(ProductChoice::Selected(product));
            }
            debug!(choice, "Product out of range");
            self.prompter.say(PRODUCT_INVALID)?;
        }
    }

    fn choose_quantity(&mut self) -> Result<Quantity> {
        let mut prompt = QUANTITY_PROMPT;
        loop {
            let raw = self.prompter.ask_number(prompt)?;
            match Quantity::new(raw) {
                Ok(quantity) => return Ok(quantity),
                Err(Error::InvalidQuantity { .. }) => {
                    debug!(raw, "Quantity out of range");
                    prompt = QUANTITY_INVALID;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Prints the order summary, finalizing the order.
    pub fn checkout(&mut self, order: &mut Order<'c>) -> Result<()> {
        let summary = order.summary();
        self.prompter.say(&summary)
    }

    /// Consumes the session, returning the output stream.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }
}

fn to_index(choice: i64) -> Option<usize> {
    usize::try_from(choice).ok()
}

fn pick_one_based<T>(items: &[T], choice: i64) -> Option<&T> {
    to_index(choice)
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| items.get(i))
}
