//! Retail/wholesale services view: product tables, offers and the mode toggle.

mod types;
mod view;

pub use types::{display_value, Offer, Perk, PricingMode, ServiceProduct, ServicesData};
pub use view::{ServicesIntent, ServicesReducer, ServicesState};
