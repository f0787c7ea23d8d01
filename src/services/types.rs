use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::null_as_default;

/// Which price list the services view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingMode {
    #[default]
    Retail,
    Wholesale,
}

impl PricingMode {
    pub fn toggled(self) -> Self {
        match self {
            PricingMode::Retail => PricingMode::Wholesale,
            PricingMode::Wholesale => PricingMode::Retail,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PricingMode::Retail => "retail",
            PricingMode::Wholesale => "wholesale",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            PricingMode::Retail => "Retail Collection",
            PricingMode::Wholesale => "Wholesale Vault",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            PricingMode::Retail => "Premium luxury toys for families and exclusive collectors",
            PricingMode::Wholesale => "High-margin bulk acquisitions for business partners",
        }
    }
}

impl fmt::Display for PricingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retail" => Ok(PricingMode::Retail),
            "wholesale" => Ok(PricingMode::Wholesale),
            other => Err(format!("unknown pricing mode '{other}' (expected retail or wholesale)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Perk {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
}

impl Perk {
    fn new(title: &str, desc: &str) -> Self {
        Self {
            title: title.to_string(),
            desc: desc.to_string(),
        }
    }
}

/// Promotional banner attached to a pricing mode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub badge_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub discount_percentage: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub perk1: Perk,
    #[serde(default, deserialize_with = "null_as_default")]
    pub perk2: Perk,
    #[serde(default, deserialize_with = "null_as_default")]
    pub perk3: Perk,
    #[serde(default, deserialize_with = "null_as_default")]
    pub button_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub terms: String,
}

impl Offer {
    pub fn default_for(mode: PricingMode) -> Self {
        match mode {
            PricingMode::Retail => Self {
                badge_text: "EXCLUSIVE OFFER".into(),
                discount_percentage: "25".into(),
                title: "OFF FOR RETAIL CUSTOMERS".into(),
                description: "Special discount on all retail purchases".into(),
                perk1: Perk::new("Minimum Purchase", "₹5,000"),
                perk2: Perk::new("Valid Until", "Dec 31, 2024"),
                perk3: Perk::new("Free Gift", "Premium Wrapping Included"),
                button_text: "APPLY 25% DISCOUNT".into(),
                terms: "*Terms & Conditions apply. Valid on select products.".into(),
            },
            PricingMode::Wholesale => Self {
                badge_text: "VOLUME DISCOUNT".into(),
                discount_percentage: "50".into(),
                title: "OFF FOR BUSINESS PARTNERS".into(),
                description: "Maximum discount on bulk purchases".into(),
                perk1: Perk::new("Minimum Order", "200+ Units"),
                perk2: Perk::new("Free Shipping", "Pan India Delivery"),
                perk3: Perk::new("Dedicated Support", "Account Manager Included"),
                button_text: "APPLY 50% DISCOUNT".into(),
                terms: "*Valid on orders above ₹5,00,000. Limited time offer.".into(),
            },
        }
    }

    /// Fills every blank field from `defaults`.
    fn or_defaults(mut self, defaults: Offer) -> Self {
        fn fill(slot: &mut String, fallback: String) {
            if slot.trim().is_empty() {
                *slot = fallback;
            }
        }
        fn fill_perk(slot: &mut Perk, fallback: Perk) {
            fill(&mut slot.title, fallback.title);
            fill(&mut slot.desc, fallback.desc);
        }

        fill(&mut self.badge_text, defaults.badge_text);
        fill(&mut self.discount_percentage, defaults.discount_percentage);
        fill(&mut self.title, defaults.title);
        fill(&mut self.description, defaults.description);
        fill_perk(&mut self.perk1, defaults.perk1);
        fill_perk(&mut self.perk2, defaults.perk2);
        fill_perk(&mut self.perk3, defaults.perk3);
        fill(&mut self.button_text, defaults.button_text);
        fill(&mut self.terms, defaults.terms);
        self
    }
}

/// One row of the retail or wholesale product table.
///
/// Retail rows carry price/stock/rating/sales, wholesale rows add
/// moq/margin/orders; whatever the API omits stays `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProduct {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub original_price: Option<String>,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default)]
    pub stock: Option<serde_json::Value>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub sales: Option<serde_json::Value>,
    #[serde(default)]
    pub moq: Option<String>,
    #[serde(default)]
    pub margin: Option<String>,
    #[serde(default)]
    pub orders: Option<serde_json::Value>,
}

/// Renders a loosely typed JSON scalar for display.
pub fn display_value(value: &Option<serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Payload of `GET /services`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub retail_products: Vec<ServiceProduct>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wholesale_products: Vec<ServiceProduct>,
    #[serde(default)]
    pub retail_offer: Option<Offer>,
    #[serde(default)]
    pub wholesale_offer: Option<Offer>,
}

impl ServicesData {
    pub fn products(&self, mode: PricingMode) -> &[ServiceProduct] {
        match mode {
            PricingMode::Retail => &self.retail_products,
            PricingMode::Wholesale => &self.wholesale_products,
        }
    }

    /// The offer for `mode`, with anything the API left out taken from the
    /// built-in offer.
    pub fn offer(&self, mode: PricingMode) -> Offer {
        let provided = match mode {
            PricingMode::Retail => self.retail_offer.clone(),
            PricingMode::Wholesale => self.wholesale_offer.clone(),
        };
        let defaults = Offer::default_for(mode);
        match provided {
            Some(offer) => offer.or_defaults(defaults),
            None => defaults,
        }
    }
}
