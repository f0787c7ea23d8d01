use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::null_as_default;

/// Business info shown in the contact modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hours_weekday: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hours_saturday: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hours_sunday: String,
}

impl Default for ContactData {
    fn default() -> Self {
        Self {
            title: "Get in Touch".to_string(),
            subtitle: "We'd love to hear from you. Contact us for any queries.".to_string(),
            email: "contact@wowlifestyle.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            address: "123 Lifestyle Street, Mumbai, India 400001".to_string(),
            hours_weekday: "9:00 AM - 8:00 PM".to_string(),
            hours_saturday: "10:00 AM - 6:00 PM".to_string(),
            hours_sunday: "Closed".to_string(),
        }
    }
}

/// Editable fields of [`ContactData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Title,
    Subtitle,
    Email,
    Phone,
    Address,
    HoursWeekday,
    HoursSaturday,
    HoursSunday,
}

impl ContactField {
    pub const ALL: [ContactField; 8] = [
        ContactField::Title,
        ContactField::Subtitle,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Address,
        ContactField::HoursWeekday,
        ContactField::HoursSaturday,
        ContactField::HoursSunday,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ContactField::Title => "title",
            ContactField::Subtitle => "subtitle",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Address => "address",
            ContactField::HoursWeekday => "hours-weekday",
            ContactField::HoursSaturday => "hours-saturday",
            ContactField::HoursSunday => "hours-sunday",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Title => "Title",
            ContactField::Subtitle => "Subtitle",
            ContactField::Email => "Email Address",
            ContactField::Phone => "Phone Number",
            ContactField::Address => "Physical Address",
            ContactField::HoursWeekday => "Monday - Friday",
            ContactField::HoursSaturday => "Saturday",
            ContactField::HoursSunday => "Sunday",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-").to_ascii_lowercase();
        ContactField::ALL
            .into_iter()
            .find(|field| field.key() == wanted)
            .ok_or_else(|| format!("unknown contact field '{s}'"))
    }
}

impl ContactData {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Title => &self.title,
            ContactField::Subtitle => &self.subtitle,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Address => &self.address,
            ContactField::HoursWeekday => &self.hours_weekday,
            ContactField::HoursSaturday => &self.hours_saturday,
            ContactField::HoursSunday => &self.hours_sunday,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Title => &mut self.title,
            ContactField::Subtitle => &mut self.subtitle,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Address => &mut self.address,
            ContactField::HoursWeekday => &mut self.hours_weekday,
            ContactField::HoursSaturday => &mut self.hours_saturday,
            ContactField::HoursSunday => &mut self.hours_sunday,
        };
        *slot = value.into();
    }
}

/// A lead submitted through the contact form, as listed for admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

impl ContactMessage {
    /// Date part of the ISO timestamp, or the raw value if it has none.
    pub fn created_date(&self) -> &str {
        self.created_at
            .split_once('T')
            .map(|(date, _)| date)
            .unwrap_or(&self.created_at)
    }
}
