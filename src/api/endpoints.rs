//! Typed calls for every storefront endpoint.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::api::client::{Access, ApiClient};
use crate::api::error::ApiError;
use crate::catalog::CategoryItem;
use crate::contact::{ContactData, ContactMessage, LeadForm};
use crate::services::ServicesData;
use crate::testimonials::TestimonialsData;

pub const CATEGORIES_PATH: &str = "/shopbycategory";
pub const CATEGORIES_RESET_PATH: &str = "/shopbycategory/reset";
pub const CONTACT_PATH: &str = "/contact";
pub const CONTACT_RESET_PATH: &str = "/contact/reset";
pub const MESSAGES_PATH: &str = "/contact/messages";
pub const SERVICES_PATH: &str = "/services";
pub const TESTIMONIALS_PATH: &str = "/enhanced-testimonials";

#[derive(Serialize)]
struct CategoriesBody<'a> {
    items: &'a [CategoryItem],
}

impl ApiClient {
    #[instrument(skip(self))]
    pub async fn fetch_categories(&self) -> Result<Vec<CategoryItem>, ApiError> {
        self.call(Method::GET, CATEGORIES_PATH, Access::Public)
            .await?
            .into_data(CATEGORIES_PATH)
    }

    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn save_categories(&self, items: &[CategoryItem]) -> Result<(), ApiError> {
        self.call_with_body::<_, Value>(
            Method::PUT,
            CATEGORIES_PATH,
            Access::Admin,
            &CategoriesBody { items },
        )
        .await?
        .ensure_success()?;
        info!("categories saved");
        Ok(())
    }

    /// Restores the server-side defaults and returns them.
    #[instrument(skip(self))]
    pub async fn reset_categories(&self) -> Result<Vec<CategoryItem>, ApiError> {
        let items: Vec<CategoryItem> = self
            .call(Method::POST, CATEGORIES_RESET_PATH, Access::Admin)
            .await?
            .into_data(CATEGORIES_RESET_PATH)?;
        info!(count = items.len(), "categories reset");
        Ok(items)
    }

    #[instrument(skip(self))]
    pub async fn fetch_contact(&self) -> Result<ContactData, ApiError> {
        self.call(Method::GET, CONTACT_PATH, Access::Public)
            .await?
            .into_data(CONTACT_PATH)
    }

    #[instrument(skip(self, data))]
    pub async fn save_contact(&self, data: &ContactData) -> Result<(), ApiError> {
        self.call_with_body::<_, Value>(Method::PUT, CONTACT_PATH, Access::Admin, data)
            .await?
            .ensure_success()?;
        info!("contact info saved");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn reset_contact(&self) -> Result<ContactData, ApiError> {
        let data = self
            .call(Method::POST, CONTACT_RESET_PATH, Access::Admin)
            .await?
            .into_data(CONTACT_RESET_PATH)?;
        info!("contact info reset");
        Ok(data)
    }

    #[instrument(skip(self))]
    pub async fn fetch_messages(&self) -> Result<Vec<ContactMessage>, ApiError> {
        self.call(Method::GET, MESSAGES_PATH, Access::Admin)
            .await?
            .into_data(MESSAGES_PATH)
    }

    /// Posts a lead. Returns the server's confirmation message, if any.
    #[instrument(skip(self, form))]
    pub async fn submit_message(&self, form: &LeadForm) -> Result<Option<String>, ApiError> {
        let envelope = self
            .call_with_body::<_, Value>(Method::POST, MESSAGES_PATH, Access::Public, form)
            .await?;
        envelope.ensure_success()?;
        info!("lead submitted");
        Ok(envelope.message)
    }

    #[instrument(skip(self))]
    pub async fn fetch_services(&self) -> Result<ServicesData, ApiError> {
        self.call(Method::GET, SERVICES_PATH, Access::Public)
            .await?
            .into_data(SERVICES_PATH)
    }

    #[instrument(skip(self))]
    pub async fn fetch_testimonials(&self) -> Result<TestimonialsData, ApiError> {
        self.call(Method::GET, TESTIMONIALS_PATH, Access::Public)
            .await?
            .into_data(TESTIMONIALS_PATH)
    }
}
