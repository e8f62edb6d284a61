use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

impl Default for FindAllProducts {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            search: String::new(),
        }
    }
}

/// Admin form payload. `product_id` absent means create, present means update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveProductRequest {
    pub product_id: Option<i32>,

    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Spring bouquet")]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[validate(range(min = 0, message = "Price cannot be negative"))]
    #[schema(example = 2499)]
    pub price_cents: i64,

    #[validate(range(min = 0, message = "Inventory cannot be negative"))]
    #[schema(example = 10)]
    pub inventory: i32,

    /// Updates preserve the stored activation state unless this is set.
    pub is_active: Option<bool>,
}

/// Raw image bytes lifted out of the multipart form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct CreateProductRecordRequest {
    pub title: String,
    pub description: String,
    pub price_cents: i64,
    pub inventory: i32,
    pub images: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateProductRecordRequest {
    pub product_id: i32,
    pub title: String,
    pub description: String,
    pub price_cents: i64,
    pub inventory: i32,
    /// `None` keeps the stored locators untouched.
    pub images: Option<Vec<String>>,
    /// `None` keeps the stored activation state untouched.
    pub is_active: Option<bool>,
}
