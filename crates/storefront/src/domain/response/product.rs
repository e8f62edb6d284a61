use crate::model::product::Product as ProductModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Wire field names (`price_cents`, `isActive`, `createdAt`, ...) are relied on
// by external dashboards and must not drift.

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price_cents: i64,
    pub inventory: i32,
    pub images: Vec<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.product_id,
            title: value.title,
            description: value.description,
            price_cents: value.price_cents,
            inventory: value.inventory,
            images: value.images,
            is_active: value.is_active,
            created_at: value.created_at.map(|dt| dt.to_rfc3339()),
            updated_at: value.updated_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ArchivedProductResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price_cents: i64,
    pub inventory: i32,
    pub images: Vec<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
    #[serde(rename = "deletedAt")]
    pub deleted_at: Option<String>,
}

impl From<ProductModel> for ArchivedProductResponse {
    fn from(value: ProductModel) -> Self {
        ArchivedProductResponse {
            id: value.product_id,
            title: value.title,
            description: value.description,
            price_cents: value.price_cents,
            inventory: value.inventory,
            images: value.images,
            is_active: value.is_active,
            created_at: value.created_at.map(|dt| dt.to_rfc3339()),
            updated_at: value.updated_at.map(|dt| dt.to_rfc3339()),
            deleted_at: value.deleted_at.map(|dt| dt.to_rfc3339()),
        }
    }
}
