use crate::model::order::Order as OrderModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    #[serde(rename = "productId")]
    pub product_id: i32,
    pub email: String,
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "processedAt")]
    pub processed_at: Option<String>,
}

impl From<OrderModel> for OrderResponse {
    fn from(value: OrderModel) -> Self {
        OrderResponse {
            id: value.order_id,
            product_id: value.product_id,
            email: value.email,
            status: value.status,
            created_at: value.created_at.map(|dt| dt.to_rfc3339()),
            processed_at: value.processed_at.map(|dt| dt.to_rfc3339()),
        }
    }
}
