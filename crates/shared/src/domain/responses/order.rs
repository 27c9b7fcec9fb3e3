use crate::{domain::responses::ItemResponse, model::Order};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub items: Vec<ItemResponse>,
    pub item_ids: Vec<String>,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.id,
            items: value.items.into_iter().map(ItemResponse::from).collect(),
            item_ids: value.item_ids,
            total_price: value.total_price,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
