use crate::model::Item;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: String,
    pub item_name: String,
    pub item_category: String,
    pub item_price: f64,
    pub item_qty: i64,
    pub item_description: String,
    pub item_image: Option<String>,
    pub is_s3_image: bool,
    /// Presigned read URL, regenerated on every read.
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemResponse {
    pub fn with_image_url(item: Item, image_url: Option<String>) -> Self {
        ItemResponse {
            id: item.id,
            item_name: item.item_name,
            item_category: item.item_category,
            item_price: item.item_price,
            item_qty: item.item_qty,
            item_description: item.item_description,
            item_image: item.item_image,
            is_s3_image: item.is_s3_image,
            image_url,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl From<Item> for ItemResponse {
    fn from(value: Item) -> Self {
        ItemResponse::with_image_url(value, None)
    }
}
