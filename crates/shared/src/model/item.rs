use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub item_name: String,
    #[serde(default)]
    pub item_category: String,
    pub item_price: f64,
    pub item_qty: i64,
    #[serde(default)]
    pub item_description: String,
    #[serde(default)]
    pub item_image: Option<String>,
    #[serde(default)]
    pub is_s3_image: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Object key of the image, when the image lives in object storage.
    pub fn stored_image_key(&self) -> Option<&str> {
        if self.is_s3_image {
            self.item_image.as_deref().filter(|key| !key.is_empty())
        } else {
            None
        }
    }
}

/// Attribute subset written by an item update. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_qty: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_s3_image: Option<bool>,
}
