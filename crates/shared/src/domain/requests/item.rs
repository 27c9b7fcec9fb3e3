use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// A file field buffered from a multipart upload.
#[derive(Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for UploadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedImage")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

// NaN slips past range checks.
fn finite_price(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite").with_message("itemPrice must be a number".into()))
    }
}

#[derive(Debug, Clone, Validate)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, message = "Item name is required"))]
    pub item_name: String,

    pub item_category: String,

    #[validate(
        custom(function = "finite_price"),
        range(min = 0.0, message = "Price cannot be negative")
    )]
    pub item_price: f64,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub item_qty: i64,

    pub item_description: String,

    pub image: Option<UploadedImage>,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateItemRequest {
    #[validate(length(min = 1, message = "Item name cannot be empty"))]
    pub item_name: Option<String>,

    pub item_category: Option<String>,

    #[validate(
        custom(function = "finite_price"),
        range(min = 0.0, message = "Price cannot be negative")
    )]
    pub item_price: Option<f64>,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub item_qty: Option<i64>,

    pub item_description: Option<String>,

    pub image: Option<UploadedImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct SearchItemQuery {
    #[serde(rename = "itemName", default)]
    #[param(rename = "itemName")]
    pub item_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(price: f64) -> CreateItemRequest {
        CreateItemRequest {
            item_name: "Mocha".into(),
            item_category: "Hot Beverages".into(),
            item_price: price,
            item_qty: 10,
            item_description: String::new(),
            image: None,
        }
    }

    fn messages(errors: validator::ValidationErrors) -> Vec<String> {
        errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect()
    }

    #[test]
    fn create_rejects_non_finite_price() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let errors = create(price).validate().unwrap_err();
            assert!(messages(errors).contains(&"itemPrice must be a number".to_string()));
        }
        assert!(create(4.25).validate().is_ok());
    }

    #[test]
    fn update_rejects_non_finite_price() {
        for price in [f64::NAN, f64::INFINITY] {
            let req = UpdateItemRequest {
                item_price: Some(price),
                ..Default::default()
            };
            let errors = req.validate().unwrap_err();
            assert!(messages(errors).contains(&"itemPrice must be a number".to_string()));
        }
        assert!(UpdateItemRequest::default().validate().is_ok());
    }
}
