use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "No items provided for the order"))]
    #[schema(example = json!(["6f1c2a4e-1d0b-4c55-9a43-2b7d3c1e9f10"]))]
    pub item_ids: Vec<String>,
}

/// Arbitrary attribute patch applied to an order record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct OrderPatch(pub Map<String, Value>);

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;
    use utoipa::openapi::{RefOr, schema::Schema};

    #[test]
    fn order_patch_documents_as_a_free_form_object() {
        assert!(matches!(OrderPatch::schema(), RefOr::T(Schema::Object(_))));
    }
}
