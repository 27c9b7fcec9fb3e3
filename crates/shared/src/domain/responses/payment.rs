use crate::domain::requests::Promotion;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentQuoteResponse {
    pub order_id: String,
    pub total_price: f64,
    pub promotion: Option<Promotion>,
    pub discount_rate: f64,
    pub discount: f64,
    pub payable: f64,
    pub tendered: Option<f64>,
    pub change: Option<f64>,
}
