use crate::{
    domain::{
        requests::PaymentQuoteQuery,
        responses::{ApiResponse, PaymentQuoteResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPaymentService = Arc<dyn PaymentServiceTrait + Send + Sync>;

#[async_trait]
pub trait PaymentServiceTrait {
    async fn quote(
        &self,
        order_id: &str,
        query: &PaymentQuoteQuery,
    ) -> Result<ApiResponse<PaymentQuoteResponse>, ServiceError>;
}
