use crate::{
    domain::responses::{ApiResponse, InvoiceResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynInvoiceService = Arc<dyn InvoiceServiceTrait + Send + Sync>;

#[async_trait]
pub trait InvoiceServiceTrait {
    async fn generate_invoice(&self) -> Result<ApiResponse<InvoiceResponse>, ServiceError>;
}
