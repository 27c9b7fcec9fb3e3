use crate::errors::ServiceError;
use anyhow::Result;
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

pub trait JwtServiceTrait: Send + Sync + std::fmt::Debug {
    fn generate_token(&self, user_id: &str) -> Result<String, ServiceError>;
    /// Returns the user id carried by a valid, unexpired token.
    fn verify_token(&self, token: &str) -> Result<String, ServiceError>;
}
