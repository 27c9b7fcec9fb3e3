use crate::{
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynRegisterService = Arc<dyn RegisterServiceTrait + Send + Sync>;
pub type DynLoginService = Arc<dyn LoginServiceTrait + Send + Sync>;
pub type DynIdentityService = Arc<dyn IdentityServiceTrait + Send + Sync>;

#[async_trait]
pub trait RegisterServiceTrait {
    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError>;
}

#[async_trait]
pub trait LoginServiceTrait {
    async fn login(
        &self,
        request: &LoginRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError>;
}

#[async_trait]
pub trait IdentityServiceTrait {
    /// Verifies the token and loads the user it belongs to.
    async fn authenticate(&self, token: &str) -> Result<UserResponse, ServiceError>;
    async fn get_me(&self, user_id: &str) -> Result<ApiResponse<UserResponse>, ServiceError>;
}
