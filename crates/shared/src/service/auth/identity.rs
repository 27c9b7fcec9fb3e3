use crate::{
    abstract_trait::{DynJwtService, DynUserQueryRepository, IdentityServiceTrait},
    domain::responses::{ApiResponse, UserResponse},
    errors::ServiceError,
    utils::{Method, OperationTracer},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

pub struct IdentityService {
    jwt: DynJwtService,
    user_query: DynUserQueryRepository,
    tracer: OperationTracer,
}

pub struct IdentityServiceDeps {
    pub jwt: DynJwtService,
    pub user_query: DynUserQueryRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl IdentityService {
    pub async fn new(deps: IdentityServiceDeps) -> Self {
        let IdentityServiceDeps {
            jwt,
            user_query,
            registry,
        } = deps;

        Self {
            jwt,
            user_query,
            tracer: OperationTracer::new("identity-service", registry).await,
        }
    }

    async fn load_user(&self, user_id: &str) -> Result<UserResponse, ServiceError> {
        match self.user_query.find_by_id(user_id).await? {
            Some(user) => Ok(UserResponse::from(user)),
            None => Err(ServiceError::Unauthorized(
                "Not authorized, user not found".to_string(),
            )),
        }
    }
}

#[async_trait]
impl IdentityServiceTrait for IdentityService {
    async fn authenticate(&self, token: &str) -> Result<UserResponse, ServiceError> {
        let user_id = self.jwt.verify_token(token).map_err(|e| {
            warn!("🔒 Rejected token: {e}");
            e
        })?;

        self.load_user(&user_id).await
    }

    async fn get_me(&self, user_id: &str) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("👤 Fetching profile for user ID: {user_id}");

        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "GetMe",
            vec![
                KeyValue::new("component", "auth"),
                KeyValue::new("user.id", user_id.to_string()),
            ],
        );

        match self.load_user(user_id).await {
            Ok(user) => {
                self.tracer
                    .complete_success(&tracing_ctx, method, "User profile fetched");
                Ok(ApiResponse::success("User fetched successfully", user))
            }
            Err(e) => {
                error!("❌ Failed to fetch profile for {user_id}: {e}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to fetch user");
                Err(e)
            }
        }
    }
}
