use crate::{
    abstract_trait::{DynHashing, DynJwtService, DynUserQueryRepository, LoginServiceTrait},
    domain::{
        requests::LoginRequest,
        responses::{ApiResponse, TokenResponse},
    },
    errors::ServiceError,
    utils::{Method, OperationTracer},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

pub struct LoginService {
    hash: DynHashing,
    jwt: DynJwtService,
    query: DynUserQueryRepository,
    tracer: OperationTracer,
}

pub struct LoginServiceDeps {
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub query: DynUserQueryRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl LoginService {
    pub async fn new(deps: LoginServiceDeps) -> Self {
        let LoginServiceDeps {
            hash,
            jwt,
            query,
            registry,
        } = deps;

        Self {
            hash,
            jwt,
            query,
            tracer: OperationTracer::new("login-service", registry).await,
        }
    }
}

#[async_trait]
impl LoginServiceTrait for LoginService {
    async fn login(
        &self,
        request: &LoginRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let email = &request.email;

        info!("🔐 Attempting login for email: {email}");

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "Login",
            vec![
                KeyValue::new("component", "auth"),
                KeyValue::new("user.email", email.to_string()),
            ],
        );

        let user = match self.query.find_by_email(email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                error!("❌ User not found: {email}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "User not found");
                return Err(ServiceError::UnknownEmail);
            }
            Err(err) => {
                error!("❌ Failed to query user: {err}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Database error");
                return Err(ServiceError::Repo(err));
            }
        };

        if let Err(err) = self
            .hash
            .compare_password(&user.password, &request.password)
            .await
        {
            error!("❌ Invalid password for user: {email}");
            self.tracer
                .complete_error(&tracing_ctx, method, "Invalid password");
            return Err(err);
        }

        let token = match self.jwt.generate_token(&user.id) {
            Ok(token) => token,
            Err(err) => {
                error!("❌ Failed to sign token: {err:?}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Token generation failed");
                return Err(err);
            }
        };

        self.tracer
            .complete_success(&tracing_ctx, method, "Login successful");

        Ok(ApiResponse::success(
            "Login successful",
            TokenResponse { token },
        ))
    }
}
