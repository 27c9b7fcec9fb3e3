use crate::{
    abstract_trait::{
        DynHashing, DynJwtService, DynUserCommandRepository, DynUserQueryRepository,
        RegisterServiceTrait,
    },
    domain::{
        requests::RegisterRequest,
        responses::{ApiResponse, TokenResponse},
    },
    errors::ServiceError,
    model::User as UserModel,
    utils::{Method, OperationTracer},
};
use async_trait::async_trait;
use chrono::Utc;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use uuid::Uuid;

pub struct RegisterService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hash: DynHashing,
    jwt: DynJwtService,
    tracer: OperationTracer,
}

pub struct RegisterServiceDeps {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub registry: Arc<Mutex<Registry>>,
}

impl RegisterService {
    pub async fn new(deps: RegisterServiceDeps) -> Self {
        let RegisterServiceDeps {
            query,
            command,
            hash,
            jwt,
            registry,
        } = deps;

        Self {
            query,
            command,
            hash,
            jwt,
            tracer: OperationTracer::new("register-service", registry).await,
        }
    }
}

#[async_trait]
impl RegisterServiceTrait for RegisterService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        info!(
            "📝 [REGISTER] Starting user registration | Email: {}",
            req.email
        );

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "RegisterUser",
            vec![
                KeyValue::new("component", "auth"),
                KeyValue::new("user.email", req.email.clone()),
            ],
        );

        let existing_user = match self.query.find_by_email(&req.email).await {
            Ok(user) => user,
            Err(e) => {
                error!("❌ Failed to check email: {e:?}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Database error");
                return Err(ServiceError::Repo(e));
            }
        };

        if existing_user.is_some() {
            error!("❌ [REGISTER] Email already taken | Email: {}", req.email);
            self.tracer
                .complete_error(&tracing_ctx, method, "Email already exists");
            return Err(ServiceError::DuplicateEmail);
        }

        let hashed_password = match self.hash.hash_password(&req.password).await {
            Ok(hash) => hash,
            Err(e) => {
                error!("❌ Failed to hash password: {e:?}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Hashing failed");
                return Err(e);
            }
        };

        let now = Utc::now();
        let user = UserModel {
            id: Uuid::new_v4().to_string(),
            email: req.email.clone(),
            password: hashed_password,
            created_at: now,
            updated_at: now,
        };

        let user = match self.command.create_user(&user).await {
            Ok(user) => user,
            Err(e) => {
                error!("❌ Failed to create user: {e:?}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to create user");
                return Err(ServiceError::Repo(e));
            }
        };

        let token = match self.jwt.generate_token(&user.id) {
            Ok(token) => token,
            Err(e) => {
                error!("❌ Failed to sign token: {e:?}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Token generation failed");
                return Err(e);
            }
        };

        info!("✅ [REGISTER] User registered | ID: {}", user.id);
        self.tracer
            .complete_success(&tracing_ctx, method, "User registered successfully");

        Ok(ApiResponse::success(
            "User registered successfully",
            TokenResponse { token },
        ))
    }
}
