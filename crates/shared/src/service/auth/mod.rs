mod identity;
mod login;
mod register;

use self::identity::{IdentityService, IdentityServiceDeps};
use self::login::{LoginService, LoginServiceDeps};
use self::register::{RegisterService, RegisterServiceDeps};
use crate::abstract_trait::{
    DynHashing, DynIdentityService, DynJwtService, DynLoginService, DynRegisterService,
    DynUserCommandRepository, DynUserQueryRepository,
};
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AuthService {
    pub identity: DynIdentityService,
    pub login: DynLoginService,
    pub register: DynRegisterService,
}

#[derive(Clone)]
pub struct AuthServiceDeps {
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub user_query: DynUserQueryRepository,
    pub user_command: DynUserCommandRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl AuthService {
    pub async fn new(deps: AuthServiceDeps) -> Self {
        let identity_deps = IdentityServiceDeps {
            jwt: deps.jwt.clone(),
            user_query: deps.user_query.clone(),
            registry: deps.registry.clone(),
        };

        let identity = Arc::new(IdentityService::new(identity_deps).await) as DynIdentityService;

        let login_deps = LoginServiceDeps {
            hash: deps.hash.clone(),
            jwt: deps.jwt.clone(),
            query: deps.user_query.clone(),
            registry: deps.registry.clone(),
        };

        let login = Arc::new(LoginService::new(login_deps).await) as DynLoginService;

        let register_deps = RegisterServiceDeps {
            query: deps.user_query.clone(),
            command: deps.user_command.clone(),
            hash: deps.hash.clone(),
            jwt: deps.jwt.clone(),
            registry: deps.registry.clone(),
        };

        let register = Arc::new(RegisterService::new(register_deps).await) as DynRegisterService;

        Self {
            identity,
            login,
            register,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::JwtServiceTrait,
        config::{Hashing, JwtConfig},
        domain::requests::{LoginRequest, RegisterRequest},
        errors::ServiceError,
        repository::UserRepository,
        store::InMemoryDocumentStore,
    };

    async fn auth_service() -> AuthService {
        let users = UserRepository::new(Arc::new(InMemoryDocumentStore::new()), "Users");
        AuthService::new(AuthServiceDeps {
            hash: Arc::new(Hashing::new(4)),
            jwt: Arc::new(JwtConfig::new("test-secret")),
            user_query: users.query,
            user_command: users.command,
            registry: Arc::new(Mutex::new(Registry::default())),
        })
        .await
    }

    fn register_request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn second_registration_with_same_email_fails() {
        let auth = auth_service().await;
        let request = register_request("barista@example.com", "secret1");

        let first = auth.register.register(&request).await.unwrap();
        assert!(!first.data.token.is_empty());

        let second = auth.register.register(&request).await;
        assert!(matches!(second, Err(ServiceError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn login_distinguishes_unknown_email_from_wrong_password() {
        let auth = auth_service().await;
        auth.register
            .register(&register_request("barista@example.com", "secret1"))
            .await
            .unwrap();

        let unknown = auth
            .login
            .login(&login_request("nobody@example.com", "secret1"))
            .await;
        assert!(matches!(unknown, Err(ServiceError::UnknownEmail)));

        let wrong = auth
            .login
            .login(&login_request("barista@example.com", "wrong-pass"))
            .await;
        assert!(matches!(wrong, Err(ServiceError::WrongPassword)));

        let ok = auth
            .login
            .login(&login_request("barista@example.com", "secret1"))
            .await
            .unwrap();
        assert!(!ok.data.token.is_empty());
    }

    #[tokio::test]
    async fn issued_token_authenticates_the_user() {
        let auth = auth_service().await;
        let token = auth
            .register
            .register(&register_request("barista@example.com", "secret1"))
            .await
            .unwrap()
            .data
            .token;

        let user = auth.identity.authenticate(&token).await.unwrap();
        assert_eq!(user.email, "barista@example.com");

        let me = auth.identity.get_me(&user.id).await.unwrap();
        assert_eq!(me.data.id, user.id);
    }

    #[tokio::test]
    async fn token_for_unknown_user_is_rejected() {
        let auth = auth_service().await;
        let token = JwtConfig::new("test-secret").generate_token("ghost").unwrap();

        let result = auth.identity.authenticate(&token).await;
        assert!(matches!(result, Err(ServiceError::Unauthorized(_))));
    }
}
