use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

const TOKEN_LIFETIME_MINUTES: i64 = 60;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    pub fn new(user_id: String, iat: usize, exp: usize) -> Self {
        Claims { user_id, iat, exp }
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user_id: &str) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = (now + Duration::minutes(TOKEN_LIFETIME_MINUTES)).timestamp() as usize;

        let claims = Claims::new(user_id.to_string(), iat, exp);

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str) -> Result<String, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data =
            decode::<Claims>(token, &decoding_key, &Validation::default()).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => ServiceError::TokenExpired,
                    _ => ServiceError::Jwt(e),
                }
            })?;

        let current_time = Utc::now().timestamp() as usize;

        if token_data.claims.exp < current_time {
            return Err(ServiceError::TokenExpired);
        }

        Ok(token_data.claims.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_the_user_id() {
        let jwt = JwtConfig::new("secret");
        let token = jwt.generate_token("user-1").unwrap();
        assert_eq!(jwt.verify_token(&token).unwrap(), "user-1");
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = JwtConfig::new("one").generate_token("user-1").unwrap();
        let result = JwtConfig::new("two").verify_token(&token);
        assert!(matches!(result, Err(ServiceError::Jwt(_))));
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let now = Utc::now().timestamp() as usize;
        let claims = Claims::new("user-1".into(), now - 7200, now - 3600);
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        let result = JwtConfig::new("secret").verify_token(&token);
        assert!(matches!(result, Err(ServiceError::TokenExpired)));
    }

    #[test]
    fn garbage_is_rejected() {
        let result = JwtConfig::new("secret").verify_token("not-a-token");
        assert!(matches!(result, Err(ServiceError::Jwt(_))));
    }
}
