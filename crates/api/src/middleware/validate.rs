use axum::extract::{FromRequest, Request, rejection::JsonRejection};
use serde::de::DeserializeOwned;
use shared::errors::{HttpError, ServiceError};
use validator::Validate;

/// JSON body that has passed its `validator` rules. Both malformed JSON and
/// failed rules are answered with a 400 error envelope.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(json_value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        json_value
            .validate()
            .map_err(|errors| HttpError::from(ServiceError::from(errors)))?;

        Ok(Self(json_value))
    }
}

pub fn json_rejection(rejection: JsonRejection) -> HttpError {
    HttpError::BadRequest(format!("Invalid JSON: {}", rejection.body_text()))
}
