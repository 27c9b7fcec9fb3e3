use crate::errors::{
    error::ErrorResponse, object_store::ObjectStoreError, repository::RepositoryError,
    service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    FieldError { field: String, message: String },
    Unauthorized(String),
    NotFound(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),

            ServiceError::DuplicateEmail => {
                HttpError::BadRequest("User Already Exists!".to_string())
            }

            ServiceError::UnknownEmail => HttpError::FieldError {
                field: "email".into(),
                message: ServiceError::UnknownEmail.to_string(),
            },

            ServiceError::WrongPassword => HttpError::FieldError {
                field: "password".into(),
                message: ServiceError::WrongPassword.to_string(),
            },

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::AlreadyExists(msg) => HttpError::BadRequest(msg),
                other => HttpError::Internal(other.to_string()),
            },

            ServiceError::Storage(ObjectStoreError::NotFound(key)) => {
                HttpError::NotFound(format!("Object not found: {key}"))
            }

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::Unauthorized(msg) => HttpError::Unauthorized(msg),

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            other => HttpError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, field) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            HttpError::FieldError { field, message } => {
                (StatusCode::BAD_REQUEST, message, Some(field))
            }
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message,
            field,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_failures_map_to_distinct_fields() {
        let email = HttpError::from(ServiceError::UnknownEmail);
        let password = HttpError::from(ServiceError::WrongPassword);

        match (email, password) {
            (
                HttpError::FieldError { field: f1, .. },
                HttpError::FieldError { field: f2, .. },
            ) => {
                assert_eq!(f1, "email");
                assert_eq!(f2, "password");
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn repository_not_found_is_404() {
        let response =
            HttpError::from(ServiceError::Repo(RepositoryError::NotFound)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn dynamo_failure_is_500() {
        let response = HttpError::from(ServiceError::Repo(RepositoryError::Dynamo(
            "throttled".into(),
        )))
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_record_keeps_its_message() {
        match HttpError::from(ServiceError::NotFound("Item not found".into())) {
            HttpError::NotFound(msg) => assert_eq!(msg, "Item not found"),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn validation_is_400() {
        let response =
            HttpError::from(ServiceError::validation("No file uploaded.")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
