mod error;
mod http;
mod object_store;
mod repository;
mod service;

pub use self::error::ErrorResponse;
pub use self::http::HttpError;
pub use self::object_store::ObjectStoreError;
pub use self::repository::RepositoryError;
pub use self::service::ServiceError;
