use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("DynamoDB error: {0}")]
    Dynamo(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_dynamo::Error),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Custom: {0}")]
    Custom(String),
}
