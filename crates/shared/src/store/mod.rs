//! Document table backends: DynamoDB, and an in-memory table set used in
//! simulation mode and tests.

mod dynamo;
mod expression;
mod memory;

pub use self::dynamo::DynamoDocumentStore;
pub use self::expression::{UpdateExpression, build_set_expression};
pub use self::memory::InMemoryDocumentStore;

/// Partition key attribute shared by every table.
pub const ID_ATTRIBUTE: &str = "id";
