//! Object storage for item images.

mod memory;
mod s3;

pub use self::memory::InMemoryObjectStore;
pub use self::s3::S3ObjectStore;

use uuid::Uuid;

/// Builds `{uuid}-{file name}`, with path separators and whitespace in the
/// file name replaced by `-`.
pub fn object_key(file_name: &str) -> String {
    let sanitized: String = file_name
        .trim()
        .chars()
        .map(|c| if c == '/' || c == '\\' || c.is_whitespace() { '-' } else { c })
        .collect();

    if sanitized.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        format!("{}-{sanitized}", Uuid::new_v4())
    }
}
