mod auth;
mod item;
mod order;
mod payment;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::item::{CreateItemRequest, SearchItemQuery, UpdateItemRequest, UploadedImage};
pub use self::order::{CreateOrderRequest, OrderPatch};
pub use self::payment::{PaymentQuoteQuery, Promotion};
