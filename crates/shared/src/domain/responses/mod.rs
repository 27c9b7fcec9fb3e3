mod api;
mod invoice;
mod item;
mod order;
mod payment;
mod token;
mod user;

pub use self::api::ApiResponse;
pub use self::invoice::InvoiceResponse;
pub use self::item::ItemResponse;
pub use self::order::OrderResponse;
pub use self::payment::PaymentQuoteResponse;
pub use self::token::TokenResponse;
pub use self::user::UserResponse;
