mod auth;
mod invoice;
mod item;
mod order;
mod payment;
mod seed;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::invoice::{InvoiceService, InvoiceServiceDeps, InvoiceTemplate, invoice_file_name};
pub use self::item::{ItemService, ItemServiceDeps};
pub use self::order::{OrderService, OrderServiceDeps};
pub use self::payment::{PaymentService, PaymentServiceDeps};
pub use self::seed::seed_sample_items;
