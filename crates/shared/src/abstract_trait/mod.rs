mod auth;
mod blob;
mod hashing;
mod invoice;
mod item;
mod jwt;
mod order;
mod payment;
mod store;
mod user;

pub use self::auth::{
    DynIdentityService, DynLoginService, DynRegisterService, IdentityServiceTrait,
    LoginServiceTrait, RegisterServiceTrait,
};
pub use self::blob::{DynObjectStore, ObjectStoreTrait, StoredObject};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::invoice::{DynInvoiceService, InvoiceServiceTrait};
pub use self::item::{
    DynItemCommandRepository, DynItemCommandService, DynItemQueryRepository, DynItemQueryService,
    ItemCommandRepositoryTrait, ItemCommandServiceTrait, ItemQueryRepositoryTrait,
    ItemQueryServiceTrait,
};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::payment::{DynPaymentService, PaymentServiceTrait};
pub use self::store::{Document, DocumentStoreTrait, DynDocumentStore};
pub use self::user::{
    DynUserCommandRepository, DynUserQueryRepository, UserCommandRepositoryTrait,
    UserQueryRepositoryTrait,
};
