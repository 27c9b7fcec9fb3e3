mod item;
mod order;
mod user;

pub use self::item::ItemRepository;
pub use self::order::OrderRepository;
pub use self::user::UserRepository;
