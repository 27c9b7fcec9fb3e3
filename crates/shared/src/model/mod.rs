mod item;
mod order;
mod user;

pub use self::item::{Item, ItemPatch};
pub use self::order::Order;
pub use self::user::User;
