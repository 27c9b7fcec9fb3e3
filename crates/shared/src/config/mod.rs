mod aws;
mod hashing;
mod jwt;
mod myconfig;

pub use self::aws::AwsClients;
pub use self::hashing::Hashing;
pub use self::jwt::{Claims, JwtConfig};
pub use self::myconfig::{AwsConfig, Config, TableConfig};
