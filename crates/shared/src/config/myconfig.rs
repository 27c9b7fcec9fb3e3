use anyhow::{Context, Result, anyhow};
use std::{path::PathBuf, time::Duration};

#[derive(Debug, Clone)]
pub struct AwsConfig {
    pub region: String,
    /// Custom endpoint for LocalStack or MinIO.
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TableConfig {
    pub items: String,
    pub orders: String,
    pub users: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub aws: AwsConfig,
    pub tables: TableConfig,
    pub s3_bucket: String,
    pub simulate: bool,
    pub server_address: String,
    pub docs_dir: PathBuf,
    pub presign_expiry: Duration,
    pub max_upload_bytes: usize,
    pub bcrypt_cost: u32,
    pub seed_sample_items: bool,
    pub otel_endpoint: Option<String>,
    pub dev_mode: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(value) => value
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            None => 8070,
        };

        let jwt_secret = var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;

        let aws = AwsConfig {
            region: var("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            endpoint_url: var("AWS_ENDPOINT_URL"),
        };

        let tables = TableConfig {
            items: var("DYNAMODB_ITEMS_TABLE").unwrap_or_else(|| "Items".to_string()),
            orders: var("DYNAMODB_ORDERS_TABLE").unwrap_or_else(|| "Orders".to_string()),
            users: var("DYNAMODB_USERS_TABLE").unwrap_or_else(|| "Users".to_string()),
        };

        let s3_bucket =
            var("S3_BUCKET_NAME").unwrap_or_else(|| "coffee-shop-item-images".to_string());

        let simulate = parse_flag("SIMULATE_DYNAMO", var("SIMULATE_DYNAMO"))?;

        let server_address = var("SERVER_ADDRESS")
            .map(|addr| addr.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://localhost:{port}"));

        let docs_dir = PathBuf::from(var("DOCS_DIR").unwrap_or_else(|| "./docs".to_string()));

        let presign_expiry_secs = match var("PRESIGN_EXPIRY_SECS") {
            Some(value) => value
                .parse::<u64>()
                .context("PRESIGN_EXPIRY_SECS must be a valid integer")?,
            None => 3600,
        };

        let max_upload_bytes = match var("MAX_UPLOAD_BYTES") {
            Some(value) => value
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a valid integer")?,
            None => 10 * 1024 * 1024,
        };

        let bcrypt_cost = match var("BCRYPT_COST") {
            Some(value) => value
                .parse::<u32>()
                .context("BCRYPT_COST must be a valid integer")?,
            None => 10,
        };

        let seed_sample_items = parse_flag("SEED_SAMPLE_ITEMS", var("SEED_SAMPLE_ITEMS"))?;
        let dev_mode = parse_flag("DEV_MODE", var("DEV_MODE"))?;
        let enable_file_log = parse_flag("ENABLE_FILE_LOG", var("ENABLE_FILE_LOG"))?;

        Ok(Self {
            port,
            jwt_secret,
            aws,
            tables,
            s3_bucket,
            simulate,
            server_address,
            docs_dir,
            presign_expiry: Duration::from_secs(presign_expiry_secs),
            max_upload_bytes,
            bcrypt_cost,
            seed_sample_items,
            otel_endpoint: var("OTEL_EXPORTER_OTLP_ENDPOINT"),
            dev_mode,
            enable_file_log,
        })
    }
}

fn parse_flag(name: &str, value: Option<String>) -> Result<bool> {
    match value.as_deref().map(str::trim) {
        None => Ok(false),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_the_secret_is_set() {
        let config = config_from(&[("JWT_SECRET", "s3cret")]).unwrap();

        assert_eq!(config.port, 8070);
        assert_eq!(config.aws.region, "us-east-1");
        assert!(config.aws.endpoint_url.is_none());
        assert_eq!(config.tables.items, "Items");
        assert_eq!(config.tables.orders, "Orders");
        assert_eq!(config.tables.users, "Users");
        assert_eq!(config.s3_bucket, "coffee-shop-item-images");
        assert!(!config.simulate);
        assert_eq!(config.server_address, "http://localhost:8070");
        assert_eq!(config.presign_expiry, Duration::from_secs(3600));
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.bcrypt_cost, 10);
    }

    #[test]
    fn missing_secret_is_an_error() {
        let err = config_from(&[]).unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("JWT_SECRET", "s3cret"),
            ("PORT", "9000"),
            ("SIMULATE_DYNAMO", "1"),
            ("SERVER_ADDRESS", "https://cafe.example.com/"),
            ("DYNAMODB_ITEMS_TABLE", "MenuItems"),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert!(config.simulate);
        assert_eq!(config.server_address, "https://cafe.example.com");
        assert_eq!(config.tables.items, "MenuItems");
    }

    #[test]
    fn invalid_flag_is_rejected() {
        let err = config_from(&[("JWT_SECRET", "s"), ("SIMULATE_DYNAMO", "yes")]).unwrap_err();
        assert!(err.to_string().contains("SIMULATE_DYNAMO"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(config_from(&[("JWT_SECRET", "s"), ("PORT", "http")]).is_err());
    }
}
