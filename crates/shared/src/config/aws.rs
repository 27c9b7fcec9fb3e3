use crate::config::AwsConfig;
use aws_config::{BehaviorVersion, Region};
use tracing::info;

pub struct AwsClients {
    pub dynamo: aws_sdk_dynamodb::Client,
    pub s3: aws_sdk_s3::Client,
}

impl AwsClients {
    /// Credentials come from the default provider chain.
    pub async fn load(config: &AwsConfig) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut dynamo_config = aws_sdk_dynamodb::config::Builder::from(&shared);
        let mut s3_config = aws_sdk_s3::config::Builder::from(&shared);

        if let Some(endpoint) = &config.endpoint_url {
            dynamo_config = dynamo_config.endpoint_url(endpoint);
            s3_config = s3_config.endpoint_url(endpoint).force_path_style(true);
        }

        info!(
            region = %config.region,
            endpoint = ?config.endpoint_url,
            "Connected AWS clients"
        );

        Self {
            dynamo: aws_sdk_dynamodb::Client::from_conf(dynamo_config.build()),
            s3: aws_sdk_s3::Client::from_conf(s3_config.build()),
        }
    }
}
