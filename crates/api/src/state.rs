use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynDocumentStore, DynHashing, DynJwtService, DynObjectStore},
    blob::{InMemoryObjectStore, S3ObjectStore},
    config::{AwsClients, Config, Hashing, JwtConfig},
    di::{DependenciesInject, DependenciesInjectDeps},
    store::{DynamoDocumentStore, InMemoryDocumentStore},
    utils::{ProcessMetrics, run_metrics_collector},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub process_metrics: Arc<ProcessMetrics>,
    pub config: Config,
}

impl AppState {
    /// Connects to DynamoDB and S3, or to the in-memory stand-ins when
    /// simulation mode is on.
    pub async fn new(config: &Config) -> Result<Self> {
        let (store, object_store) = if config.simulate {
            info!("🧪 Simulation mode: using in-memory tables and object storage");
            (
                Arc::new(InMemoryDocumentStore::new()) as DynDocumentStore,
                Arc::new(InMemoryObjectStore::new(config.server_address.clone())) as DynObjectStore,
            )
        } else {
            let clients = AwsClients::load(&config.aws).await;
            (
                Arc::new(DynamoDocumentStore::new(clients.dynamo)) as DynDocumentStore,
                Arc::new(S3ObjectStore::new(clients.s3, config.s3_bucket.clone()))
                    as DynObjectStore,
            )
        };

        Self::with_backends(config, store, object_store).await
    }

    pub async fn with_backends(
        config: &Config,
        store: DynDocumentStore,
        object_store: DynObjectStore,
    ) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hash = Arc::new(Hashing::new(config.bcrypt_cost)) as DynHashing;
        let registry = Arc::new(Mutex::new(Registry::default()));
        let process_metrics = Arc::new(ProcessMetrics::new());

        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            store,
            object_store,
            hash,
            jwt_config: jwt_config.clone(),
            config: config.clone(),
            registry: registry.clone(),
        })
        .await
        .context("Failed to initialize dependency injection container")?;

        process_metrics.register(&mut *registry.lock().await);

        tokio::spawn(run_metrics_collector(process_metrics.clone()));

        Ok(Self {
            jwt_config,
            di_container,
            registry,
            process_metrics,
            config: config.clone(),
        })
    }
}

