mod command;
mod query;

use self::command::{ItemCommandService, ItemCommandServiceDeps};
use self::query::{ItemQueryService, ItemQueryServiceDeps};
use crate::{
    abstract_trait::{
        DynItemCommandRepository, DynItemCommandService, DynItemQueryRepository,
        DynItemQueryService, DynObjectStore,
    },
    domain::responses::ItemResponse,
    model::Item as ItemModel,
};
use prometheus_client::registry::Registry;
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tracing::warn;

#[derive(Clone)]
pub struct ItemService {
    pub query: DynItemQueryService,
    pub command: DynItemCommandService,
}

#[derive(Clone)]
pub struct ItemServiceDeps {
    pub item_query: DynItemQueryRepository,
    pub item_command: DynItemCommandRepository,
    pub object_store: DynObjectStore,
    pub presign_expiry: Duration,
    pub registry: Arc<Mutex<Registry>>,
}

impl ItemService {
    pub async fn new(deps: ItemServiceDeps) -> Self {
        let links = ImageLinks {
            object_store: deps.object_store.clone(),
            expiry: deps.presign_expiry,
        };

        let query = Arc::new(
            ItemQueryService::new(ItemQueryServiceDeps {
                query: deps.item_query.clone(),
                links: links.clone(),
                registry: deps.registry.clone(),
            })
            .await,
        ) as DynItemQueryService;

        let command = Arc::new(
            ItemCommandService::new(ItemCommandServiceDeps {
                query: deps.item_query,
                command: deps.item_command,
                links,
                registry: deps.registry,
            })
            .await,
        ) as DynItemCommandService;

        Self { query, command }
    }
}

/// Attaches a fresh presigned read URL to items whose image is in object storage.
#[derive(Clone)]
pub struct ImageLinks {
    pub object_store: DynObjectStore,
    pub expiry: Duration,
}

impl ImageLinks {
    pub async fn response(&self, item: ItemModel) -> ItemResponse {
        let image_url = match item.stored_image_key() {
            Some(key) => match self.object_store.presigned_url(key, self.expiry).await {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!("⚠️ Failed to presign image {key}: {e}");
                    None
                }
            },
            None => None,
        };

        ItemResponse::with_image_url(item, image_url)
    }

    pub async fn responses(&self, items: Vec<ItemModel>) -> Vec<ItemResponse> {
        let mut responses = Vec::with_capacity(items.len());
        for item in items {
            responses.push(self.response(item).await);
        }
        responses
    }

    /// Best-effort removal; failures are logged and swallowed.
    pub async fn discard(&self, key: &str) {
        if let Err(e) = self.object_store.delete(key).await {
            warn!("⚠️ Failed to delete image {key} from object storage: {e}");
        }
    }
}
