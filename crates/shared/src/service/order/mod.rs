mod command;
mod query;

use self::command::{OrderCommandService, OrderCommandServiceDeps};
use self::query::{OrderQueryService, OrderQueryServiceDeps};
use crate::abstract_trait::{
    DynItemQueryRepository, DynOrderCommandRepository, DynOrderCommandService,
    DynOrderQueryRepository, DynOrderQueryService,
};
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct OrderService {
    pub query: DynOrderQueryService,
    pub command: DynOrderCommandService,
}

#[derive(Clone)]
pub struct OrderServiceDeps {
    pub order_query: DynOrderQueryRepository,
    pub order_command: DynOrderCommandRepository,
    pub item_query: DynItemQueryRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl OrderService {
    pub async fn new(deps: OrderServiceDeps) -> Self {
        let query = Arc::new(
            OrderQueryService::new(OrderQueryServiceDeps {
                query: deps.order_query.clone(),
                registry: deps.registry.clone(),
            })
            .await,
        ) as DynOrderQueryService;

        let command = Arc::new(
            OrderCommandService::new(OrderCommandServiceDeps {
                query: deps.order_query,
                command: deps.order_command,
                item_query: deps.item_query,
                registry: deps.registry,
            })
            .await,
        ) as DynOrderCommandService;

        Self { query, command }
    }
}
