mod command;
mod query;

use std::sync::Arc;

use self::command::OrderCommandRepository;
use self::query::OrderQueryRepository;

use crate::abstract_trait::{
    DynDocumentStore, DynOrderCommandRepository, DynOrderQueryRepository,
};

#[derive(Clone)]
pub struct OrderRepository {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
}

impl OrderRepository {
    pub fn new(store: DynDocumentStore, table: &str) -> Self {
        let query =
            Arc::new(OrderQueryRepository::new(store.clone(), table)) as DynOrderQueryRepository;

        let command =
            Arc::new(OrderCommandRepository::new(store, table)) as DynOrderCommandRepository;

        Self { query, command }
    }
}
