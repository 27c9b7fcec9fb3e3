use crate::{
    abstract_trait::{
        DynDocumentStore, DynHashing, DynInvoiceService, DynJwtService, DynObjectStore,
        DynPaymentService,
    },
    config::Config,
    repository::{ItemRepository, OrderRepository, UserRepository},
    service::{
        AuthService, AuthServiceDeps, InvoiceService, InvoiceServiceDeps, ItemService,
        ItemServiceDeps, OrderService, OrderServiceDeps, PaymentService, PaymentServiceDeps,
        seed_sample_items,
    },
};
use anyhow::Result;
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;
use tracing::warn;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: AuthService,
    pub item_service: ItemService,
    pub order_service: OrderService,
    pub payment_service: DynPaymentService,
    pub invoice_service: DynInvoiceService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"<AuthService>")
            .field("item_service", &"<ItemService>")
            .field("order_service", &"<OrderService>")
            .field("payment_service", &"<PaymentService>")
            .field("invoice_service", &"<InvoiceService>")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub store: DynDocumentStore,
    pub object_store: DynObjectStore,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
    pub config: Config,
    pub registry: Arc<Mutex<Registry>>,
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps) -> Result<Self> {
        let DependenciesInjectDeps {
            store,
            object_store,
            hash,
            jwt_config,
            config,
            registry,
        } = deps;

        let item_repository = ItemRepository::new(store.clone(), &config.tables.items);
        let order_repository = OrderRepository::new(store.clone(), &config.tables.orders);
        let user_repository = UserRepository::new(store, &config.tables.users);

        if config.seed_sample_items
            && let Err(e) =
                seed_sample_items(&item_repository.query, &item_repository.command).await
        {
            warn!("⚠️ Sample data was not loaded: {e}");
        }

        let auth_service = AuthService::new(AuthServiceDeps {
            hash,
            jwt: jwt_config,
            user_query: user_repository.query,
            user_command: user_repository.command,
            registry: registry.clone(),
        })
        .await;

        let item_service = ItemService::new(ItemServiceDeps {
            item_query: item_repository.query.clone(),
            item_command: item_repository.command.clone(),
            object_store,
            presign_expiry: config.presign_expiry,
            registry: registry.clone(),
        })
        .await;

        let order_service = OrderService::new(OrderServiceDeps {
            order_query: order_repository.query.clone(),
            order_command: order_repository.command,
            item_query: item_repository.query.clone(),
            registry: registry.clone(),
        })
        .await;

        let payment_service = Arc::new(
            PaymentService::new(PaymentServiceDeps {
                order_query: order_repository.query,
                registry: registry.clone(),
            })
            .await,
        ) as DynPaymentService;

        let invoice_service = Arc::new(
            InvoiceService::new(InvoiceServiceDeps {
                item_query: item_repository.query,
                docs_dir: config.docs_dir.clone(),
                server_address: config.server_address.clone(),
                registry,
            })
            .await,
        ) as DynInvoiceService;

        Ok(Self {
            auth_service,
            item_service,
            order_service,
            payment_service,
            invoice_service,
        })
    }
}
