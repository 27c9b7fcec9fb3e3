mod command;
mod query;

use std::sync::Arc;

use self::command::ItemCommandRepository;
use self::query::ItemQueryRepository;

use crate::abstract_trait::{DynDocumentStore, DynItemCommandRepository, DynItemQueryRepository};

#[derive(Clone)]
pub struct ItemRepository {
    pub query: DynItemQueryRepository,
    pub command: DynItemCommandRepository,
}

impl ItemRepository {
    pub fn new(store: DynDocumentStore, table: &str) -> Self {
        let query =
            Arc::new(ItemQueryRepository::new(store.clone(), table)) as DynItemQueryRepository;

        let command =
            Arc::new(ItemCommandRepository::new(store, table)) as DynItemCommandRepository;

        Self { query, command }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{Item, ItemPatch},
        store::InMemoryDocumentStore,
    };
    use chrono::Utc;

    fn item(id: &str, name: &str, price: f64) -> Item {
        let now = Utc::now();
        Item {
            id: id.to_string(),
            item_name: name.to_string(),
            item_category: "Coffee".to_string(),
            item_price: price,
            item_qty: 10,
            item_description: String::new(),
            item_image: None,
            is_s3_image: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn repository() -> ItemRepository {
        ItemRepository::new(Arc::new(InMemoryDocumentStore::new()), "Items")
    }

    #[tokio::test]
    async fn created_item_is_found_by_id() {
        let repo = repository();
        let latte = item("1", "Caffe Latte", 4.5);
        repo.command.create_item(&latte).await.unwrap();

        let found = repo.query.find_by_id("1").await.unwrap();
        assert_eq!(found, Some(latte));
        assert!(repo.query.find_by_id("2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let repo = repository();
        for (id, name) in [("1", "Caffe Latte"), ("2", "Iced LATTE"), ("3", "Espresso")] {
            repo.command.create_item(&item(id, name, 3.0)).await.unwrap();
        }

        let mut hits: Vec<String> = repo
            .query
            .search_by_name("latte")
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.item_name)
            .collect();
        hits.sort();

        assert_eq!(hits, vec!["Caffe Latte", "Iced LATTE"]);
        assert_eq!(repo.query.search_by_name("").await.unwrap().len(), 3);
        assert!(repo.query.search_by_name("mocha").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_only_touches_patched_fields() {
        let repo = repository();
        let original = item("1", "Caffe Latte", 4.5);
        repo.command.create_item(&original).await.unwrap();

        let patch = ItemPatch {
            item_price: Some(5.0),
            ..Default::default()
        };
        let updated = repo.command.update_item("1", &patch).await.unwrap();

        assert_eq!(updated.item_price, 5.0);
        assert_eq!(updated.item_name, "Caffe Latte");
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= original.updated_at);
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let repo = repository();
        repo.command.create_item(&item("1", "Mocha", 4.0)).await.unwrap();
        repo.command.delete_item("1").await.unwrap();
        assert!(repo.query.find_all().await.unwrap().is_empty());
    }
}
