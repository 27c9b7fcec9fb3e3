mod command;
mod query;

use std::sync::Arc;

use self::command::UserCommandRepository;
use self::query::UserQueryRepository;

use crate::abstract_trait::{DynDocumentStore, DynUserCommandRepository, DynUserQueryRepository};

#[derive(Clone)]
pub struct UserRepository {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
}

impl UserRepository {
    pub fn new(store: DynDocumentStore, table: &str) -> Self {
        let query =
            Arc::new(UserQueryRepository::new(store.clone(), table)) as DynUserQueryRepository;

        let command =
            Arc::new(UserCommandRepository::new(store, table)) as DynUserCommandRepository;

        Self { query, command }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::User, store::InMemoryDocumentStore};
    use chrono::Utc;

    #[tokio::test]
    async fn user_is_found_by_email_and_id() {
        let repo = UserRepository::new(Arc::new(InMemoryDocumentStore::new()), "Users");
        let now = Utc::now();
        let user = User {
            id: "u1".into(),
            email: "barista@example.com".into(),
            password: "hash".into(),
            created_at: now,
            updated_at: now,
        };
        repo.command.create_user(&user).await.unwrap();

        let by_email = repo.query.find_by_email("barista@example.com").await.unwrap();
        assert_eq!(by_email.map(|u| u.id), Some("u1".to_string()));

        let by_id = repo.query.find_by_id("u1").await.unwrap();
        assert_eq!(by_id.map(|u| u.email), Some("barista@example.com".to_string()));

        assert!(repo.query.find_by_email("other@example.com").await.unwrap().is_none());
    }
}
