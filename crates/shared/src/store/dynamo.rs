use crate::{
    abstract_trait::{Document, DocumentStoreTrait},
    errors::RepositoryError,
    store::{ID_ATTRIBUTE, build_set_expression},
};
use async_trait::async_trait;
use aws_sdk_dynamodb::{
    Client,
    types::{AttributeValue, ReturnValue},
};
use tracing::debug;

pub struct DynamoDocumentStore {
    client: Client,
}

impl DynamoDocumentStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn key(id: &str) -> AttributeValue {
        AttributeValue::S(id.to_string())
    }
}

#[async_trait]
impl DocumentStoreTrait for DynamoDocumentStore {
    async fn put(&self, table: &str, document: Document) -> Result<(), RepositoryError> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(document))
            .send()
            .await
            .map_err(|e| RepositoryError::Dynamo(format!("put_item on {table} failed: {e}")))?;

        debug!(table = %table, "Stored document in DynamoDB");

        Ok(())
    }

    async fn get(&self, table: &str, id: &str) -> Result<Option<Document>, RepositoryError> {
        let result = self
            .client
            .get_item()
            .table_name(table)
            .key(ID_ATTRIBUTE, Self::key(id))
            .send()
            .await
            .map_err(|e| RepositoryError::Dynamo(format!("get_item on {table} failed: {e}")))?;

        Ok(result.item)
    }

    async fn scan(&self, table: &str) -> Result<Vec<Document>, RepositoryError> {
        let documents = self
            .client
            .scan()
            .table_name(table)
            .into_paginator()
            .items()
            .send()
            .collect::<Result<Vec<_>, _>>()
            .await
            .map_err(|e| RepositoryError::Dynamo(format!("scan on {table} failed: {e}")))?;

        debug!(table = %table, count = documents.len(), "Scanned DynamoDB table");

        Ok(documents)
    }

    async fn scan_eq(
        &self,
        table: &str,
        attribute: &str,
        value: AttributeValue,
    ) -> Result<Vec<Document>, RepositoryError> {
        self.client
            .scan()
            .table_name(table)
            .filter_expression("#a = :v")
            .expression_attribute_names("#a", attribute)
            .expression_attribute_values(":v", value)
            .into_paginator()
            .items()
            .send()
            .collect::<Result<Vec<_>, _>>()
            .await
            .map_err(|e| RepositoryError::Dynamo(format!("scan on {table} failed: {e}")))
    }

    async fn update(
        &self,
        table: &str,
        id: &str,
        patch: Document,
    ) -> Result<Document, RepositoryError> {
        let Some(expr) = build_set_expression(&patch) else {
            return self.get(table, id).await?.ok_or(RepositoryError::NotFound);
        };

        let result = self
            .client
            .update_item()
            .table_name(table)
            .key(ID_ATTRIBUTE, Self::key(id))
            .update_expression(expr.expression)
            .set_expression_attribute_names(Some(expr.names))
            .set_expression_attribute_values(Some(expr.values))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| RepositoryError::Dynamo(format!("update_item on {table} failed: {e}")))?;

        debug!(table = %table, id = %id, "Updated document in DynamoDB");

        result.attributes.ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), RepositoryError> {
        self.client
            .delete_item()
            .table_name(table)
            .key(ID_ATTRIBUTE, Self::key(id))
            .send()
            .await
            .map_err(|e| RepositoryError::Dynamo(format!("delete_item on {table} failed: {e}")))?;

        debug!(table = %table, id = %id, "Deleted document from DynamoDB");

        Ok(())
    }
}
