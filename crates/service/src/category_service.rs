use std::sync::Arc;

use axum::http::StatusCode;
use common::ResponseEnvelope;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use models::category;
use models::enums::{CategoryStatus, ProductCategory};

use crate::clock;
use crate::errors::ServiceError;
use crate::repository::Repository;
use crate::respond::{respond, respond_empty};

/// Inbound shape for create and update. Update replaces every field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInput {
    pub category: ProductCategory,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: CategoryStatus,
}

/// Product category management.
pub struct CategoryService {
    repo: Arc<dyn Repository<category::Model>>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn Repository<category::Model>>) -> Self { Self { repo } }

    /// Create a category; both timestamps get the same instant.
    #[instrument(skip(self, input), fields(category = ?input.category))]
    pub async fn create(&self, input: CategoryInput) -> ResponseEnvelope<category::Model> {
        let result = self.try_create(input).await;
        if let Ok(m) = &result { info!(id = m.id, "category created"); }
        respond(result, StatusCode::CREATED, "Category created successfully", "Error creating category")
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: CategoryInput) -> ResponseEnvelope<category::Model> {
        let result = self.try_update(id, input).await;
        if result.is_ok() { info!(id, "category updated"); }
        respond(result, StatusCode::OK, "Category updated successfully", "Error updating category")
    }

    pub async fn get(&self, id: i64) -> ResponseEnvelope<category::Model> {
        let result = self.find(id).await;
        respond(result, StatusCode::OK, "Category retrieved successfully", "Error retrieving category")
    }

    pub async fn list(&self) -> ResponseEnvelope<Vec<category::Model>> {
        let result = self.repo.find_all().await;
        respond(result, StatusCode::OK, "Categories retrieved successfully", "Error retrieving categories")
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ResponseEnvelope<()> {
        let result = self.try_delete(id).await;
        if result.is_ok() { info!(id, "category deleted"); }
        respond_empty(result, StatusCode::OK, "Category deleted successfully", "Error deleting category")
    }

    async fn try_create(&self, input: CategoryInput) -> Result<category::Model, ServiceError> {
        category::validate_description(input.description.as_deref())?;
        let now = clock::now();
        let draft = category::Model {
            id: 0,
            category: input.category,
            description: input.description,
            created_at: now,
            updated_at: now,
            status: input.status,
        };
        self.repo.insert(draft).await
    }

    async fn try_update(&self, id: i64, input: CategoryInput) -> Result<category::Model, ServiceError> {
        category::validate_description(input.description.as_deref())?;
        let mut current = self.find(id).await?;
        current.category = input.category;
        current.description = input.description;
        current.status = input.status;
        current.updated_at = clock::next_modification(current.updated_at);
        self.repo.update(current).await
    }

    async fn try_delete(&self, id: i64) -> Result<(), ServiceError> {
        self.find(id).await?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("category", id));
        }
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<category::Model, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("category", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{category_input, services};

    #[tokio::test]
    async fn create_assigns_id_and_equal_timestamps() {
        let svc = services();
        let env = svc.categories.create(category_input("Gadgets")).await;
        assert_eq!(env.code, 201);
        assert_eq!(env.message, "Category created successfully");
        let c = env.response.unwrap();
        assert!(c.id > 0);
        assert_eq!(c.created_at, c.updated_at);
        assert_eq!(c.category, ProductCategory::Electronics);
        assert_eq!(c.status, CategoryStatus::Active);
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_advances_modification() {
        let svc = services();
        let created = svc.categories.create(category_input("Gadgets")).await.response.unwrap();

        let input = CategoryInput {
            category: ProductCategory::Home,
            description: Some("Updated Gadgets".into()),
            status: CategoryStatus::Inactive,
        };
        let env = svc.categories.update(created.id, input).await;
        assert_eq!(env.code, 200);
        let updated = env.response.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.category, ProductCategory::Home);
        assert_eq!(updated.description.as_deref(), Some("Updated Gadgets"));
        assert_eq!(updated.status, CategoryStatus::Inactive);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn repeated_updates_strictly_increase_modification() {
        let svc = services();
        let created = svc.categories.create(category_input("a")).await.response.unwrap();
        let mut last = created.updated_at;
        for i in 0..5 {
            let u = svc.categories.update(created.id, category_input(&format!("v{i}"))).await.response.unwrap();
            assert!(u.updated_at > last);
            last = u.updated_at;
        }
    }

    #[tokio::test]
    async fn update_of_missing_id_fails_without_mutation() {
        let svc = services();
        let existing = svc.categories.create(category_input("keep")).await.response.unwrap();

        let env = svc.categories.update(999, category_input("ghost")).await;
        assert_eq!(env.code, 404);
        assert!(env.response.is_none());
        assert_eq!(env.message, "Error updating category: category 999 not found");

        let all = svc.categories.list().await.response.unwrap();
        assert_eq!(all, vec![existing]);
    }

    #[tokio::test]
    async fn invalid_description_is_a_validation_failure() {
        let svc = services();
        let env = svc.categories.create(category_input(&"x".repeat(300))).await;
        assert_eq!(env.code, 400);
        assert!(env.message.starts_with("Error creating category: validation error"));
        assert!(svc.categories.list().await.response.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_returns_exactly_the_stored_set() {
        let svc = services();
        let mut ids = Vec::new();
        for d in ["a", "b", "c"] {
            ids.push(svc.categories.create(category_input(d)).await.response.unwrap().id);
        }
        svc.categories.delete(ids[1]).await;

        let env = svc.categories.list().await;
        assert_eq!(env.code, 200);
        let mut listed: Vec<i64> = env.response.unwrap().into_iter().map(|c| c.id).collect();
        listed.sort();
        assert_eq!(listed, vec![ids[0], ids[2]]);
    }

    #[tokio::test]
    async fn example_scenario_create_update_delete() {
        let svc = services();
        let created = svc.categories.create(category_input("Gadgets")).await;
        assert_eq!(created.code, 201);
        let c = created.response.unwrap();

        let updated = svc.categories.update(c.id, category_input("Updated Gadgets")).await;
        assert_eq!(updated.code, 200);
        assert!(updated.response.unwrap().updated_at > c.updated_at);

        let deleted = svc.categories.delete(c.id).await;
        assert_eq!(deleted.code, 200);
        assert!(deleted.response.is_none());
        assert_eq!(deleted.message, "Category deleted successfully");

        let again = svc.categories.update(c.id, category_input("too late")).await;
        assert!(!again.is_success());
        assert_eq!(svc.categories.get(c.id).await.code, 404);
    }

    #[tokio::test]
    async fn delete_of_missing_id_is_not_found() {
        let svc = services();
        let env = svc.categories.delete(12).await;
        assert_eq!(env.code, 404);
        assert_eq!(env.message, "Error deleting category: category 12 not found");
    }
}
