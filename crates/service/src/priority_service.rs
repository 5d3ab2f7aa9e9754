use std::sync::Arc;

use axum::http::StatusCode;
use common::ResponseEnvelope;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use models::enums::PriorityLevel;
use models::priority;

use crate::errors::ServiceError;
use crate::repository::Repository;
use crate::respond::{respond, respond_empty};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityInput {
    pub level: PriorityLevel,
    #[serde(default)]
    pub description: Option<String>,
}

/// Order priorities. No timestamps are kept for them.
pub struct PriorityService {
    repo: Arc<dyn Repository<priority::Model>>,
}

impl PriorityService {
    pub fn new(repo: Arc<dyn Repository<priority::Model>>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(level = ?input.level))]
    pub async fn create(&self, input: PriorityInput) -> ResponseEnvelope<priority::Model> {
        let result = self.try_create(input).await;
        if let Ok(m) = &result { info!(id = m.id, level = ?m.level, "priority created"); }
        respond(result, StatusCode::CREATED, "Priority created successfully", "Error creating priority")
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: PriorityInput) -> ResponseEnvelope<priority::Model> {
        let result = self.try_update(id, input).await;
        if let Ok(m) = &result { info!(id, level = ?m.level, "priority updated"); }
        respond(result, StatusCode::OK, "Priority updated successfully", "Error updating priority")
    }

    pub async fn get(&self, id: i64) -> ResponseEnvelope<priority::Model> {
        respond(self.find(id).await, StatusCode::OK, "Priority retrieved successfully", "Error retrieving priority")
    }

    pub async fn list(&self) -> ResponseEnvelope<Vec<priority::Model>> {
        respond(self.repo.find_all().await, StatusCode::OK, "Priorities retrieved successfully", "Error retrieving priorities")
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ResponseEnvelope<()> {
        let result = self.try_delete(id).await;
        if result.is_ok() { info!(id, "priority deleted"); }
        respond_empty(result, StatusCode::OK, "Priority deleted successfully", "Error deleting priority")
    }

    async fn try_create(&self, input: PriorityInput) -> Result<priority::Model, ServiceError> {
        priority::validate_description(input.description.as_deref())?;
        let draft = priority::Model { id: 0, level: input.level, description: input.description };
        self.repo.insert(draft).await
    }

    async fn try_update(&self, id: i64, input: PriorityInput) -> Result<priority::Model, ServiceError> {
        priority::validate_description(input.description.as_deref())?;
        let mut current = self.find(id).await?;
        current.level = input.level;
        current.description = input.description;
        self.repo.update(current).await
    }

    async fn try_delete(&self, id: i64) -> Result<(), ServiceError> {
        self.find(id).await?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("priority", id));
        }
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<priority::Model, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("priority", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{capture_logs, services};

    #[tokio::test]
    async fn priority_crud() {
        let svc = services();
        let p = svc
            .priorities
            .create(PriorityInput { level: PriorityLevel::Low, description: None })
            .await
            .response
            .unwrap();

        let env = svc
            .priorities
            .update(p.id, PriorityInput { level: PriorityLevel::Urgent, description: Some("same day".into()) })
            .await;
        assert_eq!(env.code, 200);
        assert_eq!(env.response.unwrap().level, PriorityLevel::Urgent);

        assert_eq!(svc.priorities.list().await.response.unwrap().len(), 1);
        assert_eq!(svc.priorities.delete(p.id).await.code, 200);
        assert_eq!(svc.priorities.delete(p.id).await.code, 404);
    }

    #[tokio::test]
    async fn update_and_delete_log_success() {
        let svc = services();
        let (logs, _guard) = capture_logs();
        let p = svc
            .priorities
            .create(PriorityInput { level: PriorityLevel::Medium, description: None })
            .await
            .response
            .unwrap();
        svc.priorities.update(p.id, PriorityInput { level: PriorityLevel::High, description: None }).await;
        svc.priorities.delete(p.id).await;

        let text = logs.text();
        assert!(text.contains("priority created"));
        assert!(text.contains("priority updated"));
        assert!(text.contains("priority deleted"));
    }
}
