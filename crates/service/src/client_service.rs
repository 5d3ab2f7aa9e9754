use std::sync::Arc;

use axum::http::StatusCode;
use common::ResponseEnvelope;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use models::client;

use crate::clock;
use crate::errors::ServiceError;
use crate::repository::Repository;
use crate::respond::{respond, respond_empty};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl ClientInput {
    fn validate(&self) -> Result<(), ServiceError> {
        client::validate_name(&self.name)?;
        client::validate_email(&self.email)?;
        client::validate_phone(self.phone.as_deref())?;
        client::validate_address(self.address.as_deref())?;
        Ok(())
    }
}

/// Customers who own orders.
pub struct ClientService {
    repo: Arc<dyn Repository<client::Model>>,
}

impl ClientService {
    pub fn new(repo: Arc<dyn Repository<client::Model>>) -> Self { Self { repo } }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: ClientInput) -> ResponseEnvelope<client::Model> {
        let result = self.try_create(input).await;
        if let Ok(m) = &result { info!(id = m.id, "client created"); }
        respond(result, StatusCode::CREATED, "Client created successfully", "Error creating client")
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: ClientInput) -> ResponseEnvelope<client::Model> {
        let result = self.try_update(id, input).await;
        if result.is_ok() { info!(id, "client updated"); }
        respond(result, StatusCode::OK, "Client updated successfully", "Error updating client")
    }

    pub async fn get(&self, id: i64) -> ResponseEnvelope<client::Model> {
        respond(self.find(id).await, StatusCode::OK, "Client retrieved successfully", "Error retrieving client")
    }

    pub async fn list(&self) -> ResponseEnvelope<Vec<client::Model>> {
        respond(self.repo.find_all().await, StatusCode::OK, "Clients retrieved successfully", "Error retrieving clients")
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ResponseEnvelope<()> {
        let result = self.try_delete(id).await;
        if result.is_ok() { info!(id, "client deleted"); }
        respond_empty(result, StatusCode::OK, "Client deleted successfully", "Error deleting client")
    }

    async fn try_create(&self, input: ClientInput) -> Result<client::Model, ServiceError> {
        input.validate()?;
        let now = clock::now();
        let draft = client::Model {
            id: 0,
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            phone: input.phone,
            address: input.address,
            created_at: now,
            updated_at: now,
        };
        self.repo.insert(draft).await
    }

    async fn try_update(&self, id: i64, input: ClientInput) -> Result<client::Model, ServiceError> {
        input.validate()?;
        let mut current = self.find(id).await?;
        current.name = input.name.trim().to_string();
        current.email = input.email.trim().to_string();
        current.phone = input.phone;
        current.address = input.address;
        current.updated_at = clock::next_modification(current.updated_at);
        self.repo.update(current).await
    }

    async fn try_delete(&self, id: i64) -> Result<(), ServiceError> {
        self.find(id).await?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("client", id));
        }
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<client::Model, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("client", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{capture_logs, client_input, services};

    #[tokio::test]
    async fn client_crud() {
        let svc = services();
        let env = svc.clients.create(client_input("ana@example.com")).await;
        assert_eq!(env.code, 201);
        let c = env.response.unwrap();
        assert_eq!(c.created_at, c.updated_at);

        let mut input = client_input("ana.garcia@example.com");
        input.phone = Some("+34 600 000 000".into());
        let updated = svc.clients.update(c.id, input).await.response.unwrap();
        assert_eq!(updated.email, "ana.garcia@example.com");
        assert_eq!(updated.phone.as_deref(), Some("+34 600 000 000"));
        assert!(updated.updated_at > c.updated_at);

        assert_eq!(svc.clients.delete(c.id).await.code, 200);
        assert_eq!(svc.clients.get(c.id).await.code, 404);
    }

    #[tokio::test]
    async fn rejects_invalid_email() {
        let svc = services();
        let env = svc.clients.create(client_input("not-an-email")).await;
        assert_eq!(env.code, 400);
        assert_eq!(env.message, "Error creating client: validation error: invalid email");
    }

    #[tokio::test]
    async fn update_and_delete_log_success() {
        let svc = services();
        let (logs, _guard) = capture_logs();
        let c = svc.clients.create(client_input("log@example.com")).await.response.unwrap();
        svc.clients.update(c.id, client_input("log2@example.com")).await;
        svc.clients.delete(c.id).await;

        let text = logs.text();
        assert!(text.contains("client updated"));
        assert!(text.contains("client deleted"));
    }
}
