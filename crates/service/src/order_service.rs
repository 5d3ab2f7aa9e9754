use std::sync::Arc;

use axum::http::StatusCode;
use chrono::SubsecRound;
use common::ResponseEnvelope;
use rust_decimal::Decimal;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use models::enums::{OrderStatus, PaymentMethod};
use models::{client, order, priority};

use crate::clock;
use crate::errors::ServiceError;
use crate::repository::Repository;
use crate::respond::{respond, respond_empty};

/// Inbound order. `order_date` defaults to now on create and to the stored
/// value on update; `status` defaults to PENDING.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderInput {
    pub client_id: i64,
    #[serde(default)]
    pub priority_id: Option<i64>,
    #[serde(default)]
    pub order_date: Option<DateTimeWithTimeZone>,
    #[serde(default)]
    pub delivery_date: Option<DateTimeWithTimeZone>,
    #[serde(default)]
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub shipping_address: String,
    #[serde(default)]
    pub tracking_number: Option<String>,
}

impl OrderInput {
    fn validate(&self, order_date: DateTimeWithTimeZone) -> Result<(), ServiceError> {
        order::validate_total_amount(self.total_amount)?;
        order::validate_shipping_address(&self.shipping_address)?;
        order::validate_tracking_number(self.tracking_number.as_deref())?;
        order::validate_delivery_window(order_date, self.delivery_date)?;
        Ok(())
    }
}

/// Orders reference a client and, optionally, a priority; both are checked
/// before anything is written.
pub struct OrderService {
    orders: Arc<dyn Repository<order::Model>>,
    clients: Arc<dyn Repository<client::Model>>,
    priorities: Arc<dyn Repository<priority::Model>>,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn Repository<order::Model>>,
        clients: Arc<dyn Repository<client::Model>>,
        priorities: Arc<dyn Repository<priority::Model>>,
    ) -> Self {
        Self { orders, clients, priorities }
    }

    #[instrument(skip(self, input), fields(client_id = input.client_id))]
    pub async fn create(&self, input: OrderInput) -> ResponseEnvelope<order::Model> {
        let result = self.try_create(input).await;
        if let Ok(m) = &result { info!(id = m.id, total = %m.total_amount, "order created"); }
        respond(result, StatusCode::CREATED, "Order created successfully", "Error creating order")
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: OrderInput) -> ResponseEnvelope<order::Model> {
        let result = self.try_update(id, input).await;
        if let Ok(m) = &result { info!(id, status = ?m.status, "order updated"); }
        respond(result, StatusCode::OK, "Order updated successfully", "Error updating order")
    }

    pub async fn get(&self, id: i64) -> ResponseEnvelope<order::Model> {
        respond(self.find(id).await, StatusCode::OK, "Order retrieved successfully", "Error retrieving order")
    }

    pub async fn list(&self) -> ResponseEnvelope<Vec<order::Model>> {
        respond(self.orders.find_all().await, StatusCode::OK, "Orders retrieved successfully", "Error retrieving orders")
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ResponseEnvelope<()> {
        let result = self.try_delete(id).await;
        if result.is_ok() { info!(id, "order deleted"); }
        respond_empty(result, StatusCode::OK, "Order deleted successfully", "Error deleting order")
    }

    async fn try_create(&self, input: OrderInput) -> Result<order::Model, ServiceError> {
        let now = clock::now();
        let order_date = input.order_date.map(|d| d.trunc_subsecs(6)).unwrap_or(now);
        input.validate(order_date)?;
        self.ensure_references(&input).await?;
        let draft = order::Model {
            id: 0,
            client_id: input.client_id,
            priority_id: input.priority_id,
            order_date,
            delivery_date: input.delivery_date.map(|d| d.trunc_subsecs(6)),
            status: input.status,
            total_amount: input.total_amount,
            payment_method: input.payment_method,
            shipping_address: input.shipping_address.trim().to_string(),
            updated_at: now,
            tracking_number: input.tracking_number,
        };
        self.orders.insert(draft).await
    }

    async fn try_update(&self, id: i64, input: OrderInput) -> Result<order::Model, ServiceError> {
        let mut current = self.find(id).await?;
        let order_date = input.order_date.map(|d| d.trunc_subsecs(6)).unwrap_or(current.order_date);
        input.validate(order_date)?;
        self.ensure_references(&input).await?;
        current.client_id = input.client_id;
        current.priority_id = input.priority_id;
        current.order_date = order_date;
        current.delivery_date = input.delivery_date.map(|d| d.trunc_subsecs(6));
        current.status = input.status;
        current.total_amount = input.total_amount;
        current.payment_method = input.payment_method;
        current.shipping_address = input.shipping_address.trim().to_string();
        current.tracking_number = input.tracking_number;
        current.updated_at = clock::next_modification(current.updated_at);
        self.orders.update(current).await
    }

    async fn try_delete(&self, id: i64) -> Result<(), ServiceError> {
        self.find(id).await?;
        if !self.orders.delete(id).await? {
            return Err(ServiceError::not_found("order", id));
        }
        Ok(())
    }

    async fn ensure_references(&self, input: &OrderInput) -> Result<(), ServiceError> {
        if self.clients.find_by_id(input.client_id).await?.is_none() {
            return Err(ServiceError::Validation(format!("client {} does not exist", input.client_id)));
        }
        if let Some(pid) = input.priority_id {
            if self.priorities.find_by_id(pid).await?.is_none() {
                return Err(ServiceError::Validation(format!("priority {pid} does not exist")));
            }
        }
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<order::Model, ServiceError> {
        self.orders.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("order", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority_service::PriorityInput;
    use crate::test_support::{client_input, order_input, services};
    use chrono::TimeDelta;
    use models::enums::PriorityLevel;

    #[tokio::test]
    async fn create_defaults_status_and_order_date() {
        let svc = services();
        let c = svc.clients.create(client_input("buyer@example.com")).await.response.unwrap();

        let env = svc.orders.create(order_input(c.id)).await;
        assert_eq!(env.code, 201);
        let o = env.response.unwrap();
        assert!(o.id > 0);
        assert_eq!(o.status, OrderStatus::Pending);
        assert_eq!(o.order_date, o.updated_at);
        assert_eq!(o.client_id, c.id);
        assert_eq!(o.total_amount, Decimal::new(19999, 2));
    }

    #[tokio::test]
    async fn create_rejects_unknown_client() {
        let svc = services();
        let env = svc.orders.create(order_input(404)).await;
        assert_eq!(env.code, 400);
        assert_eq!(env.message, "Error creating order: validation error: client 404 does not exist");
        assert!(svc.orders.list().await.response.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_unknown_priority() {
        let svc = services();
        let c = svc.clients.create(client_input("p@example.com")).await.response.unwrap();
        let mut input = order_input(c.id);
        input.priority_id = Some(77);
        let env = svc.orders.create(input).await;
        assert_eq!(env.code, 400);
    }

    #[tokio::test]
    async fn create_rejects_negative_total() {
        let svc = services();
        let c = svc.clients.create(client_input("neg@example.com")).await.response.unwrap();
        let mut input = order_input(c.id);
        input.total_amount = Decimal::new(-500, 2);
        let env = svc.orders.create(input).await;
        assert_eq!(env.code, 400);
    }

    #[tokio::test]
    async fn create_rejects_delivery_before_order() {
        let svc = services();
        let c = svc.clients.create(client_input("late@example.com")).await.response.unwrap();
        let mut input = order_input(c.id);
        let placed = clock::now();
        input.order_date = Some(placed);
        input.delivery_date = Some(placed - TimeDelta::days(2));
        assert_eq!(svc.orders.create(input).await.code, 400);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_order_date_when_omitted() {
        let svc = services();
        let c = svc.clients.create(client_input("u@example.com")).await.response.unwrap();
        let p = svc
            .priorities
            .create(PriorityInput { level: PriorityLevel::High, description: None })
            .await
            .response
            .unwrap();
        let created = svc.orders.create(order_input(c.id)).await.response.unwrap();

        let mut input = order_input(c.id);
        input.priority_id = Some(p.id);
        input.status = OrderStatus::Shipped;
        input.payment_method = PaymentMethod::Paypal;
        input.tracking_number = Some("TRK-0001".into());
        input.delivery_date = Some(created.order_date + TimeDelta::days(3));
        let env = svc.orders.update(created.id, input).await;
        assert_eq!(env.code, 200);
        let updated = env.response.unwrap();
        assert_eq!(updated.status, OrderStatus::Shipped);
        assert_eq!(updated.priority_id, Some(p.id));
        assert_eq!(updated.payment_method, PaymentMethod::Paypal);
        assert_eq!(updated.tracking_number.as_deref(), Some("TRK-0001"));
        assert_eq!(updated.order_date, created.order_date);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn update_and_delete_of_missing_order_fail() {
        let svc = services();
        let c = svc.clients.create(client_input("m@example.com")).await.response.unwrap();
        let env = svc.orders.update(5, order_input(c.id)).await;
        assert_eq!(env.code, 404);
        assert_eq!(env.message, "Error updating order: order 5 not found");
        assert_eq!(svc.orders.delete(5).await.code, 404);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = services();
        let c = svc.clients.create(client_input("d@example.com")).await.response.unwrap();
        let o = svc.orders.create(order_input(c.id)).await.response.unwrap();
        let env = svc.orders.delete(o.id).await;
        assert_eq!(env.code, 200);
        assert!(env.response.is_none());
        assert_eq!(svc.orders.get(o.id).await.code, 404);
    }

    #[tokio::test]
    async fn total_amount_zero_is_accepted_and_three_decimals_rejected() {
        let svc = services();
        let c = svc.clients.create(client_input("amount@example.com")).await.response.unwrap();

        let mut free = order_input(c.id);
        free.total_amount = Decimal::ZERO;
        let env = svc.orders.create(free).await;
        assert_eq!(env.code, 201);
        assert_eq!(env.response.unwrap().total_amount, Decimal::ZERO);

        let mut fine = order_input(c.id);
        fine.total_amount = Decimal::new(10005, 3);
        let env = svc.orders.create(fine).await;
        assert_eq!(env.code, 400);
        assert_eq!(
            env.message,
            "Error creating order: validation error: total_amount supports at most 2 decimal places"
        );
        assert_eq!(svc.orders.list().await.response.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_with_unknown_client_leaves_order_unchanged() {
        let svc = services();
        let c = svc.clients.create(client_input("keep@example.com")).await.response.unwrap();
        let created = svc.orders.create(order_input(c.id)).await.response.unwrap();

        let mut input = order_input(999);
        input.status = OrderStatus::Cancelled;
        let env = svc.orders.update(created.id, input).await;
        assert_eq!(env.code, 400);
        assert_eq!(env.message, "Error updating order: validation error: client 999 does not exist");

        let stored = svc.orders.get(created.id).await.response.unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn update_with_unknown_priority_leaves_order_unchanged() {
        let svc = services();
        let c = svc.clients.create(client_input("prio@example.com")).await.response.unwrap();
        let created = svc.orders.create(order_input(c.id)).await.response.unwrap();

        let mut input = order_input(c.id);
        input.priority_id = Some(31);
        input.shipping_address = "Otra Calle 9".into();
        let env = svc.orders.update(created.id, input).await;
        assert_eq!(env.code, 400);
        assert_eq!(env.message, "Error updating order: validation error: priority 31 does not exist");

        assert_eq!(svc.orders.get(created.id).await.response.unwrap(), created);
    }

    #[tokio::test]
    async fn invalid_update_leaves_order_unchanged() {
        let svc = services();
        let c = svc.clients.create(client_input("inv@example.com")).await.response.unwrap();
        let created = svc.orders.create(order_input(c.id)).await.response.unwrap();

        let mut input = order_input(c.id);
        input.total_amount = Decimal::new(-1, 0);
        input.status = OrderStatus::Delivered;
        assert_eq!(svc.orders.update(created.id, input).await.code, 400);

        assert_eq!(svc.orders.get(created.id).await.response.unwrap(), created);
    }
}
