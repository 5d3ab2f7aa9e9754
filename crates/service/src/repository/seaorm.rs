//! SeaORM-backed repositories, one per entity.
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, NotSet, Set};
use tracing::debug;

use models::{category, client, order, priority};

use super::Repository;
use crate::errors::ServiceError;

/// `update` on a missing row surfaces as `RecordNotUpdated`.
fn update_error(e: DbErr, entity: &str, id: i64) -> ServiceError {
    match e {
        DbErr::RecordNotUpdated => ServiceError::not_found(entity, id),
        other => other.into(),
    }
}

#[derive(Clone)]
pub struct SeaOrmCategoryRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl Repository<category::Model> for SeaOrmCategoryRepository {
    async fn insert(&self, m: category::Model) -> Result<category::Model, ServiceError> {
        let am = category::ActiveModel {
            id: NotSet,
            category: Set(m.category),
            description: Set(m.description),
            created_at: Set(m.created_at),
            updated_at: Set(m.updated_at),
            status: Set(m.status),
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, m: category::Model) -> Result<category::Model, ServiceError> {
        let id = m.id;
        let am = category::ActiveModel {
            id: ActiveValue::Unchanged(id),
            category: Set(m.category),
            description: Set(m.description),
            created_at: Set(m.created_at),
            updated_at: Set(m.updated_at),
            status: Set(m.status),
        };
        am.update(&self.db).await.map_err(|e| update_error(e, "category", id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<category::Model>, ServiceError> {
        Ok(category::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<category::Model>, ServiceError> {
        let rows = category::Entity::find().all(&self.db).await?;
        debug!(count = rows.len(), "loaded categories");
        Ok(rows)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = category::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[derive(Clone)]
pub struct SeaOrmOrderRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl Repository<order::Model> for SeaOrmOrderRepository {
    async fn insert(&self, m: order::Model) -> Result<order::Model, ServiceError> {
        let am = order::ActiveModel {
            id: NotSet,
            client_id: Set(m.client_id),
            priority_id: Set(m.priority_id),
            order_date: Set(m.order_date),
            delivery_date: Set(m.delivery_date),
            status: Set(m.status),
            total_amount: Set(m.total_amount),
            payment_method: Set(m.payment_method),
            shipping_address: Set(m.shipping_address),
            updated_at: Set(m.updated_at),
            tracking_number: Set(m.tracking_number),
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, m: order::Model) -> Result<order::Model, ServiceError> {
        let id = m.id;
        let am = order::ActiveModel {
            id: ActiveValue::Unchanged(id),
            client_id: Set(m.client_id),
            priority_id: Set(m.priority_id),
            order_date: Set(m.order_date),
            delivery_date: Set(m.delivery_date),
            status: Set(m.status),
            total_amount: Set(m.total_amount),
            payment_method: Set(m.payment_method),
            shipping_address: Set(m.shipping_address),
            updated_at: Set(m.updated_at),
            tracking_number: Set(m.tracking_number),
        };
        am.update(&self.db).await.map_err(|e| update_error(e, "order", id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<order::Model>, ServiceError> {
        Ok(order::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<order::Model>, ServiceError> {
        let rows = order::Entity::find().all(&self.db).await?;
        debug!(count = rows.len(), "loaded orders");
        Ok(rows)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = order::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[derive(Clone)]
pub struct SeaOrmClientRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl Repository<client::Model> for SeaOrmClientRepository {
    async fn insert(&self, m: client::Model) -> Result<client::Model, ServiceError> {
        let am = client::ActiveModel {
            id: NotSet,
            name: Set(m.name),
            email: Set(m.email),
            phone: Set(m.phone),
            address: Set(m.address),
            created_at: Set(m.created_at),
            updated_at: Set(m.updated_at),
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, m: client::Model) -> Result<client::Model, ServiceError> {
        let id = m.id;
        let am = client::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: Set(m.name),
            email: Set(m.email),
            phone: Set(m.phone),
            address: Set(m.address),
            created_at: Set(m.created_at),
            updated_at: Set(m.updated_at),
        };
        am.update(&self.db).await.map_err(|e| update_error(e, "client", id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<client::Model>, ServiceError> {
        Ok(client::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<client::Model>, ServiceError> {
        Ok(client::Entity::find().all(&self.db).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = client::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[derive(Clone)]
pub struct SeaOrmPriorityRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl Repository<priority::Model> for SeaOrmPriorityRepository {
    async fn insert(&self, m: priority::Model) -> Result<priority::Model, ServiceError> {
        let am = priority::ActiveModel { id: NotSet, level: Set(m.level), description: Set(m.description) };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, m: priority::Model) -> Result<priority::Model, ServiceError> {
        let id = m.id;
        let am = priority::ActiveModel {
            id: ActiveValue::Unchanged(id),
            level: Set(m.level),
            description: Set(m.description),
        };
        am.update(&self.db).await.map_err(|e| update_error(e, "priority", id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<priority::Model>, ServiceError> {
        Ok(priority::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<priority::Model>, ServiceError> {
        Ok(priority::Entity::find().all(&self.db).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = priority::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
