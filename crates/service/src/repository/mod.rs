//! Generic persistence seam used by every service.
//!
//! Services depend on `Repository<M>` only; `seaorm` talks to PostgreSQL and
//! `memory` keeps rows in process for the `memory` storage backend and tests.

pub mod memory;
pub mod seaorm;

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::{category, client, order, priority};

use crate::errors::ServiceError;

pub use memory::MemoryRepository;
pub use seaorm::{SeaOrmCategoryRepository, SeaOrmClientRepository, SeaOrmOrderRepository, SeaOrmPriorityRepository};

/// A stored row identified by a server-assigned `i64`.
pub trait Record: Clone + Send + Sync + 'static {
    /// Lower-case entity name used in error messages.
    const ENTITY: &'static str;

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

#[async_trait]
pub trait Repository<M: Record>: Send + Sync {
    /// Persist a new row; the incoming id is ignored and the stored row,
    /// with its assigned id, is returned.
    async fn insert(&self, record: M) -> Result<M, ServiceError>;
    /// Overwrite the row with `record.id()`; `NotFound` when it does not exist.
    async fn update(&self, record: M) -> Result<M, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<M>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<M>, ServiceError>;
    /// Returns true when a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

impl Record for category::Model {
    const ENTITY: &'static str = "category";
    fn id(&self) -> i64 { self.id }
    fn set_id(&mut self, id: i64) { self.id = id; }
}

impl Record for order::Model {
    const ENTITY: &'static str = "order";
    fn id(&self) -> i64 { self.id }
    fn set_id(&mut self, id: i64) { self.id = id; }
}

impl Record for client::Model {
    const ENTITY: &'static str = "client";
    fn id(&self) -> i64 { self.id }
    fn set_id(&mut self, id: i64) { self.id = id; }
}

impl Record for priority::Model {
    const ENTITY: &'static str = "priority";
    fn id(&self) -> i64 { self.id }
    fn set_id(&mut self, id: i64) { self.id = id; }
}

/// One repository per entity, shared by the services.
#[derive(Clone)]
pub struct Repositories {
    pub categories: Arc<dyn Repository<category::Model>>,
    pub orders: Arc<dyn Repository<order::Model>>,
    pub clients: Arc<dyn Repository<client::Model>>,
    pub priorities: Arc<dyn Repository<priority::Model>>,
}

impl Repositories {
    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self {
            categories: Arc::new(SeaOrmCategoryRepository { db: db.clone() }),
            orders: Arc::new(SeaOrmOrderRepository { db: db.clone() }),
            clients: Arc::new(SeaOrmClientRepository { db: db.clone() }),
            priorities: Arc::new(SeaOrmPriorityRepository { db }),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            categories: Arc::new(MemoryRepository::<category::Model>::new()),
            orders: Arc::new(MemoryRepository::<order::Model>::new()),
            clients: Arc::new(MemoryRepository::<client::Model>::new()),
            priorities: Arc::new(MemoryRepository::<priority::Model>::new()),
        }
    }
}
