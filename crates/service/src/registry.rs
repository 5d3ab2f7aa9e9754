use crate::category_service::CategoryService;
use crate::client_service::ClientService;
use crate::order_service::OrderService;
use crate::priority_service::PriorityService;
use crate::repository::Repositories;

/// All services wired to one set of repositories.
pub struct Services {
    pub categories: CategoryService,
    pub orders: OrderService,
    pub clients: ClientService,
    pub priorities: PriorityService,
}

impl Services {
    pub fn new(repos: Repositories) -> Self {
        Self {
            categories: CategoryService::new(repos.categories),
            orders: OrderService::new(repos.orders, repos.clients.clone(), repos.priorities.clone()),
            clients: ClientService::new(repos.clients),
            priorities: PriorityService::new(repos.priorities),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Repositories::in_memory())
    }
}
