use std::sync::Arc;

use service::{Repositories, Services};

/// Shared handler state: every service behind one `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub services: Arc<Services>,
}

impl ServerState {
    pub fn new(services: Services) -> Self {
        Self { services: Arc::new(services) }
    }

    pub fn from_repositories(repos: Repositories) -> Self {
        Self::new(Services::new(repos))
    }
}
