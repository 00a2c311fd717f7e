use crate::catalog::{Role, Task, DAILY_TASKS, OPTIONAL_ROLES};
use crate::store::ProgressStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<ProgressStore>>,
    pub tasks: &'static [Task],
    pub roles: &'static [Role],
}

impl AppState {
    pub fn new(store: ProgressStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            tasks: DAILY_TASKS,
            roles: OPTIONAL_ROLES,
        }
    }
}
