//! Application state for shared services

use std::sync::Arc;

use crate::domain::UserStore;

/// Application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub user_store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }
}
