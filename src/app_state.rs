//! Shared application state, constructed once at startup and injected into
//! every handler. Replaces any process-global store handle.

use crate::store::RateStore;

#[derive(Clone)]
pub struct AppState {
    pub store: RateStore,
}

impl AppState {
    pub fn new(store: RateStore) -> Self {
        Self { store }
    }
}
