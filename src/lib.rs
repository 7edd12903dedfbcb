//! ratehub - currency conversion HTTP service backed by a key-value rate store.

pub mod app_state;
pub mod config;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod store;
pub mod validate;

pub use app_state::AppState;
pub use config::ServerConfig;
pub use store::RateStore;
