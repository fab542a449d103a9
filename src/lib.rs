pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infrastructure;

pub use application::dialog::{CreateOrderDialog, DialogOutcome, Notification};
pub use application::order_service::OrderService;
pub use config::ApiConfig;
pub use errors::AppError;
pub use infrastructure::http_api::HttpOrdersApi;
pub use infrastructure::memory_cache::InMemoryListCache;

/// Service wired to the HTTP orders API with an empty in-memory list cache.
pub fn build_service(
    config: &ApiConfig,
) -> Result<OrderService<HttpOrdersApi, InMemoryListCache>, AppError> {
    let api = HttpOrdersApi::new(config)?;
    Ok(OrderService::new(api, InMemoryListCache::new()))
}
