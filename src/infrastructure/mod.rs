pub mod http_api;
pub mod memory_cache;
pub mod models;
