pub mod cache_sync;
pub mod dialog;
pub mod order_service;
