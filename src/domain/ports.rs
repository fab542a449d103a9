use std::future::Future;
use std::sync::Arc;

use super::errors::DomainError;
use super::filter::CacheKey;
use super::order::{CachedPage, CreateOrderRequest, CreatedOrder, ListOrdersQuery};

/// The remote orders API. Both calls are opaque request/response exchanges;
/// any failure surfaces as `DomainError::Rejected`.
pub trait OrdersApi: Send + Sync + 'static {
    fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> impl Future<Output = Result<CreatedOrder, DomainError>> + Send;

    fn get_orders(
        &self,
        query: &ListOrdersQuery,
    ) -> impl Future<Output = Result<CachedPage, DomainError>> + Send;
}

/// Keyed store of fetched list pages shared by the list view and the
/// synchronizer. Writes replace the whole entry in one assignment.
pub trait ListCache: Send + Sync + 'static {
    fn get(&self, key: &CacheKey) -> Option<Arc<CachedPage>>;

    /// Stores `page` under `key` and hands back the stored entry.
    fn set(&self, key: CacheKey, page: CachedPage) -> Arc<CachedPage>;

    /// Replaces the entry at `key` with `f(current)` as one step, so no
    /// other write can land between the read and the write. Returns `false`
    /// and stores nothing when `key` has no entry.
    fn update<F>(&self, key: &CacheKey, f: F) -> bool
    where
        F: FnOnce(&CachedPage) -> CachedPage;
}
