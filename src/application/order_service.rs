use std::sync::Arc;

use crate::domain::filter::OrdersFilter;
use crate::domain::form::CreateOrderForm;
use crate::domain::order::{CachedPage, CreatedOrder};
use crate::domain::ports::{ListCache, OrdersApi};
use crate::errors::AppError;

use super::cache_sync::ListCacheSynchronizer;

pub struct OrderService<A, C> {
    api: A,
    cache: C,
    sync: ListCacheSynchronizer<C>,
}

impl<A: OrdersApi, C: ListCache + Clone> OrderService<A, C> {
    pub fn new(api: A, cache: C) -> Self {
        Self {
            api,
            sync: ListCacheSynchronizer::new(cache.clone()),
            cache,
        }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// The page for `filter`, from the cache when present.
    pub async fn list_orders(&self, filter: &OrdersFilter) -> Result<Arc<CachedPage>, AppError> {
        if let Some(page) = self.cache.get(&filter.cache_key()) {
            log::debug!("Orders page {} served from cache", filter.page_number());
            return Ok(page);
        }
        self.refresh(filter).await
    }

    /// Fetches the page for `filter` and replaces whatever was cached for it.
    pub async fn refresh(&self, filter: &OrdersFilter) -> Result<Arc<CachedPage>, AppError> {
        let page = self.api.get_orders(&filter.to_query()).await?;
        log::debug!(
            "Fetched orders page {} ({} rows)",
            filter.page_number(),
            page.orders.len()
        );

        Ok(self.cache.set(filter.cache_key(), page))
    }

    /// Submits `form`. On success the cached first page gets the new row and
    /// the form is reset; on failure the form is left exactly as it was.
    pub async fn create_order(&self, form: &mut CreateOrderForm) -> Result<CreatedOrder, AppError> {
        let request = form.submit()?;

        match self.api.create_order(&request).await {
            Ok(order) => {
                log::info!(
                    "Created order {} for customer {} with {} item(s)",
                    order.id,
                    request.customer_id,
                    request.items.len()
                );
                self.sync.patch_on_create(&order, form.customer_name());
                form.reset();
                Ok(order)
            }
            Err(e) => {
                log::warn!("Order creation failed: {}", e);
                Err(e.into())
            }
        }
    }
}
