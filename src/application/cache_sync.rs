use crate::domain::filter::CacheKey;
use crate::domain::order::{CachedPage, CreatedOrder};
use crate::domain::ports::ListCache;

/// Keeps the cached orders list in step with creations made from this client.
///
/// Only the unfiltered first page is patched. Any other page or filter
/// cannot be predicted from one new order and stays as fetched until the
/// view fetches it again.
pub struct ListCacheSynchronizer<C> {
    cache: C,
}

impl<C: ListCache> ListCacheSynchronizer<C> {
    pub fn new(cache: C) -> Self {
        Self { cache }
    }

    /// Prepends the new order's row to the cached unfiltered first page.
    ///
    /// Returns `false` without touching the cache when that page was never
    /// fetched. `meta` is carried over as is, so `total_count` lags by one
    /// until the next fetch.
    pub fn patch_on_create(&self, order: &CreatedOrder, customer_name: &str) -> bool {
        let row = order.to_summary(customer_name);
        let patched = self.cache.update(&CacheKey::canonical(), |cached| {
            let mut orders = Vec::with_capacity(cached.orders.len() + 1);
            orders.push(row);
            orders.extend(cached.orders.iter().cloned());
            CachedPage {
                orders,
                meta: cached.meta,
            }
        });

        if patched {
            log::info!("Prepended order {} to cached orders list", order.id);
        } else {
            log::debug!("Unfiltered first page not cached, skipping patch for order {}", order.id);
        }
        patched
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use bigdecimal::BigDecimal;
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::filter::OrdersFilter;
    use crate::domain::order::{OrderStatus, OrderSummary, PageMeta};
    use crate::infrastructure::memory_cache::InMemoryListCache;

    fn row(id: &str) -> OrderSummary {
        OrderSummary {
            order_id: id.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
            status: OrderStatus::Delivered,
            customer_name: "Grace".to_string(),
            total: BigDecimal::from(10),
        }
    }

    fn page(ids: &[&str]) -> CachedPage {
        CachedPage {
            orders: ids.iter().map(|id| row(id)).collect(),
            meta: PageMeta {
                page_index: 0,
                total_count: 25,
                per_page: 10,
            },
        }
    }

    fn created(id: &str) -> CreatedOrder {
        CreatedOrder {
            id: id.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).unwrap(),
            status: OrderStatus::Pending,
            total: BigDecimal::from(35),
        }
    }

    #[test]
    fn prepends_row_and_keeps_meta() {
        let cache = InMemoryListCache::new();
        cache.set(CacheKey::canonical(), page(&["a", "b", "c"]));
        let sync = ListCacheSynchronizer::new(cache.clone());

        assert!(sync.patch_on_create(&created("new"), "Ada"));

        let patched = cache.get(&CacheKey::canonical()).unwrap();
        assert_eq!(patched.orders.len(), 4);
        assert_eq!(patched.orders[0], created("new").to_summary("Ada"));
        let rest: Vec<&str> = patched.orders[1..]
            .iter()
            .map(|o| o.order_id.as_str())
            .collect();
        assert_eq!(rest, vec!["a", "b", "c"]);
        assert_eq!(patched.meta, page(&[]).meta);
    }

    #[test]
    fn patches_an_empty_page() {
        let cache = InMemoryListCache::new();
        cache.set(CacheKey::canonical(), page(&[]));
        let sync = ListCacheSynchronizer::new(cache.clone());

        sync.patch_on_create(&created("new"), "Ada");

        assert_eq!(cache.get(&CacheKey::canonical()).unwrap().orders.len(), 1);
    }

    #[test]
    fn missing_first_page_is_a_no_op() {
        let cache = InMemoryListCache::new();
        let filtered = OrdersFilter::default().with_status("pending").cache_key();
        cache.set(filtered.clone(), page(&["a"]));
        let sync = ListCacheSynchronizer::new(cache.clone());

        assert!(!sync.patch_on_create(&created("new"), "Ada"));

        assert!(!cache.contains(&CacheKey::canonical()));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&filtered).unwrap().orders.len(), 1);
    }

    #[test]
    fn other_views_are_left_stale() {
        let cache = InMemoryListCache::new();
        let second_page = OrdersFilter::default().with_page_index(1).cache_key();
        let all_status = OrdersFilter::default().with_status("all").cache_key();
        cache.set(CacheKey::canonical(), page(&["a"]));
        cache.set(second_page.clone(), page(&["k"]));
        cache.set(all_status.clone(), page(&["a"]));
        let sync = ListCacheSynchronizer::new(cache.clone());

        sync.patch_on_create(&created("new"), "Ada");

        assert_eq!(cache.get(&second_page).unwrap().orders.len(), 1);
        assert_eq!(cache.get(&all_status).unwrap().orders.len(), 1);
        assert_eq!(cache.get(&CacheKey::canonical()).unwrap().orders.len(), 2);
    }

    #[test]
    fn overlapping_patches_keep_every_row() {
        let cache = InMemoryListCache::new();
        cache.set(CacheKey::canonical(), page(&["a"]));
        let sync = Arc::new(ListCacheSynchronizer::new(cache.clone()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let sync = Arc::clone(&sync);
                thread::spawn(move || {
                    for j in 0..25 {
                        sync.patch_on_create(&created(&format!("new-{}-{}", i, j)), "Ada");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let patched = cache.get(&CacheKey::canonical()).unwrap();
        assert_eq!(patched.orders.len(), 1 + 8 * 25);
        assert_eq!(patched.orders.last().unwrap().order_id, "a");
    }

    #[test]
    fn readers_keep_the_page_they_already_hold() {
        let cache = InMemoryListCache::new();
        cache.set(CacheKey::canonical(), page(&["a"]));
        let before = cache.get(&CacheKey::canonical()).unwrap();
        let sync = ListCacheSynchronizer::new(cache.clone());

        sync.patch_on_create(&created("new"), "Ada");

        assert_eq!(before.orders.len(), 1);
    }
}
