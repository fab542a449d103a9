use super::order::ListOrdersQuery;

/// Status filter value meaning "no status filter".
pub const ALL_STATUSES: &str = "all";

/// Identity of one paginated, filtered list view.
///
/// Equality is component-wise over the 4-tuple. `None` is its own value:
/// a key holding `Some("all")` is a different key from one holding `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CacheKey {
    pub page_index: u32,
    pub order_id: Option<String>,
    pub customer_name: Option<String>,
    pub status: Option<String>,
}

impl CacheKey {
    /// The unfiltered first page.
    pub fn canonical() -> Self {
        Self::default()
    }

    pub fn is_canonical(&self) -> bool {
        *self == Self::canonical()
    }
}

/// Filter and page state of the orders view, as the view holds it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrdersFilter {
    pub page_index: u32,
    pub order_id: Option<String>,
    pub customer_name: Option<String>,
    pub status: Option<String>,
}

impl OrdersFilter {
    /// Filter for a 1-based page number; page 0 is treated as page 1.
    pub fn from_page_number(page: u32) -> Self {
        Self {
            page_index: page.saturating_sub(1),
            ..Self::default()
        }
    }

    pub fn with_page_index(mut self, page_index: u32) -> Self {
        self.page_index = page_index;
        self
    }

    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn with_customer_name(mut self, customer_name: impl Into<String>) -> Self {
        self.customer_name = Some(customer_name.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// 1-based page number, for display and for the page query parameter.
    pub fn page_number(&self) -> u32 {
        self.page_index + 1
    }

    /// The key this view's page is cached under. The status is kept raw.
    pub fn cache_key(&self) -> CacheKey {
        CacheKey {
            page_index: self.page_index,
            order_id: self.order_id.clone(),
            customer_name: self.customer_name.clone(),
            status: self.status.clone(),
        }
    }

    /// The list fetch input, with the "all" status folded into no filter.
    pub fn to_query(&self) -> ListOrdersQuery {
        ListOrdersQuery {
            page_index: self.page_index,
            order_id: self.order_id.clone(),
            customer_name: self.customer_name.clone(),
            status: self
                .status
                .clone()
                .filter(|status| status != ALL_STATUSES),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn canonical_key_is_unfiltered_first_page() {
        let key = CacheKey::canonical();
        assert_eq!(key.page_index, 0);
        assert!(key.order_id.is_none());
        assert!(key.customer_name.is_none());
        assert!(key.status.is_none());
        assert!(OrdersFilter::default().cache_key().is_canonical());
    }

    #[test]
    fn all_status_is_a_distinct_key_but_same_query() {
        let unfiltered = OrdersFilter::default();
        let all = OrdersFilter::default().with_status("all");

        assert_ne!(unfiltered.cache_key(), all.cache_key());
        assert!(!all.cache_key().is_canonical());
        assert_eq!(unfiltered.to_query(), all.to_query());
        assert_eq!(all.to_query().status, None);
    }

    #[test]
    fn concrete_status_passes_through_query() {
        let filter = OrdersFilter::default().with_status("pending");
        assert_eq!(filter.to_query().status.as_deref(), Some("pending"));
    }

    #[test]
    fn keys_differ_per_component() {
        let base = OrdersFilter::default();
        let keys: HashSet<CacheKey> = [
            base.cache_key(),
            base.clone().with_page_index(1).cache_key(),
            base.clone().with_order_id("ord-1").cache_key(),
            base.clone().with_customer_name("Ada").cache_key(),
            base.clone().with_status("pending").cache_key(),
        ]
        .into_iter()
        .collect();

        assert_eq!(keys.len(), 5);
    }

    #[test]
    fn empty_string_is_not_null() {
        let key = OrdersFilter::default().with_order_id("").cache_key();
        assert_ne!(key, CacheKey::canonical());
    }

    #[test]
    fn page_numbers_are_one_based() {
        assert_eq!(OrdersFilter::from_page_number(1).page_index, 0);
        assert_eq!(OrdersFilter::from_page_number(3).page_index, 2);
        assert_eq!(OrdersFilter::from_page_number(0).page_index, 0);
        assert_eq!(OrdersFilter::default().with_page_index(4).page_number(), 5);
    }
}
