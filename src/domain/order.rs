use std::fmt;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Delivering,
    Delivered,
    Canceled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Delivering => "delivering",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Canceled => "canceled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A product as offered by the catalog selector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: BigDecimal,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: BigDecimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// One row of the orders list. Rows are never edited once cached.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub order_id: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub customer_name: String,
    pub total: BigDecimal,
}

/// What the creation call hands back for a freshly created order.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedOrder {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub total: BigDecimal,
}

impl CreatedOrder {
    /// Builds the list row shown for this order under `customer_name`.
    pub fn to_summary(&self, customer_name: &str) -> OrderSummary {
        OrderSummary {
            order_id: self.id.clone(),
            created_at: self.created_at,
            status: self.status,
            customer_name: customer_name.to_string(),
            total: self.total.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderItem {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderRequest {
    pub customer_id: String,
    pub items: Vec<CreateOrderItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub page_index: u32,
    pub total_count: u64,
    pub per_page: u32,
}

impl PageMeta {
    /// Number of pages needed to show `total_count` rows, `per_page` at a time.
    pub fn page_count(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total_count.div_ceil(u64::from(self.per_page))
    }
}

/// One page of the orders list, exactly as the list fetch returned it
/// (or as later patched after a creation).
#[derive(Debug, Clone, PartialEq)]
pub struct CachedPage {
    pub orders: Vec<OrderSummary>,
    pub meta: PageMeta,
}

/// Input of the list fetch. `status` is already normalized: the "all"
/// pseudo-status never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListOrdersQuery {
    pub page_index: u32,
    pub order_id: Option<String>,
    pub customer_name: Option<String>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(total_count: u64, per_page: u32) -> PageMeta {
        PageMeta {
            page_index: 0,
            total_count,
            per_page,
        }
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(meta(0, 10).page_count(), 0);
        assert_eq!(meta(10, 10).page_count(), 1);
        assert_eq!(meta(11, 10).page_count(), 2);
    }

    #[test]
    fn page_count_is_zero_without_page_size() {
        assert_eq!(meta(42, 0).page_count(), 0);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Delivering).unwrap();
        assert_eq!(json, "\"delivering\"");
        let parsed: OrderStatus = serde_json::from_str("\"canceled\"").unwrap();
        assert_eq!(parsed, OrderStatus::Canceled);
        assert_eq!(OrderStatus::Pending.to_string(), "pending");
    }

    #[test]
    fn created_order_summary_copies_fields() {
        let order = CreatedOrder {
            id: "ord-1".to_string(),
            created_at: Utc::now(),
            status: OrderStatus::Pending,
            total: BigDecimal::from(35),
        };

        let row = order.to_summary("Ada");

        assert_eq!(row.order_id, "ord-1");
        assert_eq!(row.created_at, order.created_at);
        assert_eq!(row.status, OrderStatus::Pending);
        assert_eq!(row.customer_name, "Ada");
        assert_eq!(row.total, BigDecimal::from(35));
    }
}
