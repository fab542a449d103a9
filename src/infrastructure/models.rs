//! JSON bodies exchanged with the orders API.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::order::{
    CachedPage, CreateOrderItem, CreateOrderRequest, CreatedOrder, OrderStatus, OrderSummary,
    PageMeta,
};

/// Money arrives either as a decimal string or as a JSON number. Numbers
/// are read from their shortest decimal text, never from the binary value
/// of the `f64`.
mod money {
    use std::fmt;
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use serde::de::{self, Deserializer, Visitor};

    struct MoneyVisitor;

    impl<'de> Visitor<'de> for MoneyVisitor {
        type Value = BigDecimal;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a decimal amount as a string or number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<BigDecimal, E> {
            BigDecimal::from_str(v.trim()).map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigDecimal, E> {
            Ok(BigDecimal::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigDecimal, E> {
            Ok(BigDecimal::from(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<BigDecimal, E> {
            if !v.is_finite() {
                return Err(E::custom(format!("amount {} is not finite", v)));
            }
            BigDecimal::from_str(&v.to_string()).map_err(E::custom)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItemBody {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderBody {
    pub customer_id: String,
    pub items: Vec<CreateOrderItemBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrderBody {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    #[serde(deserialize_with = "money::deserialize")]
    pub total: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryBody {
    pub order_id: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub customer_name: String,
    #[serde(deserialize_with = "money::deserialize")]
    pub total: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetaBody {
    pub page_index: u32,
    pub total_count: u64,
    pub per_page: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetOrdersBody {
    pub orders: Vec<OrderSummaryBody>,
    pub meta: PageMetaBody,
}

impl From<&CreateOrderRequest> for CreateOrderBody {
    fn from(request: &CreateOrderRequest) -> Self {
        Self {
            customer_id: request.customer_id.clone(),
            items: request
                .items
                .iter()
                .map(|item| CreateOrderItemBody {
                    product_id: item.product_id.clone(),
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

impl From<CreateOrderBody> for CreateOrderRequest {
    fn from(body: CreateOrderBody) -> Self {
        Self {
            customer_id: body.customer_id,
            items: body
                .items
                .into_iter()
                .map(|item| CreateOrderItem {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

impl From<CreatedOrderBody> for CreatedOrder {
    fn from(body: CreatedOrderBody) -> Self {
        Self {
            id: body.id,
            created_at: body.created_at,
            status: body.status,
            total: body.total,
        }
    }
}

impl From<OrderSummaryBody> for OrderSummary {
    fn from(body: OrderSummaryBody) -> Self {
        Self {
            order_id: body.order_id,
            created_at: body.created_at,
            status: body.status,
            customer_name: body.customer_name,
            total: body.total,
        }
    }
}

impl From<GetOrdersBody> for CachedPage {
    fn from(body: GetOrdersBody) -> Self {
        Self {
            orders: body.orders.into_iter().map(OrderSummary::from).collect(),
            meta: PageMeta {
                page_index: body.meta.page_index,
                total_count: body.meta.total_count,
                per_page: body.meta.per_page,
            },
        }
    }
}
