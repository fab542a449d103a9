use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::domain::errors::DomainError;
use crate::domain::order::{CachedPage, CreateOrderRequest, CreatedOrder, ListOrdersQuery};
use crate::domain::ports::OrdersApi;
use crate::errors::AppError;

use super::models::{CreateOrderBody, CreatedOrderBody, GetOrdersBody};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        DomainError::Rejected(e.to_string())
    }
}

// ── Client ───────────────────────────────────────────────────────────────────

/// `OrdersApi` over HTTP+JSON.
#[derive(Clone)]
pub struct HttpOrdersApi {
    client: Client,
    base_url: String,
}

impl HttpOrdersApi {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn orders_url(&self) -> String {
        format!("{}/orders", self.base_url)
    }
}

impl OrdersApi for HttpOrdersApi {
    /// POST /orders
    async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<CreatedOrder, DomainError> {
        let response = self
            .client
            .post(self.orders_url())
            .json(&CreateOrderBody::from(request))
            .send()
            .await?;

        let body: CreatedOrderBody = read_json(response).await?;
        Ok(body.into())
    }

    /// GET /orders?pageIndex=..&orderId=..&customerName=..&status=..
    ///
    /// Filters that are not set are left out of the query string.
    async fn get_orders(&self, query: &ListOrdersQuery) -> Result<CachedPage, DomainError> {
        let mut params = vec![("pageIndex", query.page_index.to_string())];
        if let Some(order_id) = &query.order_id {
            params.push(("orderId", order_id.clone()));
        }
        if let Some(customer_name) = &query.customer_name {
            params.push(("customerName", customer_name.clone()));
        }
        if let Some(status) = &query.status {
            params.push(("status", status.clone()));
        }

        let response = self
            .client
            .get(self.orders_url())
            .query(&params)
            .send()
            .await?;

        let body: GetOrdersBody = read_json(response).await?;
        Ok(body.into())
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, DomainError> {
    let status = response.status();
    if !status.is_success() {
        return Err(DomainError::Rejected(format!(
            "orders API answered {}",
            status
        )));
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| DomainError::Rejected(format!("malformed response body: {}", e)))
}
