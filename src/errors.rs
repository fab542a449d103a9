use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::domain::form::FormErrors;

pub const ORDER_CREATED_MESSAGE: &str = "Order created successfully";
pub const ORDER_FAILED_MESSAGE: &str = "Failed to create order";
pub const ORDERS_UNAVAILABLE_MESSAGE: &str = "Failed to load orders";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(FormErrors),

    #[error("Remote call failed: {0}")]
    Remote(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(errors) => AppError::Validation(errors),
            DomainError::Rejected(msg) => AppError::Remote(msg),
            DomainError::ItemNotFound(index) => {
                AppError::NotFound(format!("order item at index {}", index))
            }
        }
    }
}

impl AppError {
    /// Notification text for a failed order creation. Validation problems
    /// are shown inline on the form, so they have none.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            AppError::NotFound(_) | AppError::Validation(_) => None,
            AppError::Remote(_) => Some(ORDER_FAILED_MESSAGE),
            AppError::Config(_) => None,
        }
    }
}
