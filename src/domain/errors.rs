use thiserror::Error;

use super::form::FormErrors;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No order item at index {0}")]
    ItemNotFound(usize),
    #[error("Invalid order: {0}")]
    Validation(FormErrors),
    #[error("Request rejected: {0}")]
    Rejected(String),
}
