mod draft;
mod items;
mod validation;

pub use draft::{DraftId, OrderItemDraft};
pub use items::LineItems;
pub use validation::{
    display_message, validate, FormErrors, FormField, CUSTOMER_REQUIRED_MESSAGE,
    EMPTY_COLLECTION_MESSAGE, ITEMS_REQUIRED_MESSAGE,
};

use super::errors::DomainError;
use super::order::{CreateOrderRequest, Product};

/// State of one order creation form: the chosen customer, the draft lines
/// and the errors from the last submit attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateOrderForm {
    customer_id: String,
    customer_name: String,
    items: LineItems,
    errors: FormErrors,
}

impl CreateOrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id and display name arrive together from the customer picker.
    pub fn select_customer(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.customer_id = id.into();
        self.customer_name = name.into();
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn items(&self) -> &LineItems {
        &self.items
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn add_item(&mut self) -> DraftId {
        self.items.add_item()
    }

    pub fn remove_item(&mut self, index: usize) -> Option<OrderItemDraft> {
        self.items.remove_item(index)
    }

    pub fn remove_by_id(&mut self, id: DraftId) -> Option<OrderItemDraft> {
        self.items.remove_by_id(id)
    }

    /// Current index of the line `id`, which shifts as earlier lines go.
    pub fn position(&self, id: DraftId) -> Option<usize> {
        self.items.position(id)
    }

    pub fn select_product(
        &mut self,
        index: usize,
        product: Product,
    ) -> Result<&OrderItemDraft, DomainError> {
        self.items.select_product(index, product)
    }

    pub fn set_quantity(
        &mut self,
        index: usize,
        quantity: u32,
    ) -> Result<&OrderItemDraft, DomainError> {
        self.items.set_quantity(index, quantity)
    }

    /// Validates the form and builds the creation request. On failure the
    /// errors are kept on the form for display and no request is built.
    pub fn submit(&mut self) -> Result<CreateOrderRequest, DomainError> {
        if let Err(errors) = validate(&self.customer_id, &self.items) {
            self.errors = errors.clone();
            return Err(DomainError::Validation(errors));
        }
        self.errors.clear();

        Ok(CreateOrderRequest {
            customer_id: self.customer_id.clone(),
            items: self.items.to_request_items(),
        })
    }

    /// Back to the initial empty configuration.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }
}
