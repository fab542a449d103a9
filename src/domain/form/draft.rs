use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::order::{CreateOrderItem, Product};

/// Stable identity of a draft line, independent of its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DraftId(Uuid);

impl DraftId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// An unsaved order line inside the creation form.
///
/// Fields are only reachable through methods so the subtotal is recomputed
/// on every product or quantity change and always equals
/// `quantity * product.price` when read.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemDraft {
    id: DraftId,
    product: Product,
    quantity: u32,
    subtotal: BigDecimal,
}

impl OrderItemDraft {
    /// A blank line: no product, zero quantity, zero subtotal.
    pub fn empty() -> Self {
        Self {
            id: DraftId::new(),
            product: Product::default(),
            quantity: 0,
            subtotal: BigDecimal::from(0),
        }
    }

    pub fn id(&self) -> DraftId {
        self.id
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn subtotal(&self) -> &BigDecimal {
        &self.subtotal
    }

    pub fn select_product(&mut self, product: Product) {
        self.product = product;
        self.recompute_subtotal();
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.recompute_subtotal();
    }

    /// The request line for this draft; display-only fields are dropped.
    pub fn to_request_item(&self) -> CreateOrderItem {
        CreateOrderItem {
            product_id: self.product.id.clone(),
            quantity: self.quantity,
        }
    }

    fn recompute_subtotal(&mut self) {
        self.subtotal = self.product.price.clone() * BigDecimal::from(self.quantity);
    }
}
