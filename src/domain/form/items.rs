use bigdecimal::BigDecimal;

use super::draft::{DraftId, OrderItemDraft};
use crate::domain::errors::DomainError;
use crate::domain::order::{CreateOrderItem, Product};

/// Ordered collection of draft lines. Inserts append; removal is by index
/// or by draft id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItems {
    drafts: Vec<OrderItemDraft>,
}

impl LineItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&OrderItemDraft> {
        self.drafts.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderItemDraft> {
        self.drafts.iter()
    }

    pub fn position(&self, id: DraftId) -> Option<usize> {
        self.drafts.iter().position(|draft| draft.id() == id)
    }

    /// Appends a blank line and returns its id.
    pub fn add_item(&mut self) -> DraftId {
        let draft = OrderItemDraft::empty();
        let id = draft.id();
        self.drafts.push(draft);
        id
    }

    /// Removes the line at `index`. An out-of-range index (a stale row in the
    /// view) leaves the collection untouched and yields `None`.
    pub fn remove_item(&mut self, index: usize) -> Option<OrderItemDraft> {
        if index >= self.drafts.len() {
            log::debug!("Ignoring removal of missing order item at index {}", index);
            return None;
        }
        Some(self.drafts.remove(index))
    }

    pub fn remove_by_id(&mut self, id: DraftId) -> Option<OrderItemDraft> {
        let index = self.position(id)?;
        self.remove_item(index)
    }

    pub fn select_product(
        &mut self,
        index: usize,
        product: Product,
    ) -> Result<&OrderItemDraft, DomainError> {
        let draft = self.draft_mut(index)?;
        draft.select_product(product);
        Ok(draft)
    }

    pub fn set_quantity(
        &mut self,
        index: usize,
        quantity: u32,
    ) -> Result<&OrderItemDraft, DomainError> {
        let draft = self.draft_mut(index)?;
        draft.set_quantity(quantity);
        Ok(draft)
    }

    /// Sum of all line subtotals.
    pub fn total(&self) -> BigDecimal {
        self.drafts
            .iter()
            .fold(BigDecimal::from(0), |acc, draft| acc + draft.subtotal())
    }

    pub fn to_request_items(&self) -> Vec<CreateOrderItem> {
        self.drafts.iter().map(OrderItemDraft::to_request_item).collect()
    }

    pub fn clear(&mut self) {
        self.drafts.clear();
    }

    fn draft_mut(&mut self, index: usize) -> Result<&mut OrderItemDraft, DomainError> {
        self.drafts
            .get_mut(index)
            .ok_or(DomainError::ItemNotFound(index))
    }
}
