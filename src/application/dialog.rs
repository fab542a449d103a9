use crate::domain::form::CreateOrderForm;
use crate::domain::order::CreatedOrder;
use crate::domain::ports::{ListCache, OrdersApi};
use crate::errors::{AppError, ORDER_CREATED_MESSAGE};

use super::order_service::OrderService;

/// Transient message for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(&'static str),
    Error(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    /// Order created; the dialog closed with a fresh form.
    Created(CreatedOrder),
    /// Rejected by validation; errors are on the form.
    Invalid,
    /// The creation call failed; the form is kept for a retry.
    Failed,
}

/// The "new order" dialog: one form plus its open/closed state.
#[derive(Debug, Default)]
pub struct CreateOrderDialog {
    form: CreateOrderForm,
    open: bool,
    notification: Option<Notification>,
}

impl CreateOrderDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the dialog and drops any draft state.
    pub fn cancel(&mut self) {
        self.form.reset();
        self.open = false;
    }

    pub fn form(&self) -> &CreateOrderForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CreateOrderForm {
        &mut self.form
    }

    /// Takes the pending notification, if any.
    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    pub async fn submit<A, C>(&mut self, service: &OrderService<A, C>) -> DialogOutcome
    where
        A: OrdersApi,
        C: ListCache + Clone,
    {
        match service.create_order(&mut self.form).await {
            Ok(order) => {
                self.open = false;
                self.notification = Some(Notification::Success(ORDER_CREATED_MESSAGE));
                DialogOutcome::Created(order)
            }
            Err(AppError::Validation(_)) => DialogOutcome::Invalid,
            Err(e) => {
                self.notification = e.user_message().map(Notification::Error);
                DialogOutcome::Failed
            }
        }
    }
}
