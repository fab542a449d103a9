use std::collections::BTreeMap;
use std::fmt;

use super::items::LineItems;

/// What the validator reports for an empty collection.
pub const EMPTY_COLLECTION_MESSAGE: &str = "Array must contain at least 1 element(s)";
/// What the form shows instead of [`EMPTY_COLLECTION_MESSAGE`].
pub const ITEMS_REQUIRED_MESSAGE: &str = "Add at least one item to the order";
pub const CUSTOMER_REQUIRED_MESSAGE: &str = "customerId is required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    CustomerId,
    Items,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::CustomerId => "customerId",
            FormField::Items => "items",
        }
    }
}

/// Rewrites the generic empty-collection message into the order-specific
/// one. Every other message is returned as is.
pub fn display_message(message: &str) -> &str {
    if message == EMPTY_COLLECTION_MESSAGE {
        ITEMS_REQUIRED_MESSAGE
    } else {
        message
    }
}

/// Validator output, one raw message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<FormField, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// The raw validator message for `field`.
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// The message to show next to `field`.
    pub fn display(&self, field: FormField) -> Option<&str> {
        self.get(field).map(display_message)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field.as_str(), message)?;
        }
        Ok(())
    }
}

/// Checks the creation form input.
pub fn validate(customer_id: &str, items: &LineItems) -> Result<(), FormErrors> {
    let mut errors = FormErrors::new();

    if customer_id.trim().is_empty() {
        errors.insert(FormField::CustomerId, CUSTOMER_REQUIRED_MESSAGE);
    }
    if items.is_empty() {
        errors.insert(FormField::Items, EMPTY_COLLECTION_MESSAGE);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_message_is_rewritten() {
        assert_eq!(
            display_message("Array must contain at least 1 element(s)"),
            "Add at least one item to the order"
        );
    }

    #[test]
    fn other_messages_pass_through_verbatim() {
        assert_eq!(display_message("customerId is required"), "customerId is required");
        assert_eq!(
            display_message("array must contain at least 1 element(s)"),
            "array must contain at least 1 element(s)"
        );
        assert_eq!(display_message(""), "");
    }

    #[test]
    fn empty_items_are_reported_on_items_field() {
        let errors = validate("cust-1", &LineItems::new()).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Items), Some(EMPTY_COLLECTION_MESSAGE));
        assert_eq!(errors.display(FormField::Items), Some(ITEMS_REQUIRED_MESSAGE));
        assert_eq!(errors.get(FormField::CustomerId), None);
    }

    #[test]
    fn missing_customer_is_reported_unchanged() {
        let mut items = LineItems::new();
        items.add_item();

        let errors = validate("  ", &items).unwrap_err();

        assert_eq!(
            errors.display(FormField::CustomerId),
            Some(CUSTOMER_REQUIRED_MESSAGE)
        );
        assert_eq!(errors.get(FormField::Items), None);
    }

    #[test]
    fn valid_input_passes() {
        let mut items = LineItems::new();
        items.add_item();
        assert!(validate("cust-1", &items).is_ok());
    }

    #[test]
    fn display_lists_fields_in_order() {
        let errors = validate("", &LineItems::new()).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "customerId: customerId is required, items: Array must contain at least 1 element(s)"
        );
    }
}
