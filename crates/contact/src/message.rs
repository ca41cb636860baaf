use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::validate::is_valid_email;
use storefront_core::{ContactMessageId, Entity, ValidationErrors};

/// Contact form input as submitted by a customer.
///
/// Missing fields deserialize as blank so they surface as validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl NewContactMessage {
    /// Check every field; all failures are reported, in form order.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.push("name", "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.push("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.push("email", "Invalid email");
        }
        if self.phone.trim().is_empty() {
            errors.push("phone", "Phone number is required");
        }
        if self.message.trim().is_empty() {
            errors.push("message", "Message is required");
        }

        errors.into_result()
    }
}

/// A stored contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Build a stored message from (already validated) input; fields are trimmed.
    pub fn from_input(id: ContactMessageId, input: NewContactMessage, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            phone: input.phone.trim().to_string(),
            message: input.message.trim().to_string(),
            created_at,
        }
    }
}

impl Entity for ContactMessage {
    type Id = ContactMessageId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewContactMessage {
        NewContactMessage {
            name: "Ali Khan".to_string(),
            email: "ali@example.com".to_string(),
            phone: "0300 1234567".to_string(),
            message: "Do you ship to Quetta?".to_string(),
        }
    }

    #[test]
    fn valid_message_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn reports_every_missing_field_in_order() {
        let input = NewContactMessage {
            name: " ".to_string(),
            email: String::new(),
            phone: String::new(),
            message: String::new(),
        };
        let errors = input.validate().unwrap_err();
        let fields: Vec<_> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "phone", "message"]);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut input = valid();
        input.email = "ali.example.com".to_string();
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.message_for("email"), Some("Invalid email"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn from_input_trims_fields() {
        let mut input = valid();
        input.name = "  Ali Khan ".to_string();
        let msg = ContactMessage::from_input(ContactMessageId::new(), input, Utc::now());
        assert_eq!(msg.name, "Ali Khan");

        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("createdAt").is_some());
    }
}
