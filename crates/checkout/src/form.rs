use serde::{Deserialize, Serialize};

use storefront_core::ValidationErrors;
use storefront_core::validate::{has_min_chars, is_valid_email};

/// How the customer pays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery.
    #[default]
    Cod,
    /// Credit/debit card; listed but not yet accepted.
    Card,
}

impl PaymentMethod {
    pub fn is_available(self) -> bool {
        matches!(self, PaymentMethod::Cod)
    }
}

/// Checkout form as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    /// Field-level validation; every failing field is reported.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !has_min_chars(&self.full_name, 2) {
            errors.push("fullName", "Name is required");
        }
        if !is_valid_email(&self.email) {
            errors.push("email", "Invalid email");
        }
        if !has_min_chars(&self.phone, 10) {
            errors.push("phone", "Phone number is required");
        }
        if !has_min_chars(&self.address, 10) {
            errors.push("address", "Full address is required");
        }
        if !has_min_chars(&self.city, 2) {
            errors.push("city", "City is required");
        }
        if !self.payment_method.is_available() {
            errors.push("paymentMethod", "Payment method is currently unavailable");
        }

        errors.into_result()
    }

    /// Postal code with blank values treated as absent.
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            full_name: "Ali Khan".to_string(),
            email: "ali@example.com".to_string(),
            phone: "0300 1234567".to_string(),
            address: "House 123, Street 4, Sector F-6".to_string(),
            city: "Islamabad".to_string(),
            postal_code: None,
            payment_method: PaymentMethod::Cod,
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn short_fields_report_their_messages() {
        let form = CheckoutForm {
            full_name: "A".to_string(),
            email: "ali".to_string(),
            phone: "12345".to_string(),
            address: "short".to_string(),
            city: "X".to_string(),
            postal_code: Some("44000".to_string()),
            payment_method: PaymentMethod::Cod,
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.message_for("fullName"), Some("Name is required"));
        assert_eq!(errors.message_for("email"), Some("Invalid email"));
        assert_eq!(errors.message_for("phone"), Some("Phone number is required"));
        assert_eq!(errors.message_for("address"), Some("Full address is required"));
        assert_eq!(errors.message_for("city"), Some("City is required"));
    }

    #[test]
    fn card_payment_is_rejected_for_now() {
        let mut form = valid_form();
        form.payment_method = PaymentMethod::Card;

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.first().unwrap().field, "paymentMethod");
    }

    #[test]
    fn blank_postal_code_is_absent() {
        let mut form = valid_form();
        form.postal_code = Some("   ".to_string());
        assert_eq!(form.postal_code(), None);

        form.postal_code = Some(" 44000 ".to_string());
        assert_eq!(form.postal_code(), Some("44000"));
    }

    #[test]
    fn deserializes_camel_case_with_default_payment() {
        let form: CheckoutForm = serde_json::from_value(serde_json::json!({
            "fullName": "Ali Khan",
            "email": "ali@example.com",
            "phone": "03001234567",
            "address": "House 123, Street 4",
            "city": "Lahore"
        }))
        .unwrap();
        assert_eq!(form.payment_method, PaymentMethod::Cod);
        assert_eq!(form.postal_code, None);
    }
}
