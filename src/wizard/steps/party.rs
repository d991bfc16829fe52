use serde::{Deserialize, Serialize};

use crate::wizard::validators::{self, ValidationErrors};

/// Contact record shared by the landlord step and each tenant entry.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyDetails {
    pub full_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl PartyDetails {
    /// Validate into `errors`, prefixing each field key so tenant entries can
    /// report without colliding (`prefix` is empty for the landlord).
    pub fn validate_into(&self, prefix: &str, errors: &mut ValidationErrors) {
        errors.check(
            format!("{prefix}full_name"),
            validators::required(&self.full_name),
        );
        errors.check(
            format!("{prefix}address"),
            validators::required(&self.address),
        );
        errors.check(format!("{prefix}phone"), validators::phone(&self.phone));
        errors.check(format!("{prefix}email"), validators::email(&self.email));
    }

    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        self.validate_into("", &mut errors);
        errors
    }

    pub fn is_complete(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.address.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.email.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::validators::FieldError;

    fn landlord() -> PartyDetails {
        PartyDetails {
            full_name: "John Smith".to_string(),
            address: "456 Oak Avenue, Manchester, M1 1AA".to_string(),
            phone: "07123 456789".to_string(),
            email: "john.smith@email.com".to_string(),
        }
    }

    #[test]
    fn accepts_complete_party() {
        assert!(landlord().validate().is_empty());
        assert!(landlord().is_complete());
    }

    #[test]
    fn reports_field_level_reasons() {
        let mut party = landlord();
        party.full_name = "  ".to_string();
        party.phone = "123".to_string();
        party.email = "not-an-email".to_string();

        let errors = party.validate();
        assert_eq!(errors.get("full_name"), Some(FieldError::Empty));
        assert_eq!(errors.get("phone"), Some(FieldError::Malformed));
        assert_eq!(errors.get("email"), Some(FieldError::Malformed));
        assert!(errors.get("address").is_none());
    }
}
