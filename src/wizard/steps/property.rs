use serde::{Deserialize, Serialize};

use crate::wizard::validators::{self, ValidationErrors};

/// Address of the rental property. `full_address` is derived once, when the
/// step is finalized on leaving it, never reactively while typing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetails {
    pub house_number: String,
    pub street: String,
    pub city: String,
    pub postcode: String,
    #[serde(default)]
    pub full_address: String,
}

impl PropertyDetails {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check("house_number", validators::required(&self.house_number));
        errors.check("street", validators::required(&self.street));
        errors.check("city", validators::required(&self.city));
        errors.check("postcode", validators::uk_postcode(&self.postcode));
        errors
    }

    /// Cheap gate for the Continue button; runs on every edit.
    pub fn is_complete(&self) -> bool {
        !self.house_number.trim().is_empty()
            && !self.street.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.postcode.trim().is_empty()
    }

    /// Canonicalize the postcode and derive the display address. Callers run
    /// this only after `validate` reports no errors.
    pub fn finalize(&mut self) {
        self.postcode = self.postcode.trim().to_uppercase();
        self.full_address = format!(
            "{} {}, {}, {}",
            self.house_number.trim(),
            self.street.trim(),
            self.city.trim(),
            self.postcode
        );
    }
}
