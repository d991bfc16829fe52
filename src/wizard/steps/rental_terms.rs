use serde::{Deserialize, Serialize};

use crate::wizard::validators::{self, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentFrequency {
    Monthly,
    Quarterly,
    Annually,
}

impl RentFrequency {
    pub const fn ordered() -> [Self; 3] {
        [Self::Monthly, Self::Quarterly, Self::Annually]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Annually => "Annually",
        }
    }
}

impl Default for RentFrequency {
    fn default() -> Self {
        Self::Monthly
    }
}

/// Fixed-term lengths offered by the agreement, in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenancyLength {
    SixMonths,
    TwelveMonths,
    EighteenMonths,
    TwentyFourMonths,
}

impl TenancyLength {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::SixMonths,
            Self::TwelveMonths,
            Self::EighteenMonths,
            Self::TwentyFourMonths,
        ]
    }

    pub const fn months(self) -> u8 {
        match self {
            Self::SixMonths => 6,
            Self::TwelveMonths => 12,
            Self::EighteenMonths => 18,
            Self::TwentyFourMonths => 24,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SixMonths => "6 months",
            Self::TwelveMonths => "12 months",
            Self::EighteenMonths => "18 months",
            Self::TwentyFourMonths => "24 months",
        }
    }
}

impl Default for TenancyLength {
    fn default() -> Self {
        Self::TwelveMonths
    }
}

/// Key terms of the tenancy. Amounts and the payment date stay as entered;
/// validation here is presence-only — range and date-order checks belong to
/// the generation service.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalTerms {
    pub rent_amount: String,
    pub rent_frequency: RentFrequency,
    pub payment_date: String,
    pub deposit_amount: String,
    pub tenancy_start_date: String,
    pub tenancy_length: TenancyLength,
}

impl RentalTerms {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check("rent_amount", validators::required(&self.rent_amount));
        errors.check("payment_date", validators::required(&self.payment_date));
        errors.check(
            "deposit_amount",
            validators::required(&self.deposit_amount),
        );
        errors.check(
            "tenancy_start_date",
            validators::required(&self.tenancy_start_date),
        );
        errors
    }

    pub fn is_complete(&self) -> bool {
        !self.rent_amount.trim().is_empty()
            && !self.payment_date.trim().is_empty()
            && !self.deposit_amount.trim().is_empty()
            && !self.tenancy_start_date.trim().is_empty()
    }
}
