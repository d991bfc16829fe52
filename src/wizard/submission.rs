use serde::{Deserialize, Serialize};

use super::steps::{DocumentChecklist, PartyDetails, PropertyDetails, RentalTerms, TenantRoster};

/// The complete aggregated payload assembled across all steps. Field names
/// serialize to the camelCase keys the generation endpoint expects.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub property: PropertyDetails,
    pub landlord: PartyDetails,
    pub tenants: TenantRoster,
    pub rental_terms: RentalTerms,
    pub documents: DocumentChecklist,
}
