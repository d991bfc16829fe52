use serde::{Deserialize, Serialize};

use super::party::PartyDetails;
use crate::wizard::validators::ValidationErrors;

pub const MIN_TENANTS: usize = 1;
pub const MAX_TENANTS: usize = 4;

/// Ordered list of tenants named on the agreement. The first entry is the
/// primary tenant; the list always holds between one and four entries. The
/// bound is enforced on every construction path, including deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PartyDetails>", into = "Vec<PartyDetails>")]
pub struct TenantRoster {
    tenants: Vec<PartyDetails>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("tenant list must contain between {} and {} entries, found {0}", MIN_TENANTS, MAX_TENANTS)]
pub struct RosterSizeError(pub usize);

impl TryFrom<Vec<PartyDetails>> for TenantRoster {
    type Error = RosterSizeError;

    fn try_from(tenants: Vec<PartyDetails>) -> Result<Self, Self::Error> {
        if !(MIN_TENANTS..=MAX_TENANTS).contains(&tenants.len()) {
            return Err(RosterSizeError(tenants.len()));
        }
        Ok(Self { tenants })
    }
}

impl From<TenantRoster> for Vec<PartyDetails> {
    fn from(roster: TenantRoster) -> Self {
        roster.tenants
    }
}

impl Default for TenantRoster {
    fn default() -> Self {
        Self {
            tenants: vec![PartyDetails::default()],
        }
    }
}

impl TenantRoster {
    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PartyDetails> {
        self.tenants.iter()
    }

    pub fn primary(&self) -> &PartyDetails {
        &self.tenants[0]
    }

    pub fn get(&self, index: usize) -> Option<&PartyDetails> {
        self.tenants.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut PartyDetails> {
        self.tenants.get_mut(index)
    }

    /// Append a blank tenant entry. No-op at the four-tenant cap; returns
    /// whether an entry was added.
    pub fn add(&mut self) -> bool {
        if self.tenants.len() >= MAX_TENANTS {
            return false;
        }
        self.tenants.push(PartyDetails::default());
        true
    }

    /// Remove the entry at `index`. No-op when only one tenant remains or the
    /// index is out of range; returns whether an entry was removed.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.tenants.len() <= MIN_TENANTS || index >= self.tenants.len() {
            return false;
        }
        self.tenants.remove(index);
        true
    }

    /// Validate every tenant independently; error keys are scoped by index
    /// (`tenant_0_email`) so entries never collide.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (index, tenant) in self.tenants.iter().enumerate() {
            tenant.validate_into(&format!("tenant_{index}_"), &mut errors);
        }
        errors
    }

    pub fn is_complete(&self) -> bool {
        !self.tenants.is_empty() && self.tenants.iter().all(PartyDetails::is_complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::validators::FieldError;

    fn tenant(name: &str) -> PartyDetails {
        PartyDetails {
            full_name: name.to_string(),
            address: "789 High Street, Birmingham, B1 1AA".to_string(),
            phone: "07987 654321".to_string(),
            email: format!("{}@email.com", name.to_lowercase().replace(' ', ".")),
        }
    }

    fn roster_of(count: usize) -> TenantRoster {
        let mut roster = TenantRoster::default();
        *roster.get_mut(0).unwrap() = tenant("Tenant One");
        for n in 1..count {
            assert!(roster.add());
            *roster.get_mut(n).unwrap() = tenant(&format!("Tenant {n}"));
        }
        roster
    }

    #[test]
    fn starts_with_one_blank_tenant() {
        let roster = TenantRoster::default();
        assert_eq!(roster.len(), 1);
        assert!(!roster.is_complete());
    }

    #[test]
    fn adding_a_fifth_tenant_is_a_no_op() {
        let mut roster = roster_of(4);
        assert_eq!(roster.len(), 4);
        assert!(!roster.add());
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn removing_the_last_tenant_is_a_no_op() {
        let mut roster = roster_of(1);
        assert!(!roster.remove(0));
        assert_eq!(roster.len(), 1);

        let mut pair = roster_of(2);
        assert!(pair.remove(1));
        assert_eq!(pair.len(), 1);
        assert!(!pair.remove(0));
    }

    #[test]
    fn errors_are_scoped_per_tenant_index() {
        let mut roster = roster_of(2);
        roster.get_mut(1).unwrap().email = "broken".to_string();

        let errors = roster.validate();
        assert_eq!(errors.get("tenant_1_email"), Some(FieldError::Malformed));
        assert!(errors.get("tenant_0_email").is_none());
    }

    #[test]
    fn deserialization_rejects_out_of_range_rosters() {
        let empty: Result<TenantRoster, _> = serde_json::from_str("[]");
        assert!(empty.is_err(), "zero tenants must not deserialize");

        let five = serde_json::to_string(&vec![tenant("Tenant One"); 5]).expect("encode");
        let oversized: Result<TenantRoster, _> = serde_json::from_str(&five);
        assert!(oversized.is_err(), "five tenants must not deserialize");
    }

    #[test]
    fn deserialization_round_trips_in_range_rosters() {
        let roster = roster_of(2);
        let encoded = serde_json::to_string(&roster).expect("encode");
        let decoded: TenantRoster = serde_json::from_str(&encoded).expect("decode");
        assert_eq!(decoded, roster);

        // Wire shape stays a bare array of tenant records.
        let value = serde_json::to_value(&roster).expect("to value");
        assert!(value.is_array());
    }

    #[test]
    fn completeness_requires_every_entry_filled() {
        let mut roster = roster_of(3);
        assert!(roster.is_complete());

        roster.get_mut(2).unwrap().phone.clear();
        assert!(!roster.is_complete());
    }
}
