use serde::Serialize;
use tracing::debug;

use super::steps::{DocumentChecklist, PartyDetails, PropertyDetails, RentalTerms, TenantRoster};
use super::submission::Submission;

/// The wizard's screens, in order. The two trailing steps read the
/// submission but own no slice of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKey {
    Property,
    Landlord,
    Tenants,
    RentalTerms,
    Documents,
    Review,
    Download,
}

impl StepKey {
    pub const COUNT: usize = 7;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Property,
            Self::Landlord,
            Self::Tenants,
            Self::RentalTerms,
            Self::Documents,
            Self::Review,
            Self::Download,
        ]
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Property => 0,
            Self::Landlord => 1,
            Self::Tenants => 2,
            Self::RentalTerms => 3,
            Self::Documents => 4,
            Self::Review => 5,
            Self::Download => 6,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Property => "Property Details",
            Self::Landlord => "Landlord Information",
            Self::Tenants => "Tenant Information",
            Self::RentalTerms => "Rental Terms",
            Self::Documents => "Compliance Documents",
            Self::Review => "Review & Confirm",
            Self::Download => "Download Pack",
        }
    }

    pub const fn is_first(self) -> bool {
        self.index() == 0
    }

    pub const fn is_last(self) -> bool {
        self.index() == Self::COUNT - 1
    }
}

/// One step's freshly validated slice, handed to the orchestrator for a
/// wholesale overwrite of that slice. Merging is the step's business; the
/// orchestrator trusts that the caller validated before submitting.
#[derive(Debug, Clone)]
pub enum StepData {
    Property(PropertyDetails),
    Landlord(PartyDetails),
    Tenants(TenantRoster),
    RentalTerms(RentalTerms),
    Documents(DocumentChecklist),
}

impl StepData {
    pub const fn key(&self) -> StepKey {
        match self {
            Self::Property(_) => StepKey::Property,
            Self::Landlord(_) => StepKey::Landlord,
            Self::Tenants(_) => StepKey::Tenants,
            Self::RentalTerms(_) => StepKey::RentalTerms,
            Self::Documents(_) => StepKey::Documents,
        }
    }
}

/// Root state for one wizard session: the current step index and the
/// composite submission. Created with defaults, mutated only through the
/// transition methods below, and discarded when the session ends.
#[derive(Debug, Default, Clone)]
pub struct WizardState {
    current: usize,
    submission: Submission,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> StepKey {
        StepKey::ordered()[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    /// Replace one slice of the submission wholesale. No validation happens
    /// here; forward gating is the caller's job.
    pub fn update_step_data(&mut self, data: StepData) {
        debug!(step = data.key().label(), "updating submission slice");
        match data {
            StepData::Property(property) => self.submission.property = property,
            StepData::Landlord(landlord) => self.submission.landlord = landlord,
            StepData::Tenants(tenants) => self.submission.tenants = tenants,
            StepData::RentalTerms(terms) => self.submission.rental_terms = terms,
            StepData::Documents(documents) => self.submission.documents = documents,
        }
    }

    /// Move forward one step; no-op on the last step.
    pub fn advance(&mut self) {
        if self.current < StepKey::COUNT - 1 {
            self.current += 1;
        }
    }

    /// Move back one step; no-op on the first step.
    pub fn retreat(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Unconditional navigation used by the Review step's edit links.
    /// Editing is always allowed regardless of downstream completeness.
    pub fn jump_to(&mut self, step: StepKey) {
        self.current = step.index();
    }

    /// 1-based position for the progress header.
    pub fn position(&self) -> usize {
        self.current + 1
    }

    pub fn progress_percent(&self) -> u8 {
        (self.position() * 100 / StepKey::COUNT) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::steps::PropertyDetails;

    #[test]
    fn step_order_matches_screen_order() {
        let ordered = StepKey::ordered();
        assert_eq!(ordered.len(), StepKey::COUNT);
        for (position, step) in ordered.iter().enumerate() {
            assert_eq!(step.index(), position);
        }
        assert!(StepKey::Property.is_first());
        assert!(StepKey::Download.is_last());
    }

    #[test]
    fn advance_and_retreat_clamp_at_the_ends() {
        let mut wizard = WizardState::new();
        wizard.retreat();
        assert_eq!(wizard.current_step(), StepKey::Property);

        for _ in 0..20 {
            wizard.advance();
        }
        assert_eq!(wizard.current_step(), StepKey::Download);
        assert_eq!(wizard.position(), StepKey::COUNT);
    }

    #[test]
    fn jump_to_bypasses_gating_in_both_directions() {
        let mut wizard = WizardState::new();
        wizard.jump_to(StepKey::Review);
        assert_eq!(wizard.current_step(), StepKey::Review);
        wizard.jump_to(StepKey::Landlord);
        assert_eq!(wizard.current_step(), StepKey::Landlord);
    }

    #[test]
    fn update_overwrites_one_slice_only() {
        let mut wizard = WizardState::new();
        let mut property = PropertyDetails {
            house_number: "1".to_string(),
            street: "Main Road".to_string(),
            city: "Leeds".to_string(),
            postcode: "LS1 1AA".to_string(),
            full_address: String::new(),
        };
        property.finalize();
        let landlord_before = wizard.submission().landlord.clone();

        wizard.update_step_data(StepData::Property(property.clone()));
        assert_eq!(wizard.submission().property, property);
        assert_eq!(wizard.submission().landlord, landlord_before);
    }

    #[test]
    fn navigation_alone_never_touches_the_submission() {
        let mut wizard = WizardState::new();
        let before = wizard.submission().clone();

        wizard.jump_to(StepKey::Documents);
        wizard.retreat();
        wizard.advance();
        wizard.jump_to(StepKey::Review);

        assert_eq!(wizard.submission(), &before);
    }
}
