use thiserror::Error;
use tracing::debug;

use super::orchestrator::{StepData, StepKey, WizardState};
use super::review;
use super::validators::ValidationErrors;

impl StepData {
    /// Full per-field validation for the slice, run when the user asks to
    /// move forward.
    pub fn validate(&self) -> ValidationErrors {
        match self {
            Self::Property(property) => property.validate(),
            Self::Landlord(landlord) => landlord.validate(),
            Self::Tenants(tenants) => tenants.validate(),
            Self::RentalTerms(terms) => terms.validate(),
            Self::Documents(documents) => documents.validate(),
        }
    }

    /// Cheap presence gate driving the Continue button while the user types,
    /// independent of whether validation has run.
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Property(property) => property.is_complete(),
            Self::Landlord(landlord) => landlord.is_complete(),
            Self::Tenants(tenants) => tenants.is_complete(),
            Self::RentalTerms(terms) => terms.is_complete(),
            Self::Documents(documents) => documents.is_complete(),
        }
    }

    /// One-time derivations applied on leaving the step. Only the property
    /// slice has any: canonical postcode and the concatenated address.
    fn finalize(&mut self) {
        if let Self::Property(property) = self {
            property.finalize();
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepRejection {
    #[error("step has {} invalid field(s)", .errors.len())]
    Invalid { errors: ValidationErrors },
    #[error("step data belongs to '{}' but the wizard is on '{}'", .submitted.label(), .current.label())]
    WrongStep { submitted: StepKey, current: StepKey },
}

/// Navigation chrome for one screen: heading text, forward/back visibility,
/// and the label on the forward action. Pure lookup, owns no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepShell {
    pub step: StepKey,
}

impl StepShell {
    pub const fn for_step(step: StepKey) -> Self {
        Self { step }
    }

    pub const fn title(&self) -> &'static str {
        self.step.label()
    }

    pub const fn description(&self) -> &'static str {
        match self.step {
            StepKey::Property => {
                "Let's start with the rental property information. This will be used in your tenancy agreement."
            }
            StepKey::Landlord => {
                "Please provide your details as the landlord. This information will be included in the tenancy agreement."
            }
            StepKey::Tenants => {
                "Please provide details for all tenants who will be named on the tenancy agreement. You can add up to 4 tenants."
            }
            StepKey::RentalTerms => "Define the key terms of the tenancy agreement.",
            StepKey::Documents => {
                "Upload your compliance documents or confirm you have them. All documents are required for a complete tenancy pack."
            }
            StepKey::Review => {
                "Please review all the information below. You can edit any section before generating your tenancy pack."
            }
            StepKey::Download => {
                "Review the contents of your tenancy pack and generate your documents."
            }
        }
    }

    pub const fn next_label(&self) -> &'static str {
        match self.step {
            StepKey::Property => "Continue to Landlord Details",
            StepKey::Landlord => "Continue to Tenant Details",
            StepKey::Tenants => "Continue to Rental Terms",
            StepKey::RentalTerms => "Continue to Document Upload",
            StepKey::Documents => "Continue to Review",
            StepKey::Review => "Generate Tenancy Pack",
            StepKey::Download => "",
        }
    }

    /// Back is always available except on the first step.
    pub const fn shows_back(&self) -> bool {
        !self.step.is_first()
    }

    /// The final step drives generation itself and has no forward action.
    pub const fn shows_next(&self) -> bool {
        !self.step.is_last()
    }
}

/// Whether the forward action on the wizard's current screen should be
/// enabled, evaluated against live submission state. Recomputed on every
/// call, never cached.
pub fn can_proceed(wizard: &WizardState) -> bool {
    let submission = wizard.submission();
    match wizard.current_step() {
        StepKey::Property => submission.property.is_complete(),
        StepKey::Landlord => submission.landlord.is_complete(),
        StepKey::Tenants => submission.tenants.is_complete(),
        StepKey::RentalTerms => submission.rental_terms.is_complete(),
        StepKey::Documents => submission.documents.is_complete(),
        StepKey::Review => review::all_requirements_met(submission),
        StepKey::Download => false,
    }
}

/// Forward navigation for a data-owning step: validate the submitted slice,
/// and only when it is clean finalize it, store it, and advance. A rejected
/// submission leaves the wizard untouched.
pub fn submit_step(wizard: &mut WizardState, mut data: StepData) -> Result<(), StepRejection> {
    let submitted = data.key();
    let current = wizard.current_step();
    if submitted != current {
        return Err(StepRejection::WrongStep { submitted, current });
    }

    let errors = data.validate();
    if !errors.is_empty() {
        debug!(
            step = submitted.label(),
            failures = errors.len(),
            "step blocked by validation"
        );
        return Err(StepRejection::Invalid { errors });
    }

    data.finalize();
    wizard.update_step_data(data);
    wizard.advance();
    Ok(())
}
