//! Wizard engine: step sub-states with pure validation, an orchestrator
//! owning the composite submission and the step index, navigation gating,
//! and the derived review/confirmation views.

pub mod confirmation;
pub mod orchestrator;
pub mod review;
pub mod shell;
pub mod steps;
pub mod submission;
pub mod validators;

pub use confirmation::{ConfirmationError, ConfirmationStep, GenerationPhase};
pub use orchestrator::{StepData, StepKey, WizardState};
pub use shell::{can_proceed, submit_step, StepRejection, StepShell};
pub use submission::Submission;
pub use validators::{FieldError, ValidationErrors};
