use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use super::review::ChecklistStatus;
use super::steps::{DocumentKind, DocumentState};
use super::submission::Submission;
use crate::gateway::{GeneratedPack, GenerationError, PackGateway};

/// Where the final screen is in its local lifecycle. This is private to the
/// confirmation step; the orchestrator's step index never tracks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationPhase {
    Idle,
    Generating,
    Generated(GeneratedPack),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfirmationError {
    #[error("please agree to the terms and conditions before proceeding")]
    TermsNotAccepted,
    #[error("there was an error generating your tenancy pack; please try again")]
    GenerationFailed,
}

/// Row in the "your pack contents" listing shown before generation.
#[derive(Debug, Clone, Serialize)]
pub struct PackContent {
    pub title: &'static str,
    pub status: ChecklistStatus,
    pub detail: &'static str,
}

/// Pack contents: the agreement, each compliance document with its live
/// uploaded/acknowledged status, and the two always-included extras.
pub fn pack_contents(submission: &Submission) -> Vec<PackContent> {
    let mut contents = vec![PackContent {
        title: "Assured Shorthold Tenancy Agreement",
        status: ChecklistStatus::Complete,
        detail: "Completed with all your provided information",
    }];

    for kind in DocumentKind::ordered() {
        let (status, detail) = match submission.documents.state(kind) {
            DocumentState::Uploaded => (ChecklistStatus::Uploaded, "Your uploaded document"),
            _ => (ChecklistStatus::Acknowledged, "Acknowledged as available"),
        };
        contents.push(PackContent {
            title: kind.label(),
            status,
            detail,
        });
    }

    contents.push(PackContent {
        title: "How to Rent Guide",
        status: ChecklistStatus::Complete,
        detail: "Latest official government guide",
    });
    contents.push(PackContent {
        title: "Tenancy Checklist",
        status: ChecklistStatus::Complete,
        detail: "Complete compliance checklist",
    });
    contents
}

/// Interactive state of the final screen: a terms gate, then
/// idle -> generating -> generated. Failure returns to idle so the user can
/// retry manually; success pins the artifact in memory so repeated downloads
/// never re-invoke the gateway.
#[derive(Debug)]
pub struct ConfirmationStep {
    phase: GenerationPhase,
    agreed_to_terms: bool,
}

impl Default for ConfirmationStep {
    fn default() -> Self {
        Self {
            phase: GenerationPhase::Idle,
            agreed_to_terms: false,
        }
    }
}

impl ConfirmationStep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &GenerationPhase {
        &self.phase
    }

    pub fn agreed_to_terms(&self) -> bool {
        self.agreed_to_terms
    }

    pub fn set_agreed_to_terms(&mut self, agreed: bool) {
        self.agreed_to_terms = agreed;
    }

    /// True while a gateway call is in flight. Front ends disable the
    /// generate action whenever this reports true.
    pub fn is_generating(&self) -> bool {
        self.phase == GenerationPhase::Generating
    }

    /// The artifact from the last successful generation, if any.
    pub fn pack(&self) -> Option<&GeneratedPack> {
        match &self.phase {
            GenerationPhase::Generated(pack) => Some(pack),
            _ => None,
        }
    }

    /// Run one generation attempt through the gateway. The generate action
    /// is disabled while a request is outstanding; that disabled state is
    /// the only debounce.
    pub fn generate(
        &mut self,
        gateway: &dyn PackGateway,
        submission: &Submission,
    ) -> Result<&GeneratedPack, ConfirmationError> {
        if !self.agreed_to_terms {
            return Err(ConfirmationError::TermsNotAccepted);
        }
        if let GenerationPhase::Generated(_) = self.phase {
            // Already generated; download re-uses the held artifact.
            return self.pack().ok_or(ConfirmationError::GenerationFailed);
        }

        self.phase = GenerationPhase::Generating;
        match gateway.generate(submission) {
            Ok(pack) => {
                self.phase = GenerationPhase::Generated(pack);
                self.pack().ok_or(ConfirmationError::GenerationFailed)
            }
            Err(err) => {
                let reason = match &err {
                    GenerationError::Failed(reason) => reason.clone(),
                    GenerationError::Runtime(reason) => reason.clone(),
                };
                warn!(%reason, "tenancy pack generation failed");
                self.phase = GenerationPhase::Idle;
                Err(ConfirmationError::GenerationFailed)
            }
        }
    }
}
