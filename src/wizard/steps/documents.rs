use serde::{Deserialize, Serialize};

use crate::wizard::validators::{FieldError, ValidationErrors};

/// Upload size cap enforced on every accepted file, drag or picker.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Advisory picker filter; never enforced programmatically.
pub const ACCEPTED_FORMATS: &str = ".pdf,.jpg,.jpeg,.png";

/// The five compliance documents every pack must account for. The set is
/// closed: the checklist stores one slot per kind, nothing is added at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    Epc,
    GasSafety,
    Eicr,
    RightToRent,
    Deposit,
}

impl DocumentKind {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Epc,
            Self::GasSafety,
            Self::Eicr,
            Self::RightToRent,
            Self::Deposit,
        ]
    }

    /// Stable field key used in validation reports.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Epc => "epc",
            Self::GasSafety => "gas_safety",
            Self::Eicr => "eicr",
            Self::RightToRent => "right_to_rent",
            Self::Deposit => "deposit",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Epc => "Energy Performance Certificate (EPC)",
            Self::GasSafety => "Gas Safety Certificate",
            Self::Eicr => "Electrical Installation Condition Report (EICR)",
            Self::RightToRent => "Right to Rent Documentation",
            Self::Deposit => "Deposit Protection Evidence",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Epc => "Required for all rental properties. Must be valid and not expired.",
            Self::GasSafety => {
                "Annual gas safety check certificate. Required if property has gas appliances."
            }
            Self::Eicr => "Electrical safety certificate. Required for all rental properties.",
            Self::RightToRent => "Evidence that tenants have the right to rent in the UK.",
            Self::Deposit => "Proof that the deposit is protected in an approved scheme.",
        }
    }
}

/// Opaque handle to a locally chosen file; content is never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHandle {
    pub name: String,
    pub size_bytes: u64,
}

/// Derived tri-state for one document slot. The states are mutually
/// exclusive by construction of `DocumentStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentState {
    Missing,
    Acknowledged,
    Uploaded,
}

impl DocumentState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Missing => "Required",
            Self::Acknowledged => "Acknowledged",
            Self::Uploaded => "Uploaded",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("file '{name}' is {size_bytes} bytes; uploads are capped at {} bytes", MAX_UPLOAD_BYTES)]
    TooLarge { name: String, size_bytes: u64 },
}

/// One checklist slot. A slot holds an uploaded file, or an acknowledgement
/// that the landlord already has the document, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStatus {
    #[serde(default)]
    pub file: Option<FileHandle>,
    #[serde(default)]
    pub has_document: bool,
    pub required: bool,
}

impl Default for DocumentStatus {
    fn default() -> Self {
        Self {
            file: None,
            has_document: false,
            required: true,
        }
    }
}

impl DocumentStatus {
    pub fn state(&self) -> DocumentState {
        if self.file.is_some() {
            DocumentState::Uploaded
        } else if self.has_document {
            DocumentState::Acknowledged
        } else {
            DocumentState::Missing
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.state() != DocumentState::Missing
    }
}

/// Compliance document checklist: one slot per kind, all required.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentChecklist {
    #[serde(default)]
    pub epc: DocumentStatus,
    #[serde(default)]
    pub gas_safety: DocumentStatus,
    #[serde(default)]
    pub eicr: DocumentStatus,
    #[serde(default)]
    pub right_to_rent: DocumentStatus,
    #[serde(default)]
    pub deposit: DocumentStatus,
}

impl DocumentChecklist {
    pub fn status(&self, kind: DocumentKind) -> &DocumentStatus {
        match kind {
            DocumentKind::Epc => &self.epc,
            DocumentKind::GasSafety => &self.gas_safety,
            DocumentKind::Eicr => &self.eicr,
            DocumentKind::RightToRent => &self.right_to_rent,
            DocumentKind::Deposit => &self.deposit,
        }
    }

    fn status_mut(&mut self, kind: DocumentKind) -> &mut DocumentStatus {
        match kind {
            DocumentKind::Epc => &mut self.epc,
            DocumentKind::GasSafety => &mut self.gas_safety,
            DocumentKind::Eicr => &mut self.eicr,
            DocumentKind::RightToRent => &mut self.right_to_rent,
            DocumentKind::Deposit => &mut self.deposit,
        }
    }

    pub fn state(&self, kind: DocumentKind) -> DocumentState {
        self.status(kind).state()
    }

    /// Attach an uploaded file. Oversized files are rejected and the slot is
    /// left exactly as it was; accepting a file clears a prior
    /// acknowledgement.
    pub fn attach(&mut self, kind: DocumentKind, file: FileHandle) -> Result<(), UploadError> {
        if file.size_bytes > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge {
                name: file.name,
                size_bytes: file.size_bytes,
            });
        }

        let slot = self.status_mut(kind);
        slot.file = Some(file);
        slot.has_document = false;
        Ok(())
    }

    /// Toggle the "I have this document" acknowledgement. Checking it
    /// discards any uploaded file for the slot.
    pub fn acknowledge(&mut self, kind: DocumentKind, checked: bool) {
        let slot = self.status_mut(kind);
        slot.has_document = checked;
        if checked {
            slot.file = None;
        }
    }

    pub fn remove_file(&mut self, kind: DocumentKind) {
        self.status_mut(kind).file = None;
    }

    pub fn satisfied_count(&self) -> usize {
        DocumentKind::ordered()
            .iter()
            .filter(|kind| self.status(**kind).is_satisfied())
            .count()
    }

    pub fn outstanding(&self) -> Vec<DocumentKind> {
        DocumentKind::ordered()
            .into_iter()
            .filter(|kind| !self.status(*kind).is_satisfied())
            .collect()
    }

    /// Every one of the five kinds must be uploaded or acknowledged.
    pub fn is_complete(&self) -> bool {
        self.outstanding().is_empty()
    }

    /// Full validation mirrors completeness: each kind still missing is
    /// reported as an empty field under its own key.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for kind in self.outstanding() {
            errors.check(kind.key(), Err(FieldError::Empty));
        }
        errors
    }
}
