pub mod documents;
pub mod party;
pub mod property;
pub mod rental_terms;
pub mod tenants;

pub use documents::{
    DocumentChecklist, DocumentKind, DocumentState, DocumentStatus, FileHandle, UploadError,
    ACCEPTED_FORMATS, MAX_UPLOAD_BYTES,
};
pub use party::PartyDetails;
pub use property::PropertyDetails;
pub use rental_terms::{RentFrequency, RentalTerms, TenancyLength};
pub use tenants::{RosterSizeError, TenantRoster, MAX_TENANTS, MIN_TENANTS};
