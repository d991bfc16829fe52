use chrono::NaiveDate;
use serde::Serialize;

use super::steps::{DocumentKind, DocumentState, RentFrequency, RentalTerms};
use super::submission::Submission;

/// Document kinds still missing an upload or acknowledgement, in checklist
/// order.
pub fn outstanding_documents(submission: &Submission) -> Vec<DocumentKind> {
    submission.documents.outstanding()
}

/// Aggregate readiness flag shown on the review screen. Derived from live
/// submission state on every call so edits made after jumping back are
/// always reflected; never cached.
pub fn all_requirements_met(submission: &Submission) -> bool {
    submission.property.is_complete()
        && submission.landlord.is_complete()
        && submission.tenants.is_complete()
        && submission.rental_terms.is_complete()
        && submission.documents.is_complete()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistStatus {
    Complete,
    Uploaded,
    Acknowledged,
    Missing,
}

impl ChecklistStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complete => "Complete",
            Self::Uploaded => "Uploaded",
            Self::Acknowledged => "Acknowledged",
            Self::Missing => "Missing",
        }
    }

    pub const fn is_satisfied(self) -> bool {
        !matches!(self, Self::Missing)
    }
}

impl From<DocumentState> for ChecklistStatus {
    fn from(state: DocumentState) -> Self {
        match state {
            DocumentState::Uploaded => Self::Uploaded,
            DocumentState::Acknowledged => Self::Acknowledged,
            DocumentState::Missing => Self::Missing,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistRow {
    pub item: &'static str,
    pub status: ChecklistStatus,
    pub detail: &'static str,
}

/// Compliance checklist rows for the review screen: the generated agreement
/// and the How to Rent guide are always included, the five document rows
/// track live checklist state.
pub fn compliance_checklist(submission: &Submission) -> Vec<ChecklistRow> {
    let mut rows = vec![ChecklistRow {
        item: "Tenancy Agreement",
        status: ChecklistStatus::Complete,
        detail: "Generated from your provided information",
    }];

    for kind in DocumentKind::ordered() {
        rows.push(ChecklistRow {
            item: kind.label(),
            status: submission.documents.state(kind).into(),
            detail: kind.description(),
        });
    }

    rows.push(ChecklistRow {
        item: "How to Rent Guide",
        status: ChecklistStatus::Complete,
        detail: "Latest government guide (automatically included)",
    });
    rows
}

/// Render an amount entered as free text as GBP, e.g. `1200` -> `£1,200.00`.
/// Unparseable input is shown as entered so review never hides what the
/// user typed.
pub fn format_currency(raw: &str) -> String {
    let trimmed = raw.trim();
    let Ok(amount) = trimmed.parse::<f64>() else {
        return trimmed.to_string();
    };

    let pence = format!("{:.2}", amount.abs());
    let (whole, fraction) = pence.split_once('.').unwrap_or((pence.as_str(), "00"));
    let mut grouped = String::new();
    for (offset, digit) in whole.chars().rev().enumerate() {
        if offset > 0 && offset % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let whole: String = grouped.chars().rev().collect();
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}£{whole}.{fraction}")
}

/// Render an ISO date for display, e.g. `2026-09-01` -> `1 September 2026`.
pub fn format_long_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%-d %B %Y").to_string(),
        Err(_) => raw.trim().to_string(),
    }
}

const fn ordinal_suffix(day: u32) -> &'static str {
    let ones = day % 10;
    let tens = day % 100;
    match (ones, tens) {
        (1, t) if t != 11 => "st",
        (2, t) if t != 12 => "nd",
        (3, t) if t != 13 => "rd",
        _ => "th",
    }
}

/// Human payment schedule. A bare day number on a monthly tenancy reads as
/// "1st of each month"; anything else is shown as the user entered it.
pub fn payment_schedule(terms: &RentalTerms) -> String {
    let raw = terms.payment_date.trim();
    if terms.rent_frequency == RentFrequency::Monthly {
        if let Ok(day @ 1..=31) = raw.parse::<u32>() {
            return format!("{day}{} of each month", ordinal_suffix(day));
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::steps::{FileHandle, PartyDetails, PropertyDetails, TenancyLength};

    fn complete_submission() -> Submission {
        let party = PartyDetails {
            full_name: "Jane Doe".to_string(),
            address: "789 High Street, Birmingham, B1 1AA".to_string(),
            phone: "07987 654321".to_string(),
            email: "jane.doe@email.com".to_string(),
        };

        let mut submission = Submission {
            property: PropertyDetails {
                house_number: "123".to_string(),
                street: "Baker Street".to_string(),
                city: "London".to_string(),
                postcode: "SW1A 1AA".to_string(),
                full_address: "123 Baker Street, London, SW1A 1AA".to_string(),
            },
            landlord: party.clone(),
            rental_terms: RentalTerms {
                rent_amount: "1200".to_string(),
                rent_frequency: RentFrequency::Monthly,
                payment_date: "1".to_string(),
                deposit_amount: "1800".to_string(),
                tenancy_start_date: "2026-09-01".to_string(),
                tenancy_length: TenancyLength::TwelveMonths,
            },
            ..Submission::default()
        };
        *submission.tenants.get_mut(0).expect("roster never empty") = party;

        for kind in DocumentKind::ordered() {
            submission.documents.acknowledge(kind, true);
        }
        submission
            .documents
            .attach(
                DocumentKind::Epc,
                FileHandle {
                    name: "epc.pdf".to_string(),
                    size_bytes: 2048,
                },
            )
            .expect("within cap");
        submission
    }

    #[test]
    fn complete_submission_meets_all_requirements() {
        let submission = complete_submission();
        assert!(all_requirements_met(&submission));
        assert!(outstanding_documents(&submission).is_empty());
    }

    #[test]
    fn one_missing_document_is_identified_exactly() {
        let mut submission = complete_submission();
        submission.documents.acknowledge(DocumentKind::GasSafety, false);

        assert!(!all_requirements_met(&submission));
        assert_eq!(
            outstanding_documents(&submission),
            vec![DocumentKind::GasSafety]
        );
    }

    #[test]
    fn checklist_has_agreement_five_documents_and_guide() {
        let submission = complete_submission();
        let rows = compliance_checklist(&submission);

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].status, ChecklistStatus::Complete);
        assert_eq!(rows[1].status, ChecklistStatus::Uploaded);
        assert_eq!(rows[2].status, ChecklistStatus::Acknowledged);
        assert_eq!(rows[6].item, "How to Rent Guide");
        assert!(rows.iter().all(|row| row.status.is_satisfied()));
    }

    #[test]
    fn currency_and_date_formatting() {
        assert_eq!(format_currency("1200"), "£1,200.00");
        assert_eq!(format_currency("985.5"), "£985.50");
        assert_eq!(format_currency("1234567"), "£1,234,567.00");
        assert_eq!(format_currency("tbc"), "tbc");

        assert_eq!(format_long_date("2026-09-01"), "1 September 2026");
        assert_eq!(format_long_date("next week"), "next week");
    }

    #[test]
    fn payment_schedule_renders_ordinals_for_monthly_day_numbers() {
        let mut terms = complete_submission().rental_terms;
        assert_eq!(payment_schedule(&terms), "1st of each month");

        terms.payment_date = "22".to_string();
        assert_eq!(payment_schedule(&terms), "22nd of each month");

        terms.payment_date = "11".to_string();
        assert_eq!(payment_schedule(&terms), "11th of each month");

        terms.payment_date = "1st of each month".to_string();
        assert_eq!(payment_schedule(&terms), "1st of each month");

        terms.payment_date = "3".to_string();
        terms.rent_frequency = RentFrequency::Quarterly;
        assert_eq!(payment_schedule(&terms), "3");
    }
}
