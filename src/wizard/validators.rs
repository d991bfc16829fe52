use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("valid phone pattern"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static UK_POSTCODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z]{1,2}[0-9][A-Z0-9]? ?[0-9][A-Z]{2}$").expect("valid postcode pattern")
});

/// Reason a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    Empty,
    Malformed,
}

impl FieldError {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "required",
            Self::Malformed => "invalid format",
        }
    }
}

pub fn required(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Empty)
    } else {
        Ok(())
    }
}

pub fn phone(value: &str) -> Result<(), FieldError> {
    required(value)?;
    if PHONE_PATTERN.is_match(value.trim()) {
        Ok(())
    } else {
        Err(FieldError::Malformed)
    }
}

pub fn email(value: &str) -> Result<(), FieldError> {
    required(value)?;
    if EMAIL_PATTERN.is_match(value.trim()) {
        Ok(())
    } else {
        Err(FieldError::Malformed)
    }
}

pub fn uk_postcode(value: &str) -> Result<(), FieldError> {
    required(value)?;
    if UK_POSTCODE_PATTERN.is_match(value.trim()) {
        Ok(())
    } else {
        Err(FieldError::Malformed)
    }
}

/// Accumulated per-field validation failures for one step. Field keys are
/// ordered so error reporting stays deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    failures: BTreeMap<String, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a validator against a field key, keeping only
    /// failures.
    pub fn check(&mut self, field: impl Into<String>, outcome: Result<(), FieldError>) {
        if let Err(reason) = outcome {
            self.failures.insert(field.into(), reason);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn get(&self, field: &str) -> Option<FieldError> {
        self.failures.get(field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldError)> {
        self.failures.iter().map(|(key, reason)| (key.as_str(), *reason))
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        self.failures.extend(other.failures);
    }
}
