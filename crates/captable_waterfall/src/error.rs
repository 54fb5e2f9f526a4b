//! Input validation errors.
//!
//! Validation runs eagerly, before any arithmetic, and aggregates every
//! problem found so a caller can report them all at once rather than one at
//! a time. Validation failure produces no partial result.

use std::fmt;

/// One problem found in the waterfall input.
///
/// # Examples
/// ```
/// use captable_waterfall::ValidationIssue;
///
/// let issue = ValidationIssue::holder(3, "opt-9", "shares", "shares must be positive");
/// assert_eq!(format!("{}", issue), "holder 3 (opt-9): shares must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Index of the offending holder in the input array, if holder-scoped.
    pub holder_index: Option<usize>,
    /// Id of the offending holder, if holder-scoped.
    pub holder_id: Option<String>,
    /// Wire name of the offending field.
    pub field: &'static str,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationIssue {
    /// Creates an issue scoped to a single holder.
    pub fn holder(
        index: usize,
        id: impl Into<String>,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            holder_index: Some(index),
            holder_id: Some(id.into()),
            field,
            message: message.into(),
        }
    }

    /// Creates an issue about the input as a whole.
    pub fn input(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            holder_index: None,
            holder_id: None,
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.holder_index, &self.holder_id) {
            (Some(index), Some(id)) => write!(f, "holder {} ({}): {}", index, id, self.message),
            _ => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

/// Aggregated validation failure for a waterfall input.
///
/// The single error kind of the engine: malformed input is the only way a
/// computation can fail. Numeric edge cases (zero pools, fully capped
/// participants, exhausted proceeds) are valid outputs, not errors.
///
/// # Examples
/// ```
/// use captable_waterfall::{calculate_waterfall, ValidationError};
///
/// let err = calculate_waterfall(&[], 1_000, false).unwrap_err();
/// assert_eq!(err.issues.len(), 1);
/// assert!(format!("{}", err).contains("holder set must not be empty"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Every problem found, in input order.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    /// Creates a validation error from collected issues.
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    /// Number of problems found.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true when no issues were recorded.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true if any issue concerns the given field.
    pub fn mentions_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid waterfall input: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
