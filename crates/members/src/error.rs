//! Member Error Types
//!
//! Two layers: [`ValidationErrors`] is the collected, never-thrown multi-error
//! value the validator accumulates for user-facing display, and
//! [`MemberError`] is what the orchestrators return — validation failures,
//! host-store failures passed through unmodified, or the deliberately generic
//! login failure.

use derive_more::Display;
use kernel::AppError;
use serde::Serialize;
use thiserror::Error;

use crate::domain::field::FIELD_USER_ID;

/// Result alias for the orchestrator operations.
pub type MemberResult<T> = Result<T, MemberError>;

/// Message used for every login failure, whether the identifier did not
/// resolve or the host rejected the credentials. Deliberately does not say
/// which.
pub const LOGIN_ERROR_MESSAGE: &str =
    "Could not find an account with the supplied email address and password combination.";

// ============================================================================
// Validation error codes
// ============================================================================

/// Machine code attached to each validation error.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCode {
    /// Required field submitted empty or absent
    #[display("required")]
    Required,
    /// Generic type/format failure (number, select option, email syntax)
    #[display("invalid")]
    Invalid,
    /// An account with the submitted email already exists
    #[display("email-exists")]
    EmailExists,
    /// An account with the submitted login already exists
    #[display("username-exists")]
    UsernameExists,
    /// Login is banned or fails host format rules
    #[display("invalid-username")]
    InvalidUsername,
    /// Field does not equal its declared counterpart
    #[display("match")]
    Match,
    /// Update was attempted with no account id and no session
    #[display("missing-user-id")]
    MissingUserId,
}

/// One validation failure, keyed by field id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: ErrorCode,
}

/// Collected validation failures.
///
/// Invariant: an empty collection is success; any entry means the operation
/// aborts before persistence. Hook filters may rewrite entries but the
/// collection semantics stay — the orchestrators re-check emptiness after
/// filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>, code: ErrorCode) {
        self.errors.push(ValidationError {
            field: field.into(),
            message: message.into(),
            code,
        });
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// All codes recorded against one field id.
    pub fn codes_for(&self, field: &str) -> Vec<ErrorCode> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.code)
            .collect()
    }

    /// Whether the given field carries the given code.
    pub fn has(&self, field: &str, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.field == field && e.code == code)
    }

    /// Drop every entry for a field. Intended for hook filters.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&ValidationError) -> bool,
    {
        self.errors.retain(keep);
    }

    /// `Ok(())` iff no entry was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

// ============================================================================
// Module error
// ============================================================================

/// Error returned by the login/register/update orchestrators.
#[derive(Debug, Error)]
pub enum MemberError {
    /// One or more field validation failures
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Host-store failure, passed through unmodified
    #[error(transparent)]
    Store(#[from] AppError),

    /// Generic login failure
    #[error("{LOGIN_ERROR_MESSAGE}")]
    Login,
}

impl MemberError {
    /// The update path's "no account id and no session" failure, shaped as a
    /// field error so hosts render it alongside validation output.
    pub fn missing_user_id() -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(FIELD_USER_ID, "No user ID specified.", ErrorCode::MissingUserId);
        MemberError::Validation(errors)
    }

    /// Borrow the validation payload, if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            MemberError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for MemberError {
    fn from(errors: ValidationErrors) -> Self {
        MemberError::Validation(errors)
    }
}
