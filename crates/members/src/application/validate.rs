//! Validator
//!
//! Walks a field catalog against submitted data and accumulates a multi-error
//! result; the caller gets every failure at once for user-facing display.
//! Only two per-field early exits exist: a required field submitted empty,
//! and a non-numeric value in a number field.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use crate::application::config::MembersConfig;
use crate::domain::field::{FIELD_EMAIL, FIELD_LOGIN, FieldDescriptor, FieldKind};
use crate::domain::store::AccountStore;
use crate::domain::submitted::SubmittedData;
use crate::error::{ErrorCode, ValidationErrors};
use kernel::AppError;

/// Validate submitted data against a catalog.
///
/// Returns the accumulated collection (empty == success); a store failure
/// during the uniqueness pre-checks aborts with the store's error.
pub async fn validate<S>(
    data: &SubmittedData,
    fields: &[FieldDescriptor],
    config: &MembersConfig,
    store: &S,
) -> Result<ValidationErrors, AppError>
where
    S: AccountStore + Sync,
{
    let mut errors = ValidationErrors::new();

    // Counterpart labels for match messages, collected from the whole
    // catalog up front so the message never depends on field order.
    let matched_labels: HashMap<&str, &str> = fields
        .iter()
        .filter_map(|f| f.matched.as_deref().map(|other| (other, f.label.as_str())))
        .collect();

    for field in fields {
        let name = field.submission_name();
        let label = field.label.as_str();

        let raw = data.text_or_empty(name);

        // Required fields must be submitted non-empty; nothing else is
        // checked for a field that fails this.
        if field.required && raw.is_empty() {
            errors.add(
                &field.id,
                format!("{label} is a required field"),
                ErrorCode::Required,
            );
            continue;
        }

        let val = sanitize_text(&raw);

        // Uniqueness pre-check; the store enforces the real constraint at
        // write time.
        if name == FIELD_EMAIL && store.email_exists(&val).await? {
            errors.add(
                &field.id,
                format!("An account with the email address \"{val}\" already exists."),
                ErrorCode::EmailExists,
            );
        }

        if name == FIELD_LOGIN {
            // Banned or malformed beats taken; the two never both fire.
            if config.username_is_banned(&val) || !store.username_is_valid(&val) {
                errors.add(
                    &field.id,
                    format!("The username \"{val}\" is invalid, please try a different username."),
                    ErrorCode::InvalidUsername,
                );
            } else if store.username_exists(&val).await? {
                errors.add(
                    &field.id,
                    format!("An account with the username \"{val}\" already exists."),
                    ErrorCode::UsernameExists,
                );
            }
        }

        match field.kind {
            FieldKind::Select | FieldKind::Radio => {
                if !field.has_option(&val) {
                    errors.add(
                        &field.id,
                        format!("\"{val}\" is an invalid option for {label}"),
                        ErrorCode::Invalid,
                    );
                }
            }
            FieldKind::Number => {
                if val.parse::<f64>().is_err() {
                    errors.add(
                        &field.id,
                        format!("{label} must be a number"),
                        ErrorCode::Invalid,
                    );
                    continue;
                }
            }
            FieldKind::Email => {
                if !is_valid_email(&val) {
                    errors.add(
                        &field.id,
                        format!("{label} must be a valid email address"),
                        ErrorCode::Invalid,
                    );
                }
            }
            FieldKind::Text
            | FieldKind::Password
            | FieldKind::Checkbox
            | FieldKind::Html
            | FieldKind::Hidden
            | FieldKind::Submit => {}
        }

        if let Some(target) = field.match_field.as_deref() {
            let other = data.text(target).unwrap_or_default();
            if other.is_empty() || val != other {
                let counterpart = matched_labels
                    .get(field.id.as_str())
                    .copied()
                    .or_else(|| {
                        fields
                            .iter()
                            .find(|f| f.id == target)
                            .map(|f| f.label.as_str())
                    })
                    .unwrap_or(target);
                errors.add(
                    &field.id,
                    format!("{counterpart} must match {label}"),
                    ErrorCode::Match,
                );
            }
        }
    }

    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "Validation rejected submission");
    }

    Ok(errors)
}

/// Basic text sanitization: NFKC-normalize, strip control characters,
/// collapse whitespace runs, trim. A pass-through transformation, not a
/// semantic change.
pub fn sanitize_text(input: &str) -> String {
    // Whitespace controls (tab, newline) survive here so the collapse pass
    // can turn them into single spaces
    let normalized: String = input
        .nfkc()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect();
    let mut out = String::with_capacity(normalized.len());
    let mut last_was_space = false;
    for c in normalized.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
    out.trim().to_string()
}

/// Syntactic email check: one `@`, a non-empty local part of at most 64
/// characters, and a dotted domain of plausible characters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 {
        return false;
    }

    if domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return false;
    }
    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    if domain.starts_with('-') || domain.ends_with('-') {
        return false;
    }

    true
}
