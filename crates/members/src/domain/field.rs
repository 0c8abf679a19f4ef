//! Field Descriptor
//!
//! Describes one entry of a form-field catalog. Catalogs are built fresh for
//! every request by [`crate::application::catalog`], optionally populated with
//! display values, and discarded; nothing here is persisted.

use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Well-known field names
// ============================================================================

/// Namespace prefix distinguishing auxiliary-attribute fields from core
/// account fields.
pub const META_PREFIX: &str = "mbr_";

/// Core account field names (submission keys).
pub const FIELD_LOGIN: &str = "user_login";
pub const FIELD_EMAIL: &str = "email_address";
pub const FIELD_EMAIL_CONFIRM: &str = "email_address_confirm";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_PASSWORD_CONFIRM: &str = "password_confirm";
pub const FIELD_FIRST_NAME: &str = "first_name";
pub const FIELD_LAST_NAME: &str = "last_name";
pub const FIELD_USER_ID: &str = "user_id";

/// Login-screen field ids.
pub const FIELD_SIGNIN_LOGIN: &str = "mbr_login";
pub const FIELD_SIGNIN_PASSWORD: &str = "mbr_password";
pub const FIELD_SIGNIN_BUTTON: &str = "mbr_login_button";
pub const FIELD_SIGNIN_REMEMBER: &str = "mbr_remember";
pub const FIELD_SIGNIN_LOST_PASSWORD: &str = "mbr_lost_password";

/// Auxiliary-attribute field names (all carry [`META_PREFIX`]).
pub const META_ADDRESS_1: &str = "mbr_billing_address_1";
pub const META_ADDRESS_2: &str = "mbr_billing_address_2";
pub const META_CITY: &str = "mbr_billing_city";
pub const META_STATE: &str = "mbr_billing_state";
pub const META_ZIP: &str = "mbr_billing_zip";
pub const META_COUNTRY: &str = "mbr_billing_country";
pub const META_PHONE: &str = "mbr_phone";
pub const META_IP_ADDRESS: &str = "mbr_ip_address";
pub const META_AGREE_TO_TERMS: &str = "mbr_agree_to_terms";

/// The auxiliary attributes the account writer persists individually after a
/// successful store write. Order is the write order.
pub const AUXILIARY_ATTRIBUTES: &[&str] = &[
    META_ADDRESS_1,
    META_ADDRESS_2,
    META_CITY,
    META_STATE,
    META_ZIP,
    META_COUNTRY,
    META_IP_ADDRESS,
    META_PHONE,
];

// ============================================================================
// FieldKind
// ============================================================================

/// Closed set of field kinds.
///
/// The validator matches exhaustively on this enum, so adding a kind forces a
/// decision about its validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Checkbox,
    Select,
    Radio,
    Number,
    Html,
    Hidden,
    Submit,
}

// ============================================================================
// FieldDescriptor
// ============================================================================

/// One entry of a form-field catalog.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    /// Unique id within a catalog
    pub id: String,
    /// Submission key, when it differs from `id`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable label
    pub label: String,
    /// Field kind (drives validation)
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Whether a non-empty value must be submitted
    pub required: bool,
    /// Layout hint, 1-12 grid columns
    pub columns: u8,
    /// Whether this field closes its layout row
    pub last_column: bool,
    /// Ordered value/label pairs (Select and Radio only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<(String, String)>,
    /// Id of the field this one must equal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_field: Option<String>,
    /// Id of the field that must equal this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
    /// Display body for Html fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Input placeholder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Extra CSS classes for the host renderer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    /// Populated display value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl FieldDescriptor {
    /// Create a field with the catalog defaults: optional, full width,
    /// closing its row.
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            name: None,
            label: label.into(),
            kind,
            required: false,
            columns: 12,
            last_column: true,
            options: Vec::new(),
            match_field: None,
            matched: None,
            description: None,
            placeholder: None,
            classes: None,
            value: None,
        }
    }

    // Builder methods, applied at catalog-construction time.

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn required_if(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn columns(mut self, columns: u8) -> Self {
        self.columns = columns;
        self
    }

    pub fn last_column(mut self, last: bool) -> Self {
        self.last_column = last;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn options(mut self, options: Vec<(String, String)>) -> Self {
        self.options = options;
        self
    }

    /// Declare that this field must equal the field with the given id.
    pub fn must_match(mut self, other: impl Into<String>) -> Self {
        self.match_field = Some(other.into());
        self
    }

    /// Declare that the field with the given id must equal this one.
    pub fn matched_by(mut self, other: impl Into<String>) -> Self {
        self.matched = Some(other.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn classes(mut self, classes: impl Into<String>) -> Self {
        self.classes = Some(classes.into());
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The key this field is submitted under (`name`, falling back to `id`).
    pub fn submission_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Whether `value` is one of the declared options.
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|(v, _)| v == value)
    }
}
