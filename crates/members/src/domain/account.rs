//! Account Record
//!
//! The module's read-only view of a host account. The host store owns the
//! canonical record; this is just what the populator and the orchestrators
//! need back from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::field::{FIELD_EMAIL, FIELD_FIRST_NAME, FIELD_LAST_NAME, FIELD_LOGIN};

/// Integer identifier of a host account.
///
/// Produced only after successful validation and a successful store write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host account as returned by the store.
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub id: AccountId,
    /// Login name (unique)
    pub login: String,
    /// Email address (unique)
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Auxiliary attributes recorded against the account, keyed by their
    /// prefixed field name
    pub attributes: BTreeMap<String, String>,
}

impl AccountRecord {
    /// Read an attribute by its submission field name.
    ///
    /// Core account fields are enumerated explicitly; anything else is looked
    /// up in the auxiliary-attribute map. Unknown names resolve to `None`.
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            FIELD_LOGIN => Some(self.login.clone()),
            FIELD_EMAIL => Some(self.email.clone()),
            FIELD_FIRST_NAME => self.first_name.clone(),
            FIELD_LAST_NAME => self.last_name.clone(),
            other => self.attributes.get(other).cloned(),
        }
    }
}
