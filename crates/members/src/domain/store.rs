//! Host Collaborator Traits
//!
//! Interfaces onto the host platform's user system. The module is CRUD glue:
//! identity storage, password hashing, and session cookies all live behind
//! these traits, implemented by the embedding host (a reference in-memory
//! implementation lives in the infra layer).
//!
//! Uniqueness checks exposed here are advisory pre-checks only; the race
//! between check and write is the store's to resolve with its own
//! constraints. The module performs no retry or compensation.

use chrono::{DateTime, Utc};
use kernel::AppError;

use super::account::{AccountId, AccountRecord};

/// Result alias for host-store calls. Store failures travel through the
/// module unmodified.
pub type StoreResult<T> = Result<T, AppError>;

// ============================================================================
// Write requests
// ============================================================================

/// Account-creation request handed to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAccount {
    /// Role assigned to every self-registered account
    pub role: String,
    /// Keep the host admin toolbar hidden for this account
    pub show_admin_bar: bool,
    pub email: String,
    pub login: String,
    /// Raw password; hashing is the store's concern
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Account-update request handed to the store. `None` means "leave as is".
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAccount {
    pub id: AccountId,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Credentials handed to the host sign-on primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
    pub remember: bool,
}

/// Request-scoped connection facts, supplied by the host request handler.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    /// Network origin, recorded as an auxiliary attribute on write
    pub ip: Option<String>,
    /// Whether the current connection is TLS
    pub tls: bool,
}

// ============================================================================
// Traits
// ============================================================================

/// Host account store.
#[trait_variant::make(AccountStore: Send)]
pub trait LocalAccountStore {
    /// Create an account, returning its id.
    async fn create(&self, request: &CreateAccount) -> StoreResult<AccountId>;

    /// Update an account, returning its id.
    async fn update(&self, request: &UpdateAccount) -> StoreResult<AccountId>;

    /// Fetch an account by id.
    async fn find_by_id(&self, id: AccountId) -> StoreResult<Option<AccountRecord>>;

    /// Fetch an account by email address.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<AccountRecord>>;

    /// Whether any account holds this email address.
    async fn email_exists(&self, email: &str) -> StoreResult<bool>;

    /// Whether any account holds this login name.
    async fn username_exists(&self, login: &str) -> StoreResult<bool>;

    /// Record one auxiliary attribute against an account.
    async fn record_attribute(&self, id: AccountId, key: &str, value: &str) -> StoreResult<()>;

    /// Host format rules for login names. Pure; no lookup.
    fn username_is_valid(&self, login: &str) -> bool;
}

/// Host session / auth-cookie mechanism.
#[trait_variant::make(SessionManager: Send)]
pub trait LocalSessionManager {
    /// Authenticate and start a session, returning the signed-on account id.
    async fn sign_on(&self, credentials: &Credentials, tls: bool) -> StoreResult<AccountId>;

    /// Set the auth cookie for an account without re-authenticating.
    async fn set_auth_cookie(&self, id: AccountId, remember: bool) -> StoreResult<()>;

    /// Account bound to the current request's session, if any.
    fn current_account(&self) -> Option<AccountId>;
}

/// Source of the country options for the billing-country select field.
pub trait CountryProvider {
    /// Ordered `(code, label)` pairs.
    fn countries(&self) -> Vec<(String, String)>;
}

/// Current-time accessor, injected so tests can pin the consent timestamp.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F> CountryProvider for F
where
    F: Fn() -> Vec<(String, String)>,
{
    fn countries(&self) -> Vec<(String, String)> {
        self()
    }
}
