//! In-Memory Reference Implementations
//!
//! A complete, single-process implementation of the host collaborator traits.
//! Used by the test suites throughout this crate and usable as a starting
//! point for real host adapters. Passwords are stored raw; hashing belongs to
//! a real host.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use kernel::AppError;

use crate::domain::account::{AccountId, AccountRecord};
use crate::domain::store::{
    AccountStore, CreateAccount, Credentials, SessionManager, StoreResult, UpdateAccount,
};

#[derive(Debug, Clone)]
struct StoredAccount {
    record: AccountRecord,
    password: String,
}

#[derive(Default)]
struct StoreState {
    accounts: BTreeMap<i64, StoredAccount>,
    next_id: i64,
    fail_next_create: Option<AppError>,
}

/// In-memory [`AccountStore`](crate::domain::store::AccountStore).
///
/// Uniqueness of email and login is enforced at write time with conflict
/// errors, matching what a real store's constraints would do.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
    attribute_writes: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an account directly, bypassing create-side effects.
    pub fn seed_account(&self, login: &str, email: &str, password: &str) -> AccountId {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = AccountId::new(state.next_id);
        state.accounts.insert(
            id.get(),
            StoredAccount {
                record: AccountRecord {
                    id,
                    login: login.to_string(),
                    email: email.to_string(),
                    first_name: None,
                    last_name: None,
                    attributes: BTreeMap::new(),
                },
                password: password.to_string(),
            },
        );
        id
    }

    /// Make the next `create` call fail with the given error.
    pub fn fail_next_create(&self, error: AppError) {
        self.state.lock().unwrap().fail_next_create = Some(error);
    }

    /// Number of `record_attribute` calls accepted so far.
    pub fn attribute_writes(&self) -> usize {
        self.attribute_writes.load(Ordering::SeqCst)
    }

    /// Snapshot of one account, attributes included.
    pub fn account(&self, id: AccountId) -> Option<AccountRecord> {
        self.state
            .lock()
            .unwrap()
            .accounts
            .get(&id.get())
            .map(|a| a.record.clone())
    }

    /// Stored raw password for one account.
    pub fn password(&self, id: AccountId) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .accounts
            .get(&id.get())
            .map(|a| a.password.clone())
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AccountStore for InMemoryStore {
    async fn create(&self, request: &CreateAccount) -> StoreResult<AccountId> {
        let mut state = self.state.lock().unwrap();

        if let Some(error) = state.fail_next_create.take() {
            return Err(error);
        }

        if state
            .accounts
            .values()
            .any(|a| a.record.email.eq_ignore_ascii_case(&request.email))
        {
            return Err(AppError::conflict(format!(
                "an account already holds the email address {}",
                request.email
            ))
            .with_code("existing_user_email"));
        }
        if state
            .accounts
            .values()
            .any(|a| a.record.login == request.login)
        {
            return Err(AppError::conflict(format!(
                "an account already holds the login {}",
                request.login
            ))
            .with_code("existing_user_login"));
        }

        state.next_id += 1;
        let id = AccountId::new(state.next_id);
        state.accounts.insert(
            id.get(),
            StoredAccount {
                record: AccountRecord {
                    id,
                    login: request.login.clone(),
                    email: request.email.clone(),
                    first_name: request.first_name.clone(),
                    last_name: request.last_name.clone(),
                    attributes: BTreeMap::new(),
                },
                password: request.password.clone(),
            },
        );
        Ok(id)
    }

    async fn update(&self, request: &UpdateAccount) -> StoreResult<AccountId> {
        let mut state = self.state.lock().unwrap();
        let account = state
            .accounts
            .get_mut(&request.id.get())
            .ok_or_else(|| AppError::not_found("no such account").with_code("invalid_user_id"))?;

        if let Some(email) = &request.email {
            account.record.email = email.clone();
        }
        if let Some(password) = &request.password {
            account.password = password.clone();
        }
        if let Some(first_name) = &request.first_name {
            account.record.first_name = Some(first_name.clone());
        }
        if let Some(last_name) = &request.last_name {
            account.record.last_name = Some(last_name.clone());
        }
        Ok(request.id)
    }

    async fn find_by_id(&self, id: AccountId) -> StoreResult<Option<AccountRecord>> {
        Ok(self.account(id))
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<AccountRecord>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .accounts
            .values()
            .find(|a| a.record.email.eq_ignore_ascii_case(email))
            .map(|a| a.record.clone()))
    }

    async fn email_exists(&self, email: &str) -> StoreResult<bool> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .accounts
            .values()
            .any(|a| a.record.email.eq_ignore_ascii_case(email)))
    }

    async fn username_exists(&self, login: &str) -> StoreResult<bool> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .accounts
            .values()
            .any(|a| a.record.login == login))
    }

    async fn record_attribute(&self, id: AccountId, key: &str, value: &str) -> StoreResult<()> {
        let mut state = self.state.lock().unwrap();
        let account = state
            .accounts
            .get_mut(&id.get())
            .ok_or_else(|| AppError::not_found("no such account").with_code("invalid_user_id"))?;
        account
            .record
            .attributes
            .insert(key.to_string(), value.to_string());
        self.attribute_writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn username_is_valid(&self, login: &str) -> bool {
        !login.trim().is_empty()
            && login
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '.' | '-' | '@'))
    }
}

/// In-memory [`SessionManager`](crate::domain::store::SessionManager)
/// verifying against an [`InMemoryStore`].
pub struct InMemorySessions {
    store: std::sync::Arc<InMemoryStore>,
    current: Mutex<Option<AccountId>>,
    cookies_set: AtomicUsize,
}

impl InMemorySessions {
    pub fn new(store: std::sync::Arc<InMemoryStore>) -> Self {
        Self {
            store,
            current: Mutex::new(None),
            cookies_set: AtomicUsize::new(0),
        }
    }

    /// Bind the current request to an account, as a signed-in host would.
    pub fn set_current(&self, id: Option<AccountId>) {
        *self.current.lock().unwrap() = id;
    }

    /// Number of auth cookies issued so far.
    pub fn cookies_set(&self) -> usize {
        self.cookies_set.load(Ordering::SeqCst)
    }
}

impl SessionManager for InMemorySessions {
    async fn sign_on(&self, credentials: &Credentials, _tls: bool) -> StoreResult<AccountId> {
        let state = self.store.state.lock().unwrap();
        let matched = state
            .accounts
            .values()
            .find(|a| a.record.login == credentials.login && a.password == credentials.password)
            .map(|a| a.record.id);
        drop(state);

        let id = matched.ok_or_else(|| {
            AppError::unauthorized("credential verification failed").with_code("incorrect_password")
        })?;
        *self.current.lock().unwrap() = Some(id);
        self.cookies_set.fetch_add(1, Ordering::SeqCst);
        Ok(id)
    }

    async fn set_auth_cookie(&self, id: AccountId, _remember: bool) -> StoreResult<()> {
        *self.current.lock().unwrap() = Some(id);
        self.cookies_set.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn current_account(&self) -> Option<AccountId> {
        *self.current.lock().unwrap()
    }
}
