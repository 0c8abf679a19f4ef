//! Extension Hooks
//!
//! Typed, construction-time-resolved replacement for a name-keyed global
//! hook registry. Each extension point is an explicit chain owned by
//! [`MemberHooks`] and injected into the orchestrators: filters transform a
//! value and hand it on, observers get a read-only look.
//!
//! An all-default [`MemberHooks`] makes every operation behave exactly as if
//! no hook existed.

use std::collections::BTreeMap;

use kernel::AppError;

use crate::domain::account::AccountId;
use crate::domain::field::FieldDescriptor;
use crate::domain::screen::Screen;
use crate::domain::store::{CreateAccount, Credentials, UpdateAccount};
use crate::domain::submitted::SubmittedData;
use crate::error::{MemberError, ValidationErrors};

/// Ordered list of `T -> T` transforms.
pub struct FilterChain<T> {
    filters: Vec<Box<dyn Fn(T) -> T + Send + Sync>>,
}

impl<T> FilterChain<T> {
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Append a transform to the chain.
    pub fn add<F>(&mut self, filter: F)
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.filters.push(Box::new(filter));
    }

    /// Run the value through every transform in registration order.
    pub fn apply(&self, value: T) -> T {
        self.filters.iter().fold(value, |value, f| f(value))
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<T> Default for FilterChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered list of read-only observers.
pub struct ObserverChain<T> {
    observers: Vec<Box<dyn Fn(&T) + Send + Sync>>,
}

impl<T> ObserverChain<T> {
    pub fn new() -> Self {
        Self { observers: Vec::new() }
    }

    /// Append an observer to the chain.
    pub fn add<F>(&mut self, observer: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Notify every observer in registration order.
    pub fn notify(&self, value: &T) {
        for observer in &self.observers {
            observer(value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<T> Default for ObserverChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Post-write notification payload.
#[derive(Debug, Clone)]
pub struct AccountEvent {
    pub id: AccountId,
    pub data: SubmittedData,
    pub screen: Screen,
}

/// Every extension point, resolved at construction time.
#[derive(Default)]
pub struct MemberHooks {
    /// Rewrite the assembled account-field catalog (add/remove/reorder)
    pub fields: FilterChain<Vec<FieldDescriptor>>,
    /// Rewrite the fixed login catalog
    pub login_fields: FilterChain<Vec<FieldDescriptor>>,

    /// Rewrite submitted data before validation, per operation
    pub login_data: FilterChain<SubmittedData>,
    pub registration_data: FilterChain<SubmittedData>,
    pub update_data: FilterChain<SubmittedData>,

    /// Rewrite the collected validation errors before they are returned
    pub login_errors: FilterChain<ValidationErrors>,
    pub registration_errors: FilterChain<ValidationErrors>,
    pub update_errors: FilterChain<ValidationErrors>,

    /// Rewrite the store write request before submission
    pub create_account: FilterChain<CreateAccount>,
    pub update_account: FilterChain<UpdateAccount>,

    /// Transform a store failure before it is returned
    pub write_failure: FilterChain<AppError>,

    /// Rewrite the generic sign-on failure before it is returned
    pub login_failure: FilterChain<MemberError>,

    /// Rewrite the auxiliary-attribute set before individual writes
    pub insert_attributes: FilterChain<BTreeMap<String, String>>,

    /// Rewrite the credentials handed to the host sign-on primitive
    pub credentials: FilterChain<Credentials>,

    /// Short-circuit username generation entirely; `Some` wins
    pub username_generator: Option<Box<dyn Fn(&str) -> Option<String> + Send + Sync>>,
    /// Rewrite a locally generated username
    pub generated_username: FilterChain<String>,

    /// Observe submitted data before each operation starts
    pub before_login: ObserverChain<SubmittedData>,
    pub before_registration: ObserverChain<SubmittedData>,
    pub before_update: ObserverChain<SubmittedData>,

    /// Observe data once validation has passed, before the store write
    pub after_registration_validation: ObserverChain<SubmittedData>,
    pub after_update_validation: ObserverChain<SubmittedData>,

    /// Observe the result of a successful write
    pub created: ObserverChain<AccountEvent>,
    pub registered: ObserverChain<AccountEvent>,
    pub updated: ObserverChain<AccountEvent>,
}

impl MemberHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the custom username generator, if one is registered.
    pub fn generate_username(&self, email: &str) -> Option<String> {
        self.username_generator.as_ref().and_then(|f| f(email))
    }
}
