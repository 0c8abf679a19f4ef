//! Members (Accounts & Forms) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Field descriptors, screens, account records, host traits
//! - `application/` - Catalog builder, validator, writer, use cases
//! - `infra/` - In-memory reference implementations
//!
//! ## Features
//! - Per-screen form-field catalogs (login, registration, checkout, update)
//! - Multi-error validation with uniqueness pre-checks and match pairs
//! - Account persistence with auxiliary billing/phone/consent attributes
//! - Optional username generation from the email local part
//! - Typed filter/observer hooks resolved at construction time
//!
//! ## Boundaries
//! - Identity storage, password hashing, and session cookies stay behind the
//!   host traits in `domain/store.rs`; the module never touches them directly
//! - Every operation is request-scoped; catalogs are rebuilt per call and no
//!   state is cached between calls

pub mod application;
pub mod domain;
pub mod error;
pub mod hooks;
pub mod infra;

// Re-exports for convenience
pub use application::config::MembersConfig;
pub use application::{LoginUseCase, RegisterUseCase, UpdateUseCase};
pub use error::{MemberError, MemberResult, ValidationErrors};
pub use hooks::MemberHooks;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod fields {
    pub use crate::application::catalog::{
        account_fields, login_fields, populate, populated_account_fields,
    };
    pub use crate::domain::field::*;
}

pub mod store {
    pub use crate::domain::store::*;
    pub use crate::infra::memory::{InMemorySessions, InMemoryStore};
}
