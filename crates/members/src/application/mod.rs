//! Application Layer
//!
//! Catalog assembly, validation, persistence, and the three use cases.

pub mod catalog;
pub mod config;
pub mod login;
pub mod register;
pub mod update;
pub mod validate;
pub mod write;

// Re-exports
pub use catalog::{account_fields, login_fields, populate, populated_account_fields};
pub use config::{FieldVisibility, MembersConfig, PasswordStrength, PerScreen, StrengthPolicy};
pub use login::LoginUseCase;
pub use register::RegisterUseCase;
pub use update::UpdateUseCase;
pub use validate::validate;
pub use write::{WriteAction, write_account};
