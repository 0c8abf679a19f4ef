//! Domain Layer
//!
//! Field descriptors, screens, account records, submitted form data, and the
//! traits the host platform implements.

pub mod account;
pub mod field;
pub mod screen;
pub mod store;
pub mod submitted;

// Re-exports
pub use account::{AccountId, AccountRecord};
pub use field::{FieldDescriptor, FieldKind};
pub use screen::Screen;
pub use store::{
    AccountStore, ClientInfo, Clock, CountryProvider, CreateAccount, Credentials, SessionManager,
    StoreResult, SystemClock, UpdateAccount,
};
pub use submitted::SubmittedData;
