//! Registration Use Case
//!
//! Validates a registration or checkout submission, generates a login name
//! when the install runs with generated usernames, persists the account, and
//! optionally signs the new member in.

use std::sync::Arc;

use crate::application::catalog::account_fields;
use crate::application::config::MembersConfig;
use crate::application::validate::validate;
use crate::application::write::{WriteAction, write_account};
use crate::domain::account::AccountId;
use crate::domain::field::{FIELD_EMAIL, FIELD_LOGIN};
use crate::domain::screen::Screen;
use crate::domain::store::{AccountStore, Clock, ClientInfo, CountryProvider, SessionManager};
use crate::domain::submitted::SubmittedData;
use crate::error::MemberResult;
use crate::hooks::{AccountEvent, MemberHooks};
use kernel::AppError;

pub struct RegisterUseCase<S, M> {
    store: Arc<S>,
    sessions: Arc<M>,
    config: Arc<MembersConfig>,
    hooks: Arc<MemberHooks>,
    countries: Arc<dyn CountryProvider + Send + Sync>,
    clock: Arc<dyn Clock>,
}

impl<S, M> RegisterUseCase<S, M>
where
    S: AccountStore + Sync,
    M: SessionManager + Sync,
{
    pub fn new(
        store: Arc<S>,
        sessions: Arc<M>,
        config: Arc<MembersConfig>,
        hooks: Arc<MemberHooks>,
        countries: Arc<dyn CountryProvider + Send + Sync>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            sessions,
            config,
            hooks,
            countries,
            clock,
        }
    }

    /// Register a new member, returning the created account id.
    ///
    /// `screen` selects the registration or checkout catalog; `sign_on`
    /// controls whether the new account gets an auth cookie on success.
    pub async fn execute(
        &self,
        data: SubmittedData,
        screen: Screen,
        sign_on: bool,
        client: &ClientInfo,
    ) -> MemberResult<AccountId> {
        self.hooks.before_registration.notify(&data);

        let mut data = data;
        if self.config.generate_username {
            // The generated name wins over anything the submission carried
            let login = self
                .generate_username(&data.text_or_empty(FIELD_EMAIL))
                .await?;
            data.insert(FIELD_LOGIN, login);
        }

        let data = self.hooks.registration_data.apply(data);

        let fields = account_fields(
            screen,
            &self.config,
            &*self.countries,
            None,
            &self.hooks,
        );
        let errors = validate(&data, &fields, &self.config, &*self.store).await?;
        let errors = self.hooks.registration_errors.apply(errors);
        if !errors.is_empty() {
            return Err(errors.into());
        }

        self.hooks.after_registration_validation.notify(&data);

        let id = write_account(
            &data,
            WriteAction::Create,
            screen,
            &self.config,
            &*self.store,
            &self.hooks,
            client,
            &*self.clock,
        )
        .await?;

        if sign_on {
            self.sessions.set_auth_cookie(id, false).await?;
        }

        self.hooks.registered.notify(&AccountEvent {
            id,
            data,
            screen,
        });
        tracing::info!(account_id = %id, screen = %screen, "Member registered");
        Ok(id)
    }

    /// Derive a unique login name from an email address.
    ///
    /// A registered generator hook may short-circuit with its own name.
    /// Otherwise the email's local part, reduced to the characters the host
    /// accepts in a login, is de-duplicated with a numeric suffix.
    async fn generate_username(&self, email: &str) -> Result<String, AppError> {
        if let Some(custom) = self.hooks.generate_username(email) {
            return Ok(custom);
        }

        let base: String = email
            .split('@')
            .next()
            .unwrap_or_default()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '.' | '-' | '@'))
            .collect();

        let mut candidate = base.clone();
        let mut suffix = 1u32;
        while self.store.username_exists(&candidate).await? {
            candidate = format!("{base}{suffix}");
            suffix += 1;
        }

        Ok(self.hooks.generated_username.apply(candidate))
    }
}
