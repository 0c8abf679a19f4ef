//! Login Use Case
//!
//! Validates a login submission and hands verified credentials to the host
//! session manager. Every failure past validation collapses into one generic
//! error message so the response never reveals whether the identifier or the
//! password was wrong.

use std::sync::Arc;

use crate::application::catalog::login_fields;
use crate::application::config::MembersConfig;
use crate::application::validate::{sanitize_text, validate};
use crate::domain::account::AccountId;
use crate::domain::field::{FIELD_SIGNIN_LOGIN, FIELD_SIGNIN_PASSWORD, FIELD_SIGNIN_REMEMBER};
use crate::domain::store::{AccountStore, ClientInfo, Credentials, SessionManager};
use crate::domain::submitted::SubmittedData;
use crate::error::{MemberError, MemberResult};
use crate::hooks::MemberHooks;

pub struct LoginUseCase<S, M> {
    store: Arc<S>,
    sessions: Arc<M>,
    config: Arc<MembersConfig>,
    hooks: Arc<MemberHooks>,
}

impl<S, M> LoginUseCase<S, M>
where
    S: AccountStore + Sync,
    M: SessionManager + Sync,
{
    pub fn new(
        store: Arc<S>,
        sessions: Arc<M>,
        config: Arc<MembersConfig>,
        hooks: Arc<MemberHooks>,
    ) -> Self {
        Self {
            store,
            sessions,
            config,
            hooks,
        }
    }

    /// Sign a member in, returning the signed-on account id.
    pub async fn execute(
        &self,
        data: SubmittedData,
        client: &ClientInfo,
    ) -> MemberResult<AccountId> {
        self.hooks.before_login.notify(&data);
        let data = self.hooks.login_data.apply(data);

        let fields = login_fields(&self.config, &self.hooks);
        let errors = validate(&data, &fields, &self.config, &*self.store).await?;
        let errors = self.hooks.login_errors.apply(errors);
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let identifier = sanitize_text(&data.text_or_empty(FIELD_SIGNIN_LOGIN));

        // With generated usernames the form collects an email address; the
        // stored login has to be resolved before sign-on.
        let login = if self.config.generate_username && self.config.resolve_login_from_email {
            match self.store.find_by_email(&identifier).await? {
                Some(record) => record.login,
                None => {
                    tracing::debug!("Login identifier did not resolve to an account");
                    return Err(self.hooks.login_failure.apply(MemberError::Login));
                }
            }
        } else {
            identifier
        };

        let credentials = self.hooks.credentials.apply(Credentials {
            login,
            password: data.text_or_empty(FIELD_SIGNIN_PASSWORD),
            remember: data.is_truthy(FIELD_SIGNIN_REMEMBER),
        });

        match self.sessions.sign_on(&credentials, client.tls).await {
            Ok(id) => {
                tracing::info!(account_id = %id, "Member signed in");
                Ok(id)
            }
            Err(error) => {
                // Swallow the cause; the caller gets the generic message
                tracing::debug!(error = %error, "Sign-on rejected");
                Err(self.hooks.login_failure.apply(MemberError::Login))
            }
        }
    }
}
