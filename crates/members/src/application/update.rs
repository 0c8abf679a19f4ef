//! Account Update Use Case
//!
//! Validates an account-edit submission against the update catalog and
//! applies it to an existing account. The target account comes from the
//! submission's `user_id` key, falling back to the session's current account.

use std::sync::Arc;

use crate::application::catalog::{account_fields, populated_account_fields};
use crate::application::config::MembersConfig;
use crate::application::validate::validate;
use crate::application::write::{WriteAction, write_account};
use crate::domain::account::AccountId;
use crate::domain::field::{FIELD_USER_ID, FieldDescriptor};
use crate::domain::screen::Screen;
use crate::domain::store::{AccountStore, Clock, ClientInfo, CountryProvider, SessionManager};
use crate::domain::submitted::SubmittedData;
use crate::error::{MemberError, MemberResult};
use crate::hooks::{AccountEvent, MemberHooks};

pub struct UpdateUseCase<S, M> {
    store: Arc<S>,
    sessions: Arc<M>,
    config: Arc<MembersConfig>,
    hooks: Arc<MemberHooks>,
    countries: Arc<dyn CountryProvider + Send + Sync>,
    clock: Arc<dyn Clock>,
}

impl<S, M> UpdateUseCase<S, M>
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

    /// Apply an account edit, returning the updated account id.
    ///
    /// `screen` selects the catalog the submission is validated against; the
    /// update form uses [`Screen::Update`], while checkout flows editing a
    /// signed-in member pass [`Screen::Checkout`].
    pub async fn execute(
        &self,
        data: SubmittedData,
        screen: Screen,
        client: &ClientInfo,
    ) -> MemberResult<AccountId> {
        self.hooks.before_update.notify(&data);

        // The session's account when the submission names none
        let id = data
            .account_id(FIELD_USER_ID)
            .or_else(|| self.sessions.current_account())
            .ok_or_else(MemberError::missing_user_id)?;

        let data = self.hooks.update_data.apply(data);

        let fields = account_fields(
            screen,
            &self.config,
            &*self.countries,
            Some(id),
            &self.hooks,
        );
        let errors = validate(&data, &fields, &self.config, &*self.store).await?;
        let errors = self.hooks.update_errors.apply(errors);
        if !errors.is_empty() {
            return Err(errors.into());
        }

        self.hooks.after_update_validation.notify(&data);

        let id = write_account(
            &data,
            WriteAction::Update(id),
            screen,
            &self.config,
            &*self.store,
            &self.hooks,
            client,
            &*self.clock,
        )
        .await?;

        self.hooks.updated.notify(&AccountEvent { id, data, screen });
        tracing::info!(account_id = %id, "Member account updated");
        Ok(id)
    }

    /// Build the pre-filled edit form for the submission's target account.
    ///
    /// The target resolves like [`UpdateUseCase::execute`]: the submission's
    /// `user_id` key, then the session's current account. With neither, the
    /// catalog is filled from the submission alone.
    pub async fn form(
        &self,
        data: &SubmittedData,
        screen: Screen,
    ) -> MemberResult<Vec<FieldDescriptor>> {
        let account = data
            .account_id(FIELD_USER_ID)
            .or_else(|| self.sessions.current_account());
        let fields = populated_account_fields(
            screen,
            &self.config,
            &*self.countries,
            account,
            data,
            &*self.store,
            &self.hooks,
        )
        .await?;
        Ok(fields)
    }
}
