//! Account Writer
//!
//! Turns a validated submission into store writes: the core create/update
//! request, then the auxiliary attribute records (billing address, phone,
//! client IP, terms-consent timestamp). Auxiliary writes only happen once the
//! core write has succeeded; a failed core write leaves the store untouched
//! beyond whatever the store itself did.

use std::collections::BTreeMap;

use crate::application::config::MembersConfig;
use crate::application::validate::sanitize_text;
use crate::domain::account::AccountId;
use crate::domain::field::{
    AUXILIARY_ATTRIBUTES, FIELD_EMAIL, FIELD_FIRST_NAME, FIELD_LAST_NAME, FIELD_LOGIN,
    FIELD_PASSWORD, META_AGREE_TO_TERMS, META_IP_ADDRESS,
};
use crate::domain::screen::Screen;
use crate::domain::store::{
    AccountStore, Clock, ClientInfo, CreateAccount, UpdateAccount,
};
use crate::domain::submitted::SubmittedData;
use crate::error::MemberResult;
use crate::hooks::{AccountEvent, MemberHooks};

/// Which core write to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Create,
    Update(AccountId),
}

/// Persist a validated submission.
///
/// Returns the written account's id. Store failures come back with the
/// write-failure filter applied and are otherwise unmodified.
pub async fn write_account<S>(
    data: &SubmittedData,
    action: WriteAction,
    screen: Screen,
    config: &MembersConfig,
    store: &S,
    hooks: &MemberHooks,
    client: &ClientInfo,
    clock: &dyn Clock,
) -> MemberResult<AccountId>
where
    S: AccountStore + Sync,
{
    let id = match action {
        WriteAction::Create => {
            let request = hooks.create_account.apply(CreateAccount {
                role: config.registration_role.clone(),
                show_admin_bar: false,
                email: sanitize_text(&data.text_or_empty(FIELD_EMAIL)),
                login: sanitize_text(&data.text_or_empty(FIELD_LOGIN)),
                password: data.text_or_empty(FIELD_PASSWORD),
                first_name: submitted(data, FIELD_FIRST_NAME),
                last_name: submitted(data, FIELD_LAST_NAME),
            });

            match store.create(&request).await {
                Ok(id) => {
                    tracing::info!(account_id = %id, login = %request.login, "Account created");
                    hooks.created.notify(&AccountEvent {
                        id,
                        data: data.clone(),
                        screen,
                    });
                    id
                }
                Err(error) => {
                    tracing::warn!(error = %error, "Account creation failed");
                    return Err(hooks.write_failure.apply(error).into());
                }
            }
        }
        WriteAction::Update(id) => {
            let request = hooks.update_account.apply(UpdateAccount {
                id,
                email: submitted(data, FIELD_EMAIL),
                password: data.text(FIELD_PASSWORD).filter(|p| !p.is_empty()),
                first_name: submitted(data, FIELD_FIRST_NAME),
                last_name: submitted(data, FIELD_LAST_NAME),
            });

            match store.update(&request).await {
                Ok(id) => {
                    tracing::info!(account_id = %id, "Account updated");
                    id
                }
                Err(error) => {
                    tracing::warn!(error = %error, account_id = %id, "Account update failed");
                    return Err(hooks.write_failure.apply(error).into());
                }
            }
        }
    };

    let mut attributes = BTreeMap::new();
    for key in AUXILIARY_ATTRIBUTES {
        if *key == META_IP_ADDRESS {
            // Recorded from the connection, not the submission
            if let Some(ip) = &client.ip {
                attributes.insert(META_IP_ADDRESS.to_string(), ip.clone());
            }
        } else if let Some(value) = data.text(key) {
            attributes.insert(key.to_string(), sanitize_text(&value));
        }
    }
    if data.is_truthy(META_AGREE_TO_TERMS) {
        attributes.insert(
            META_AGREE_TO_TERMS.to_string(),
            clock.now().format("%Y-%m-%d %H:%M:%S").to_string(),
        );
    }

    let mut attributes = hooks.insert_attributes.apply(attributes);

    // Declared attributes first, in catalog order, then anything a filter
    // added.
    for key in AUXILIARY_ATTRIBUTES.iter().chain([&META_AGREE_TO_TERMS]) {
        if let Some(value) = attributes.remove(*key) {
            store.record_attribute(id, key, &value).await?;
        }
    }
    for (key, value) in attributes {
        store.record_attribute(id, &key, &value).await?;
    }

    Ok(id)
}

fn submitted(data: &SubmittedData, key: &str) -> Option<String> {
    data.text(key)
        .map(|v| sanitize_text(&v))
        .filter(|v| !v.is_empty())
}
