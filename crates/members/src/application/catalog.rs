//! Field Catalog Builder and Populator
//!
//! Produces the ordered field-descriptor list for a screen from the explicit
//! configuration object, and merges submitted or stored values back into a
//! catalog for re-display. Catalogs are built fresh per request and never
//! cached.

use serde_json::Value;

use crate::application::config::{FieldVisibility, MembersConfig, StrengthPolicy};
use crate::domain::account::{AccountId, AccountRecord};
use crate::domain::field::{
    FIELD_EMAIL, FIELD_EMAIL_CONFIRM, FIELD_FIRST_NAME, FIELD_LAST_NAME, FIELD_LOGIN,
    FIELD_PASSWORD, FIELD_PASSWORD_CONFIRM, FIELD_SIGNIN_BUTTON, FIELD_SIGNIN_LOGIN,
    FIELD_SIGNIN_LOST_PASSWORD, FIELD_SIGNIN_PASSWORD, FIELD_SIGNIN_REMEMBER, FieldDescriptor,
    FieldKind, META_ADDRESS_1, META_ADDRESS_2, META_CITY, META_COUNTRY, META_PHONE, META_STATE,
    META_ZIP,
};
use crate::domain::screen::Screen;
use crate::domain::store::{AccountStore, CountryProvider};
use crate::domain::submitted::SubmittedData;
use crate::hooks::MemberHooks;
use kernel::AppError;

/// Id of the informational password-strength meter field.
pub const FIELD_PASSWORD_METER: &str = "mbr-password-strength-meter";

const PASSWORD_GUIDANCE: &str = "The password must be at least 6 characters in length. \
     Consider adding letters, numbers, and symbols to increase the password strength.";

/// Fixed five-field login catalog.
///
/// Configuration only swaps the identifier field's label and kind: with
/// generated usernames members sign in by email address.
pub fn login_fields(config: &MembersConfig, hooks: &MemberHooks) -> Vec<FieldDescriptor> {
    let (label, kind) = if config.generate_username {
        ("Email Address", FieldKind::Email)
    } else {
        ("Username or Email Address", FieldKind::Text)
    };

    let fields = vec![
        FieldDescriptor::new(FIELD_SIGNIN_LOGIN, label, kind)
            .required()
            .columns(6)
            .last_column(false),
        FieldDescriptor::new(FIELD_SIGNIN_PASSWORD, "Password", FieldKind::Password)
            .required()
            .columns(6),
        FieldDescriptor::new(FIELD_SIGNIN_BUTTON, "Login", FieldKind::Submit)
            .columns(3)
            .last_column(false)
            .value("Login"),
        FieldDescriptor::new(FIELD_SIGNIN_REMEMBER, "Remember me", FieldKind::Checkbox)
            .columns(6)
            .last_column(false),
        FieldDescriptor::new(FIELD_SIGNIN_LOST_PASSWORD, "Lost your password?", FieldKind::Html)
            .columns(3)
            .classes("align-right")
            .description(format!(
                "<a href=\"{}\">Lost your password?</a>",
                config.lost_password_url
            )),
    ];

    hooks.login_fields.apply(fields)
}

/// Ordered field catalog for the registration, checkout, and update screens.
///
/// `current_account` suppresses the identity fields on checkout: a signed-in
/// member buying something does not re-enter username, email, or password.
pub fn account_fields(
    screen: Screen,
    config: &MembersConfig,
    countries: &dyn CountryProvider,
    current_account: Option<AccountId>,
    hooks: &MemberHooks,
) -> Vec<FieldDescriptor> {
    let mut fields = Vec::new();

    let account_known_on_checkout = screen == Screen::Checkout && current_account.is_some();

    if screen != Screen::Update && !account_known_on_checkout {
        let kind = if config.generate_username {
            // Carries the generated value instead of asking for one
            FieldKind::Hidden
        } else {
            FieldKind::Text
        };
        fields.push(FieldDescriptor::new(FIELD_LOGIN, "Username", kind).required());
    }

    if !account_known_on_checkout {
        let confirm_email = *config.email_confirmation.get(screen);
        fields.push(
            FieldDescriptor::new(FIELD_EMAIL, "Email Address", FieldKind::Email)
                .required()
                .columns(if confirm_email { 6 } else { 12 })
                .last_column(!confirm_email)
                .matched_by_if(confirm_email, FIELD_EMAIL_CONFIRM),
        );
        if confirm_email {
            fields.push(
                FieldDescriptor::new(FIELD_EMAIL_CONFIRM, "Confirm Email Address", FieldKind::Email)
                    .required()
                    .columns(6)
                    .must_match(FIELD_EMAIL),
            );
        }

        fields.push(
            FieldDescriptor::new(FIELD_PASSWORD, "Password", FieldKind::Password)
                .required()
                .columns(6)
                .last_column(false)
                .classes("mbr-password")
                .matched_by(FIELD_PASSWORD_CONFIRM),
        );
        fields.push(
            FieldDescriptor::new(FIELD_PASSWORD_CONFIRM, "Confirm Password", FieldKind::Password)
                .required()
                .columns(6)
                .classes("mbr-password-confirm")
                .must_match(FIELD_PASSWORD),
        );

        if let Some(policy) = config.password_strength {
            fields.push(
                FieldDescriptor::new(FIELD_PASSWORD_METER, "Password Strength", FieldKind::Html)
                    .classes("mbr-password-strength-meter")
                    .description(strength_description(policy)),
            );
        }
    }

    let names = *config.names.get(screen);
    if !names.is_hidden() {
        fields.push(
            FieldDescriptor::new(FIELD_FIRST_NAME, "First Name", FieldKind::Text)
                .required_if(names.is_required())
                .columns(6)
                .last_column(false),
        );
        fields.push(
            FieldDescriptor::new(FIELD_LAST_NAME, "Last Name", FieldKind::Text)
                .required_if(names.is_required())
                .columns(6),
        );
    }

    let address = *config.address.get(screen);
    if !address.is_hidden() {
        fields.extend(address_fields(address, countries));
    }

    let phone = *config.phone.get(screen);
    if !phone.is_hidden() {
        fields.push(
            FieldDescriptor::new(META_PHONE, "Phone Number", FieldKind::Text)
                .required_if(phone.is_required())
                .placeholder("(123) 456 - 7890"),
        );
    }

    hooks.fields.apply(fields)
}

fn address_fields(
    visibility: FieldVisibility,
    countries: &dyn CountryProvider,
) -> Vec<FieldDescriptor> {
    let required = visibility.is_required();
    vec![
        FieldDescriptor::new(META_ADDRESS_1, "Street Address", FieldKind::Text)
            .required_if(required)
            .columns(8)
            .last_column(false),
        // The second line is never required, whatever the group setting
        FieldDescriptor::new(META_ADDRESS_2, "\u{a0}", FieldKind::Text)
            .columns(4)
            .placeholder("Apartment, suite, or unit"),
        FieldDescriptor::new(META_CITY, "City", FieldKind::Text)
            .required_if(required)
            .columns(6)
            .last_column(false),
        FieldDescriptor::new(META_STATE, "State", FieldKind::Text)
            .required_if(required)
            .columns(3)
            .last_column(false),
        FieldDescriptor::new(META_ZIP, "Zip Code", FieldKind::Text)
            .required_if(required)
            .columns(3),
        FieldDescriptor::new(META_COUNTRY, "Country", FieldKind::Select)
            .required_if(required)
            .options(countries.countries()),
    ]
}

fn strength_description(policy: StrengthPolicy) -> String {
    let requirement = match policy {
        StrengthPolicy::Strong => "A strong password is required.".to_string(),
        StrengthPolicy::Minimum(strength) => format!(
            "A minimum password strength of {} is required.",
            strength.name()
        ),
    };
    format!("{requirement} {PASSWORD_GUIDANCE}")
}

/// Merge submitted or stored values into a catalog for re-display.
///
/// Password fields are never echoed back. For every other field the
/// submitted value wins; with an account record resolved, absent keys fall
/// back to the same-named account attribute. Pure and idempotent.
pub fn populate(
    fields: &mut [FieldDescriptor],
    data: &SubmittedData,
    account: Option<&AccountRecord>,
) {
    for field in fields.iter_mut() {
        if field.kind == FieldKind::Password {
            continue;
        }
        let name = field.submission_name();
        if let Some(value) = data.get(name) {
            field.value = Some(value.clone());
        } else if let Some(value) = account.and_then(|a| a.attribute(name)) {
            field.value = Some(Value::String(value));
        }
    }
}

/// Build a screen's catalog and fill it with values in one step.
///
/// With an account id the record is resolved from the store, so keys absent
/// from `data` fall back to stored attributes. A `None` account or a missing
/// record populates from the submission alone.
pub async fn populated_account_fields<S>(
    screen: Screen,
    config: &MembersConfig,
    countries: &dyn CountryProvider,
    account: Option<AccountId>,
    data: &SubmittedData,
    store: &S,
    hooks: &MemberHooks,
) -> Result<Vec<FieldDescriptor>, AppError>
where
    S: AccountStore + Sync,
{
    let record = match account {
        Some(id) => store.find_by_id(id).await?,
        None => None,
    };
    let mut fields = account_fields(screen, config, countries, account, hooks);
    populate(&mut fields, data, record.as_ref());
    Ok(fields)
}

impl FieldDescriptor {
    /// Conditional [`FieldDescriptor::matched_by`], for catalog assembly.
    fn matched_by_if(self, condition: bool, other: &str) -> Self {
        if condition { self.matched_by(other) } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::{PasswordStrength, PerScreen};
    use std::collections::BTreeMap;

    fn no_countries() -> Vec<(String, String)> {
        vec![
            ("US".to_string(), "United States".to_string()),
            ("JP".to_string(), "Japan".to_string()),
        ]
    }

    fn ids(fields: &[FieldDescriptor]) -> Vec<&str> {
        fields.iter().map(|f| f.id.as_str()).collect()
    }

    fn find<'a>(fields: &'a [FieldDescriptor], id: &str) -> &'a FieldDescriptor {
        fields.iter().find(|f| f.id == id).unwrap()
    }

    mod login_catalog {
        use super::*;

        #[test]
        fn test_fixed_shape() {
            let config = MembersConfig::default();
            let fields = login_fields(&config, &MemberHooks::default());
            assert_eq!(
                ids(&fields),
                vec![
                    FIELD_SIGNIN_LOGIN,
                    FIELD_SIGNIN_PASSWORD,
                    FIELD_SIGNIN_BUTTON,
                    FIELD_SIGNIN_REMEMBER,
                    FIELD_SIGNIN_LOST_PASSWORD,
                ]
            );
        }

        #[test]
        fn test_identifier_without_generated_usernames() {
            let config = MembersConfig::default();
            let fields = login_fields(&config, &MemberHooks::default());
            let login = find(&fields, FIELD_SIGNIN_LOGIN);
            assert_eq!(login.kind, FieldKind::Text);
            assert_eq!(login.label, "Username or Email Address");
        }

        #[test]
        fn test_identifier_with_generated_usernames() {
            let config = MembersConfig {
                generate_username: true,
                ..Default::default()
            };
            let fields = login_fields(&config, &MemberHooks::default());
            let login = find(&fields, FIELD_SIGNIN_LOGIN);
            assert_eq!(login.kind, FieldKind::Email);
            assert_eq!(login.label, "Email Address");
        }

        #[test]
        fn test_lost_password_link_carries_url() {
            let config = MembersConfig {
                lost_password_url: "/my/reset".to_string(),
                ..Default::default()
            };
            let fields = login_fields(&config, &MemberHooks::default());
            let link = find(&fields, FIELD_SIGNIN_LOST_PASSWORD);
            assert_eq!(link.kind, FieldKind::Html);
            assert!(link.description.as_deref().unwrap().contains("/my/reset"));
        }
    }

    mod account_catalog {
        use super::*;

        #[test]
        fn test_registration_default_shape() {
            let config = MembersConfig::default();
            let fields = account_fields(
                Screen::Registration,
                &config,
                &no_countries,
                None,
                &MemberHooks::default(),
            );
            assert_eq!(
                ids(&fields),
                vec![
                    FIELD_LOGIN,
                    FIELD_EMAIL,
                    FIELD_PASSWORD,
                    FIELD_PASSWORD_CONFIRM,
                    FIELD_FIRST_NAME,
                    FIELD_LAST_NAME,
                ]
            );
        }

        #[test]
        fn test_registration_with_all_groups_visible() {
            let config = MembersConfig {
                address: PerScreen::uniform(FieldVisibility::Optional),
                phone: PerScreen::uniform(FieldVisibility::Optional),
                ..Default::default()
            };
            let fields = account_fields(
                Screen::Registration,
                &config,
                &no_countries,
                None,
                &MemberHooks::default(),
            );
            assert_eq!(
                ids(&fields),
                vec![
                    FIELD_LOGIN,
                    FIELD_EMAIL,
                    FIELD_PASSWORD,
                    FIELD_PASSWORD_CONFIRM,
                    FIELD_FIRST_NAME,
                    FIELD_LAST_NAME,
                    META_ADDRESS_1,
                    META_ADDRESS_2,
                    META_CITY,
                    META_STATE,
                    META_ZIP,
                    META_COUNTRY,
                    META_PHONE,
                ]
            );
        }

        #[test]
        fn test_update_omits_username() {
            let config = MembersConfig::default();
            let fields = account_fields(
                Screen::Update,
                &config,
                &no_countries,
                None,
                &MemberHooks::default(),
            );
            assert!(!ids(&fields).contains(&FIELD_LOGIN));
            // Identity fields still present on update
            assert!(ids(&fields).contains(&FIELD_EMAIL));
            assert!(ids(&fields).contains(&FIELD_PASSWORD));
        }

        #[test]
        fn test_checkout_with_known_account_suppresses_identity_fields() {
            let config = MembersConfig::default();
            let fields = account_fields(
                Screen::Checkout,
                &config,
                &no_countries,
                Some(AccountId::new(3)),
                &MemberHooks::default(),
            );
            let ids = ids(&fields);
            for suppressed in [FIELD_LOGIN, FIELD_EMAIL, FIELD_PASSWORD, FIELD_PASSWORD_CONFIRM] {
                assert!(!ids.contains(&suppressed), "{suppressed} should be gone");
            }
            assert!(ids.contains(&FIELD_FIRST_NAME));
        }

        #[test]
        fn test_checkout_without_account_keeps_identity_fields() {
            let config = MembersConfig::default();
            let fields = account_fields(
                Screen::Checkout,
                &config,
                &no_countries,
                None,
                &MemberHooks::default(),
            );
            assert!(ids(&fields).contains(&FIELD_LOGIN));
            assert!(ids(&fields).contains(&FIELD_EMAIL));
        }

        #[test]
        fn test_generated_usernames_emit_hidden_field() {
            let config = MembersConfig {
                generate_username: true,
                ..Default::default()
            };
            let fields = account_fields(
                Screen::Registration,
                &config,
                &no_countries,
                None,
                &MemberHooks::default(),
            );
            assert_eq!(find(&fields, FIELD_LOGIN).kind, FieldKind::Hidden);
        }

        #[test]
        fn test_email_without_confirmation_is_full_width() {
            let config = MembersConfig::default();
            let fields = account_fields(
                Screen::Registration,
                &config,
                &no_countries,
                None,
                &MemberHooks::default(),
            );
            let email = find(&fields, FIELD_EMAIL);
            assert_eq!(email.columns, 12);
            assert!(email.last_column);
            assert!(email.matched.is_none());
            assert!(!ids(&fields).contains(&FIELD_EMAIL_CONFIRM));
        }

        #[test]
        fn test_email_confirmation_splits_columns_and_links_match() {
            let config = MembersConfig {
                email_confirmation: PerScreen::uniform(true),
                ..Default::default()
            };
            let fields = account_fields(
                Screen::Registration,
                &config,
                &no_countries,
                None,
                &MemberHooks::default(),
            );
            let email = find(&fields, FIELD_EMAIL);
            assert_eq!(email.columns, 6);
            assert!(!email.last_column);
            assert_eq!(email.matched.as_deref(), Some(FIELD_EMAIL_CONFIRM));

            let confirm = find(&fields, FIELD_EMAIL_CONFIRM);
            assert_eq!(confirm.columns, 6);
            assert!(confirm.last_column);
            assert_eq!(confirm.match_field.as_deref(), Some(FIELD_EMAIL));
        }

        #[test]
        fn test_password_pair_is_linked() {
            let config = MembersConfig::default();
            let fields = account_fields(
                Screen::Registration,
                &config,
                &no_countries,
                None,
                &MemberHooks::default(),
            );
            assert_eq!(
                find(&fields, FIELD_PASSWORD).matched.as_deref(),
                Some(FIELD_PASSWORD_CONFIRM)
            );
            assert_eq!(
                find(&fields, FIELD_PASSWORD_CONFIRM).match_field.as_deref(),
                Some(FIELD_PASSWORD)
            );
        }

        #[test]
        fn test_strength_meter_strong_policy() {
            let config = MembersConfig {
                password_strength: Some(StrengthPolicy::Strong),
                ..Default::default()
            };
            let fields = account_fields(
                Screen::Registration,
                &config,
                &no_countries,
                None,
                &MemberHooks::default(),
            );
            let meter = find(&fields, FIELD_PASSWORD_METER);
            assert_eq!(meter.kind, FieldKind::Html);
            assert!(
                meter
                    .description
                    .as_deref()
                    .unwrap()
                    .starts_with("A strong password is required.")
            );
        }

        #[test]
        fn test_strength_meter_graduated_policy() {
            let config = MembersConfig {
                password_strength: Some(StrengthPolicy::Minimum(PasswordStrength::Medium)),
                ..Default::default()
            };
            let fields = account_fields(
                Screen::Registration,
                &config,
                &no_countries,
                None,
                &MemberHooks::default(),
            );
            let meter = find(&fields, FIELD_PASSWORD_METER);
            assert!(
                meter
                    .description
                    .as_deref()
                    .unwrap()
                    .contains("minimum password strength of medium")
            );
        }

        #[test]
        fn test_hidden_groups_are_omitted() {
            let config = MembersConfig {
                names: PerScreen::uniform(FieldVisibility::Hidden),
                address: PerScreen::uniform(FieldVisibility::Hidden),
                phone: PerScreen::uniform(FieldVisibility::Hidden),
                ..Default::default()
            };
            let fields = account_fields(
                Screen::Registration,
                &config,
                &no_countries,
                None,
                &MemberHooks::default(),
            );
            assert_eq!(
                ids(&fields),
                vec![FIELD_LOGIN, FIELD_EMAIL, FIELD_PASSWORD, FIELD_PASSWORD_CONFIRM]
            );
        }

        #[test]
        fn test_required_groups() {
            let config = MembersConfig {
                address: PerScreen::uniform(FieldVisibility::Required),
                phone: PerScreen::uniform(FieldVisibility::Required),
                ..Default::default()
            };
            let fields = account_fields(
                Screen::Registration,
                &config,
                &no_countries,
                None,
                &MemberHooks::default(),
            );
            assert!(find(&fields, META_ADDRESS_1).required);
            // The apartment line never becomes required
            assert!(!find(&fields, META_ADDRESS_2).required);
            assert!(find(&fields, META_COUNTRY).required);
            assert!(find(&fields, META_PHONE).required);
        }

        #[test]
        fn test_country_options_come_from_provider() {
            let config = MembersConfig {
                address: PerScreen::uniform(FieldVisibility::Optional),
                ..Default::default()
            };
            let fields = account_fields(
                Screen::Registration,
                &config,
                &no_countries,
                None,
                &MemberHooks::default(),
            );
            let country = find(&fields, META_COUNTRY);
            assert_eq!(country.kind, FieldKind::Select);
            assert!(country.has_option("JP"));
        }

        #[test]
        fn test_fields_hook_can_reshape_catalog() {
            let mut hooks = MemberHooks::default();
            hooks.fields.add(|mut fields| {
                fields.retain(|f| f.id != FIELD_LAST_NAME);
                fields.push(FieldDescriptor::new("favorite_color", "Favorite Color", FieldKind::Text));
                fields
            });
            let config = MembersConfig::default();
            let fields = account_fields(Screen::Registration, &config, &no_countries, None, &hooks);
            let ids = ids(&fields);
            assert!(!ids.contains(&FIELD_LAST_NAME));
            assert_eq!(*ids.last().unwrap(), "favorite_color");
        }
    }

    mod populator {
        use super::*;

        fn account() -> AccountRecord {
            AccountRecord {
                id: AccountId::new(9),
                login: "alice".to_string(),
                email: "alice@example.com".to_string(),
                first_name: Some("Alice".to_string()),
                last_name: Some("Smith".to_string()),
                attributes: BTreeMap::from([(
                    META_CITY.to_string(),
                    "Osaka".to_string(),
                )]),
            }
        }

        #[test]
        fn test_never_populates_password_fields() {
            let config = MembersConfig::default();
            let mut fields = account_fields(
                Screen::Registration,
                &config,
                &no_countries,
                None,
                &MemberHooks::default(),
            );
            let data: SubmittedData = [
                (FIELD_PASSWORD, "Secret123"),
                (FIELD_PASSWORD_CONFIRM, "Secret123"),
                (FIELD_FIRST_NAME, "Alice"),
            ]
            .into_iter()
            .collect();
            populate(&mut fields, &data, None);

            assert!(find(&fields, FIELD_PASSWORD).value.is_none());
            assert!(find(&fields, FIELD_PASSWORD_CONFIRM).value.is_none());
            assert_eq!(
                find(&fields, FIELD_FIRST_NAME).value,
                Some(Value::String("Alice".to_string()))
            );
        }

        #[test]
        fn test_submitted_value_wins_over_account() {
            let config = MembersConfig {
                address: PerScreen::uniform(FieldVisibility::Optional),
                ..Default::default()
            };
            let mut fields = account_fields(
                Screen::Update,
                &config,
                &no_countries,
                None,
                &MemberHooks::default(),
            );
            let data: SubmittedData = [(FIELD_FIRST_NAME, "Alicia")].into_iter().collect();
            populate(&mut fields, &data, Some(&account()));

            assert_eq!(
                find(&fields, FIELD_FIRST_NAME).value,
                Some(Value::String("Alicia".to_string()))
            );
            // Absent from data, resolved from the account record
            assert_eq!(
                find(&fields, FIELD_LAST_NAME).value,
                Some(Value::String("Smith".to_string()))
            );
            assert_eq!(
                find(&fields, META_CITY).value,
                Some(Value::String("Osaka".to_string()))
            );
        }

        #[tokio::test]
        async fn test_populated_catalog_resolves_account_from_store() {
            use crate::infra::memory::InMemoryStore;

            let store = InMemoryStore::new();
            let id = store.seed_account("alice", "alice@example.com", "Secret123");
            store.record_attribute(id, META_CITY, "Osaka").await.unwrap();

            let config = MembersConfig {
                address: PerScreen::uniform(FieldVisibility::Optional),
                ..Default::default()
            };
            let data: SubmittedData = [(FIELD_FIRST_NAME, "Alicia")].into_iter().collect();
            let fields = populated_account_fields(
                Screen::Update,
                &config,
                &no_countries,
                Some(id),
                &data,
                &store,
                &MemberHooks::default(),
            )
            .await
            .unwrap();

            assert_eq!(
                find(&fields, FIELD_FIRST_NAME).value,
                Some(Value::String("Alicia".to_string()))
            );
            // Resolved from the stored account, not the submission
            assert_eq!(
                find(&fields, META_CITY).value,
                Some(Value::String("Osaka".to_string()))
            );
        }

        #[tokio::test]
        async fn test_populated_catalog_without_account_uses_submission_only() {
            use crate::infra::memory::InMemoryStore;

            let store = InMemoryStore::new();
            let data: SubmittedData = [(FIELD_FIRST_NAME, "Alice")].into_iter().collect();
            let fields = populated_account_fields(
                Screen::Registration,
                &MembersConfig::default(),
                &no_countries,
                None,
                &data,
                &store,
                &MemberHooks::default(),
            )
            .await
            .unwrap();

            assert_eq!(
                find(&fields, FIELD_FIRST_NAME).value,
                Some(Value::String("Alice".to_string()))
            );
            assert!(find(&fields, FIELD_LAST_NAME).value.is_none());
        }

        #[test]
        fn test_idempotent() {
            let config = MembersConfig {
                address: PerScreen::uniform(FieldVisibility::Optional),
                ..Default::default()
            };
            let mut fields = account_fields(
                Screen::Update,
                &config,
                &no_countries,
                None,
                &MemberHooks::default(),
            );
            let data: SubmittedData = [(FIELD_FIRST_NAME, "Alice")].into_iter().collect();
            populate(&mut fields, &data, Some(&account()));
            let once = fields.clone();
            populate(&mut fields, &data, Some(&account()));
            assert_eq!(
                once.iter().map(|f| f.value.clone()).collect::<Vec<_>>(),
                fields.iter().map(|f| f.value.clone()).collect::<Vec<_>>()
            );
        }
    }
}
