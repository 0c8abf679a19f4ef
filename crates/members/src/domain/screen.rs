//! Screen Value Object
//!
//! The four form screens the module builds catalogs for. Field shape per
//! screen is fixed; configuration only toggles optional groups on or off.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Form screen a catalog is built for.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Sign-in form (fixed five-field catalog)
    #[display("login")]
    Login,
    /// Stand-alone registration form
    #[display("registration")]
    Registration,
    /// Registration embedded in checkout
    #[display("checkout")]
    Checkout,
    /// Profile update form
    #[display("update")]
    Update,
}

impl Screen {
    /// Lowercase name, as used in configuration keys.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Registration => "registration",
            Screen::Checkout => "checkout",
            Screen::Update => "update",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_as_str() {
        for screen in [
            Screen::Login,
            Screen::Registration,
            Screen::Checkout,
            Screen::Update,
        ] {
            assert_eq!(screen.to_string(), screen.as_str());
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Screen::Checkout).unwrap();
        assert_eq!(json, "\"checkout\"");
        let back: Screen = serde_json::from_str("\"update\"").unwrap();
        assert_eq!(back, Screen::Update);
    }
}
