//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;
use interests::BitsaConfig;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod config;
pub use config::{load_config, load_token};

pub mod views;

pub const INTERESTS_CSS: Asset = asset!("/assets/interests.css");

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

mod onboarding;
pub use onboarding::{try_use_onboarding, use_onboarding, InterestGate, OnboardingFact};

mod interest_selection;
pub use interest_selection::InterestSelectionModal;

mod user_interests;
pub use user_interests::UserInterests;

/// Configuration provided at launch, or the defaults when none was.
pub fn use_config() -> BitsaConfig {
    try_use_context::<BitsaConfig>().unwrap_or_default()
}

/// Load configuration and initialize the shared backend. Returns the config
/// so the platform shell can hand it to the launcher as context.
pub fn init_backend() -> BitsaConfig {
    let config = load_config();
    api::init(&config, load_token(&config));
    config
}
