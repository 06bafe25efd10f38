use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::{use_auth, use_onboarding, UserInterests};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared dashboard overview.
///
/// Platform packages provide navigation to the interests page via
/// `on_navigate_interests`.
#[component]
pub fn DashboardView(on_navigate_interests: EventHandler<()>) -> Element {
    let auth = use_auth();
    let onboarding = use_onboarding();
    let state = auth();

    if state.loading {
        return rsx! {
            div { class: "view-placeholder", "Loading..." }
        };
    }

    let Some(user) = state.user else {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            div {
                class: "view-placeholder",
                h2 { "You are not signed in" }
                p { "Sign in to BITSA to see your dashboard." }
            }
        };
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "view",
            h1 { class: "view-title", "Welcome back, {user.display_name()}" }

            if onboarding.needs_onboarding() {
                div {
                    class: "onboarding-nudge",
                    p { "Tell us what you're into to get personalized events and communities." }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_navigate_interests.call(()),
                        "Choose interests"
                    }
                }
            }

            if user.is_student() {
                UserInterests { editable: false }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_navigate_interests.call(()),
                    "Manage interests"
                }
            }
        }
    }
}
