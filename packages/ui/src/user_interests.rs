use dioxus::prelude::*;
use interests::{Backend, SelectionMode, StatusFetch};

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaPen, FaXmark};
use crate::interest_selection::InterestSelectionModal;
use crate::views::ModalOverlay;
use crate::onboarding::try_use_onboarding;
use crate::{Icon, INTERESTS_CSS};

const REMOVE_FAILED: &str = "Couldn't remove that interest. Please try again.";

/// The signed-in user's interests.
///
/// Records come from the backend already normalized, so entries with
/// unresolvable ids or names never reach this view. Loading, failure and
/// "nothing selected" each render their own state. With `editable`, each
/// entry gets a remove control and the whole set can be edited in a modal.
///
/// Inside an [`InterestGate`](crate::InterestGate) the list follows the
/// onboarding fact, so it reloads when onboarding completes elsewhere.
#[component]
pub fn UserInterests(#[props(default = true)] editable: bool) -> Element {
    let fact = try_use_onboarding();
    // Re-runs whenever the onboarding fact records a change
    let mut mine = use_resource(move || async move {
        let revision = fact.map(|f| f.revision());
        tracing::debug!(?revision, "Loading user interests");
        api::backend()
            .my_interests()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to load user interests"))
    });
    let mut editing = use_signal(|| false);
    let mut removing = use_signal(|| Option::<String>::None);
    let mut action_error = use_signal(|| Option::<String>::None);

    // After a change, refresh the shared fact; that re-runs `mine` too
    let refresh = use_callback(move |()| {
        spawn(async move {
            let status = StatusFetch::from_result(api::backend().my_interests_status().await);
            match (fact, status.has_interests()) {
                (Some(mut fact), Some(has_interests)) => fact.record(has_interests),
                _ => mine.restart(),
            }
        });
    });

    let handle_remove = use_callback(move |id: String| {
        spawn(async move {
            removing.set(Some(id.clone()));
            action_error.set(None);
            match api::backend().remove_my_interest(&id).await {
                Ok(()) => refresh.call(()),
                Err(e) => {
                    tracing::error!(error = %e, interest_id = %id, "Removing interest failed");
                    action_error.set(Some(e.user_message().unwrap_or(REMOVE_FAILED).to_string()));
                }
            }
            removing.set(None);
        });
    });

    let current_ids: Vec<String> = match &*mine.read() {
        Some(Ok(list)) => list.iter().map(|i| i.id.clone()).collect(),
        _ => Vec::new(),
    };

    let body = match &*mine.read() {
        None => rsx! {
            p { class: "interest-status", "Loading your interests..." }
        },
        Some(Err(_)) => rsx! {
            div {
                class: "interest-status interest-status--error",
                "We couldn't load your interests. "
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| mine.restart(),
                    "Retry"
                }
            }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            div {
                class: "interest-empty",
                p { "No interests yet." }
                if editable {
                    p { class: "interest-empty-hint", "Pick a few topics to personalize what you see." }
                }
            }
        },
        Some(Ok(list)) => rsx! {
            ul {
                class: "interest-list",
                for interest in list.iter().cloned() {
                    li {
                        key: "{interest.id}",
                        class: "interest-list-item",
                        if let Some(icon) = &interest.icon {
                            span { class: "interest-chip-icon", "{icon}" }
                        }
                        span { class: "interest-chip-name", "{interest.name}" }
                        if let Some(category) = &interest.category {
                            span { class: "interest-list-category", "{category}" }
                        }
                        if editable {
                            Button {
                                variant: ButtonVariant::Ghost,
                                class: "interest-remove",
                                title: "Remove {interest.name}",
                                disabled: removing().as_deref() == Some(interest.id.as_str()),
                                onclick: {
                                    let id = interest.id.clone();
                                    move |_| handle_remove.call(id.clone())
                                },
                                Icon { icon: FaXmark, width: 12, height: 12 }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        document::Stylesheet { href: INTERESTS_CSS }

        section {
            class: "user-interests",
            div {
                class: "user-interests-header",
                h2 { "Your interests" }
                if editable {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| editing.set(true),
                        Icon { icon: FaPen, width: 12, height: 12 }
                        " Edit interests"
                    }
                }
            }

            {body}

            if let Some(error) = action_error() {
                p { class: "interest-error", role: "alert", "{error}" }
            }
        }

        if editing() {
            ModalOverlay {
                dismissable: SelectionMode::Edit.is_dismissable(),
                on_close: move |_| editing.set(false),
                InterestSelectionModal {
                    mode: SelectionMode::Edit,
                    initial: current_ids,
                    on_complete: move |_| {
                        editing.set(false);
                        refresh.call(());
                    },
                    on_cancel: move |_| editing.set(false),
                }
            }
        }
    }
}
