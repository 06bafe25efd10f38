use dioxus::prelude::*;
use interests::{
    group_by_category, submit_interests, Backend, Interest, InterestSelection, SelectionMode,
    SelectionState,
};

use crate::components::{Button, ButtonVariant};
use crate::icons::FaCheck;
use crate::{use_config, Icon, INTERESTS_CSS};

/// Grouped multi-select of the interest catalog.
///
/// In [`SelectionMode::Onboarding`] the selection is added to the user's
/// interests and no cancel control is rendered. In [`SelectionMode::Edit`] the
/// modal starts from `initial` and replaces the user's interests on save.
#[component]
pub fn InterestSelectionModal(
    mode: SelectionMode,
    #[props(default)] initial: Vec<String>,
    on_complete: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let config = use_config();
    let mut selection = use_signal(move || InterestSelection::seeded(initial));

    let catalog = use_resource(|| async move {
        api::backend()
            .interests_catalog()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to load interest catalog"))
    });

    let handle_submit = move |_| {
        if selection.peek().is_submitting() {
            return;
        }
        spawn(async move {
            let mut state = SignalSelection(selection);
            if submit_interests(api::backend(), mode, &mut state).await.is_ok() {
                on_complete.call(());
            }
        });
    };

    let state = selection();
    let count = state.selected().len();
    let title = match mode {
        SelectionMode::Onboarding => "Welcome! What are you interested in?",
        SelectionMode::Edit => "Edit your interests",
    };

    let body = match &*catalog.read() {
        None => rsx! {
            p { class: "interest-status", "Loading interests..." }
        },
        Some(Err(e)) => rsx! {
            p { class: "interest-status interest-status--error",
                "We couldn't load the interest list. Please try again later. ({e})"
            }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "interest-status", "No interests are available yet." }
        },
        Some(Ok(list)) => {
            let groups = group_by_category(list, &config.onboarding.default_category);
            rsx! {
                for group in groups {
                    section {
                        key: "{group.name}",
                        class: "interest-group",
                        h3 { class: "interest-group-title", "{group.name}" }
                        div {
                            class: "interest-grid",
                            for interest in group.interests {
                                InterestChip {
                                    key: "{interest.id}",
                                    selected: state.is_selected(&interest.id),
                                    interest: interest.clone(),
                                    on_toggle: move |id: String| selection.write().toggle(&id),
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        document::Stylesheet { href: INTERESTS_CSS }

        div {
            class: "interest-modal",
            h2 { class: "interest-modal-title", "{title}" }
            p {
                class: "interest-modal-subtitle",
                "Pick at least one topic so we can tailor events, blogs and communities for you."
            }

            div { class: "interest-modal-body", {body} }

            if let Some(error) = state.error() {
                p { class: "interest-error", role: "alert", "{error}" }
            }

            div {
                class: "interest-modal-footer",
                span { class: "interest-count", "{count} selected" }
                div {
                    class: "interest-modal-actions",
                    if mode.is_dismissable() {
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: state.is_submitting(),
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: state.is_submitting(),
                        onclick: handle_submit,
                        if state.is_submitting() { "Saving..." } else { "Save interests" }
                    }
                }
            }
        }
    }
}

/// Selection state living in a component signal.
struct SignalSelection(Signal<InterestSelection>);

impl SelectionState for SignalSelection {
    fn update<R>(&mut self, f: impl FnOnce(&mut InterestSelection) -> R) -> R {
        f(&mut self.0.write())
    }
}

/// One selectable interest.
#[component]
fn InterestChip(interest: Interest, selected: bool, on_toggle: EventHandler<String>) -> Element {
    let id = interest.id.clone();

    rsx! {
        button {
            r#type: "button",
            class: if selected { "interest-chip interest-chip--selected" } else { "interest-chip" },
            "aria-pressed": "{selected}",
            title: interest.description.clone().unwrap_or_default(),
            onclick: move |_| on_toggle.call(id.clone()),
            if let Some(icon) = &interest.icon {
                span { class: "interest-chip-icon", "{icon}" }
            }
            span { class: "interest-chip-name", "{interest.name}" }
            if selected {
                Icon { icon: FaCheck, width: 12, height: 12 }
            }
        }
    }
}
