//! First-login interest gate and the app-wide onboarding fact.

use dioxus::prelude::*;
use interests::{Backend, InterestsFact, OnboardingGate, SelectionMode, StatusFetch};

use crate::auth::use_auth;
use crate::interest_selection::InterestSelectionModal;
use crate::use_config;
use crate::views::ModalOverlay;

/// Whether the signed-in user has selected any interests.
///
/// Provided by [`InterestGate`] to everything it wraps. Other components can
/// read it. Writes come from within this crate: the gate's status check, a
/// successful onboarding submission, and the interests view after it changes
/// the selection. Views that list interests key their fetch on
/// [`OnboardingFact::revision`].
#[derive(Clone, Copy, PartialEq)]
pub struct OnboardingFact {
    state: Signal<InterestsFact>,
}

impl OnboardingFact {
    /// `None` until the server has answered (or for users who are never gated).
    pub fn has_interests(&self) -> Option<bool> {
        self.state.read().has_interests()
    }

    pub fn needs_onboarding(&self) -> bool {
        self.state.read().needs_onboarding()
    }

    /// Advances on every recorded change. Reading it subscribes the caller.
    pub fn revision(&self) -> u64 {
        self.state.read().revision()
    }

    pub(crate) fn record(&mut self, has_interests: bool) {
        self.state.write().record(has_interests);
    }
}

/// Consume the [`OnboardingFact`] from context.
pub fn use_onboarding() -> OnboardingFact {
    use_context::<OnboardingFact>()
}

/// The [`OnboardingFact`], when rendered inside an [`InterestGate`].
pub fn try_use_onboarding() -> Option<OnboardingFact> {
    try_use_context::<OnboardingFact>()
}

/// Wraps the app and overlays the blocking interest prompt for students who
/// have not picked any interests yet.
///
/// The overlay cannot be dismissed: backdrop clicks and cancel are ignored
/// until a submission succeeds. A failed status check never shows it.
#[component]
pub fn InterestGate(children: Element) -> Element {
    let config = use_config();
    let auth = use_auth();
    let mut fact = use_context_provider(|| OnboardingFact {
        state: Signal::new(InterestsFact::default()),
    });
    let mut gate = use_signal(OnboardingGate::new);

    // Re-runs whenever the signed-in user changes
    let status = use_resource(move || async move {
        let state = auth();
        let is_student = state.user.as_ref().is_some_and(|u| u.is_student());
        if state.loading || !is_student {
            return None;
        }
        let fetch = StatusFetch::from_result(api::backend().my_interests_status().await);
        if let Some(has_interests) = fetch.has_interests() {
            fact.record(has_interests);
        }
        Some(fetch)
    });

    let fetch = (*status.read()).clone().flatten().unwrap_or_default();
    let auth_state = auth();
    let show = config.onboarding.enabled && gate().should_show_modal(auth_state.role(), &fetch);

    let on_complete = move |_| {
        gate.write().mark_completed();
        fact.record(true);
        tracing::info!("Interest onboarding completed");
    };

    rsx! {
        {children}
        if show {
            ModalOverlay {
                dismissable: SelectionMode::Onboarding.is_dismissable(),
                on_close: move |_| {},
                InterestSelectionModal {
                    mode: SelectionMode::Onboarding,
                    on_complete: on_complete,
                    on_cancel: move |_| {},
                }
            }
        }
    }
}
