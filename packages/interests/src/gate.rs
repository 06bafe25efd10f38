//! # Onboarding gate
//!
//! Decides whether the blocking interest prompt is shown. The server's
//! `hasInterests` status is the source of truth; the session-local
//! `completed_this_session` flag only bridges the gap between a successful
//! submission and the next status fetch, so the prompt does not flicker back.
//!
//! A failed status fetch never shows the prompt. A transient network error
//! must not lock a student out of the dashboard.

use std::fmt::Display;

use crate::models::{InterestStatus, Role};

/// State of the status check as seen by the gate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusFetch {
    #[default]
    Loading,
    Loaded(InterestStatus),
    Failed,
}

impl StatusFetch {
    /// Fold a fetch result into gate state, logging failures.
    pub fn from_result<E: Display>(result: Result<InterestStatus, E>) -> Self {
        match result {
            Ok(status) => StatusFetch::Loaded(status),
            Err(e) => {
                tracing::warn!(error = %e, "Interest status check failed; not gating");
                StatusFetch::Failed
            }
        }
    }

    /// `Some(has_interests)` once the server has answered.
    pub fn has_interests(&self) -> Option<bool> {
        match self {
            StatusFetch::Loaded(status) => Some(status.has_interests),
            _ => None,
        }
    }
}

/// Session-local gate state, one per mounted gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OnboardingGate {
    completed_this_session: bool,
}

impl OnboardingGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn completed_this_session(&self) -> bool {
        self.completed_this_session
    }

    /// Record a server-acknowledged submission. One-way for the session.
    pub fn mark_completed(&mut self) {
        self.completed_this_session = true;
    }

    /// Whether the blocking selection prompt must be shown.
    pub fn should_show_modal(&self, role: Option<&Role>, status: &StatusFetch) -> bool {
        if role != Some(&Role::Student) || self.completed_this_session {
            return false;
        }
        matches!(
            status,
            StatusFetch::Loaded(InterestStatus {
                has_interests: false,
                ..
            })
        )
    }
}

/// App-wide knowledge of whether the user has any interests.
///
/// `revision` advances on every [`InterestsFact::record`], including when the
/// answer itself is unchanged, so views keyed on it re-query after each
/// change to the user's interests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterestsFact {
    has_interests: Option<bool>,
    revision: u64,
}

impl InterestsFact {
    /// `None` until the server has answered.
    pub fn has_interests(&self) -> Option<bool> {
        self.has_interests
    }

    pub fn needs_onboarding(&self) -> bool {
        self.has_interests == Some(false)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Record a fresh answer: a status check, or a saved change.
    pub fn record(&mut self, has_interests: bool) {
        self.has_interests = Some(has_interests);
        self.revision = self.revision.wrapping_add(1);
    }
}
