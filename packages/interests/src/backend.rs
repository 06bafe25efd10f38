//! # Backend seam
//!
//! Every remote call the onboarding flow makes goes through [`Backend`]. The
//! production implementation is the reqwest client in the `api` crate; tests
//! and the offline demo use [`crate::MemoryBackend`].
//!
//! Implementations return canonical types only. Payload shape handling lives in
//! [`crate::normalize`] and is applied before anything leaves the backend.

use std::future::Future;

use crate::models::{Interest, InterestStatus, UserInfo};

/// Error crossing the backend seam.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request rejected ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl BackendError {
    /// Server-provided message suitable for showing to the user, if any.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            BackendError::Rejected {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }
}

/// Async interface to the interest endpoints and the current-user lookup.
pub trait Backend {
    /// `GET auth/me`. `Ok(None)` when nobody is signed in.
    fn current_user(&self) -> impl Future<Output = Result<Option<UserInfo>, BackendError>>;

    /// Full catalog of selectable interests.
    fn interests_catalog(&self) -> impl Future<Output = Result<Vec<Interest>, BackendError>>;

    /// Lightweight "has the user selected anything" check.
    fn my_interests_status(&self) -> impl Future<Output = Result<InterestStatus, BackendError>>;

    /// The current user's selected interests.
    fn my_interests(&self) -> impl Future<Output = Result<Vec<Interest>, BackendError>>;

    /// Add interests to the current user's selection.
    fn add_my_interests(
        &self,
        interest_ids: &[String],
    ) -> impl Future<Output = Result<(), BackendError>>;

    /// Replace the current user's selection wholesale.
    fn replace_my_interests(
        &self,
        interest_ids: &[String],
    ) -> impl Future<Output = Result<(), BackendError>>;

    /// Remove a single interest from the current user's selection.
    fn remove_my_interest(&self, interest_id: &str)
        -> impl Future<Output = Result<(), BackendError>>;
}
