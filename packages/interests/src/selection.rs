//! # Interest selection state machine
//!
//! [`InterestSelection`] backs the selection modal. It owns the in-progress
//! set of ids and the single inline error message; the component only renders
//! it and forwards clicks.
//!
//! [`submit_interests`] drives one submission end to end:
//!
//! 1. [`InterestSelection::begin_submit`] validates (≥1 id) and hands out the ids.
//! 2. [`submit_selection`] performs the mutation for the given [`SelectionMode`].
//! 3. [`InterestSelection::finish_success`] / [`InterestSelection::finish_failure`]
//!    apply the outcome.
//!
//! The state is reached through [`SelectionState`], whose borrows end before
//! each `.await`, so a UI signal can back it.

use crate::backend::{Backend, BackendError};
use crate::models::Interest;

/// Shown when the user submits without picking anything.
pub const EMPTY_SELECTION_ERROR: &str = "Please select at least one interest.";

/// Shown when the server rejects a submission without saying why.
pub const GENERIC_SUBMIT_ERROR: &str = "Failed to save your interests. Please try again.";

/// Bucket for interests without a category.
pub const DEFAULT_CATEGORY: &str = "General";

/// What a submission does on the server, and whether the modal can be closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionMode {
    /// First-login prompt. Adds interests; cannot be dismissed.
    Onboarding,
    /// Editing an existing selection. Replaces interests; can be cancelled.
    Edit,
}

impl SelectionMode {
    pub fn is_dismissable(self) -> bool {
        matches!(self, SelectionMode::Edit)
    }
}

/// Multi-select state for the selection modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterestSelection {
    selected: Vec<String>,
    error: Option<String>,
    submitting: bool,
}

impl InterestSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing selection (edit mode). Duplicates are collapsed.
    pub fn seeded<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for id in ids {
            let id = id.into();
            if !selection.selected.contains(&id) {
                selection.selected.push(id);
            }
        }
        selection
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Add `id` if absent, remove it if present. Clears any error.
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.to_string());
        }
        self.error = None;
    }

    /// Validate and hand out the ids to submit.
    ///
    /// An empty selection sets [`EMPTY_SELECTION_ERROR`] and returns `Err`;
    /// no request must be made in that case.
    pub fn begin_submit(&mut self) -> Result<Vec<String>, String> {
        if self.selected.is_empty() {
            self.error = Some(EMPTY_SELECTION_ERROR.to_string());
            return Err(EMPTY_SELECTION_ERROR.to_string());
        }
        self.error = None;
        self.submitting = true;
        Ok(self.selected.clone())
    }

    /// The server accepted the submission.
    pub fn finish_success(&mut self) {
        self.selected.clear();
        self.error = None;
        self.submitting = false;
    }

    /// The server rejected the submission. The selection is kept for a retry.
    pub fn finish_failure(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.submitting = false;
    }
}

/// Short-lived access to an [`InterestSelection`].
pub trait SelectionState {
    fn update<R>(&mut self, f: impl FnOnce(&mut InterestSelection) -> R) -> R;
}

impl SelectionState for InterestSelection {
    fn update<R>(&mut self, f: impl FnOnce(&mut InterestSelection) -> R) -> R {
        f(self)
    }
}

/// Validate, save and record the outcome of one submission.
///
/// An empty selection sets the validation error and returns without calling
/// `backend`. `Ok` means the server accepted the selection.
pub async fn submit_interests<B, S>(
    backend: &B,
    mode: SelectionMode,
    state: &mut S,
) -> Result<(), String>
where
    B: Backend,
    S: SelectionState,
{
    let ids = state.update(InterestSelection::begin_submit)?;
    match submit_selection(backend, mode, ids).await {
        Ok(()) => {
            state.update(InterestSelection::finish_success);
            Ok(())
        }
        Err(message) => {
            state.update(|selection| selection.finish_failure(message.clone()));
            Err(message)
        }
    }
}

/// Perform the mutation for `mode` and map a failure to a display message.
pub async fn submit_selection<B: Backend>(
    backend: &B,
    mode: SelectionMode,
    interest_ids: Vec<String>,
) -> Result<(), String> {
    let result = match mode {
        SelectionMode::Onboarding => backend.add_my_interests(&interest_ids).await,
        SelectionMode::Edit => backend.replace_my_interests(&interest_ids).await,
    };
    result.map_err(|e| {
        tracing::error!(error = %e, ?mode, count = interest_ids.len(), "Saving interests failed");
        submit_error_message(&e)
    })
}

/// Server-provided message, or [`GENERIC_SUBMIT_ERROR`].
pub fn submit_error_message(error: &BackendError) -> String {
    error
        .user_message()
        .unwrap_or(GENERIC_SUBMIT_ERROR)
        .to_string()
}

/// Interests sharing one category label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: String,
    pub interests: Vec<Interest>,
}

/// Partition by category in first-encounter order, keeping source order
/// within each group. Uncategorized interests go to `default_category`.
pub fn group_by_category(interests: &[Interest], default_category: &str) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for interest in interests {
        let name = interest.category.as_deref().unwrap_or(default_category);
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.interests.push(interest.clone()),
            None => groups.push(CategoryGroup {
                name: name.to_string(),
                interests: vec![interest.clone()],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{OnboardingGate, StatusFetch};
    use crate::memory::MemoryBackend;
    use crate::models::{InterestStatus, Role};
    use crate::normalize::normalize_interests;
    use serde_json::json;

    fn interest(id: &str, name: &str, category: Option<&str>) -> Interest {
        Interest {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            icon: None,
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut selection = InterestSelection::new();
        selection.toggle("a");
        selection.toggle("b");
        assert_eq!(selection.selected(), ["a", "b"]);

        selection.toggle("a");
        assert_eq!(selection.selected(), ["b"]);
        assert!(!selection.is_selected("a"));
    }

    #[test]
    fn test_seeded_collapses_duplicates() {
        let selection = InterestSelection::seeded(["a", "b", "a"]);
        assert_eq!(selection.selected(), ["a", "b"]);
    }

    #[test]
    fn test_toggle_clears_error() {
        let mut selection = InterestSelection::new();
        assert!(selection.begin_submit().is_err());
        assert!(selection.error().is_some());

        selection.toggle("anything");
        assert!(selection.error().is_none());

        // Also when the toggle removes
        selection.finish_failure("boom");
        selection.toggle("anything");
        assert!(selection.error().is_none());
    }

    #[tokio::test]
    async fn test_empty_submit_never_calls_backend() {
        let backend = MemoryBackend::seeded_demo();
        let mut selection = InterestSelection::new();

        let outcome = submit_interests(&backend, SelectionMode::Onboarding, &mut selection).await;
        assert_eq!(outcome, Err(EMPTY_SELECTION_ERROR.to_string()));
        assert_eq!(selection.error(), Some(EMPTY_SELECTION_ERROR));
        assert!(!selection.is_submitting());
        assert_eq!(backend.mutation_count(), 0);

        // Emptied by toggling back off: still no request
        selection.toggle("a");
        selection.toggle("a");
        let outcome = submit_interests(&backend, SelectionMode::Edit, &mut selection).await;
        assert!(outcome.is_err());
        assert_eq!(backend.mutation_count(), 0);
    }

    #[test]
    fn test_grouping_scenario() {
        let catalog = normalize_interests(&json!({
            "interests": [
                {"id": "a", "name": "AI"},
                {"id": "b", "name": "Design", "category": "Arts"}
            ]
        }));
        let groups = group_by_category(&catalog, DEFAULT_CATEGORY);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "General");
        assert_eq!(groups[0].interests[0].name, "AI");
        assert_eq!(groups[1].name, "Arts");
        assert_eq!(groups[1].interests[0].name, "Design");
    }

    #[test]
    fn test_grouping_preserves_order() {
        let catalog = vec![
            interest("1", "Rust", Some("Tech")),
            interest("2", "Painting", Some("Arts")),
            interest("3", "Go", Some("Tech")),
            interest("4", "Chess", None),
        ];
        let groups = group_by_category(&catalog, DEFAULT_CATEGORY);
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Tech", "Arts", "General"]);
        let tech: Vec<_> = groups[0].interests.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(tech, ["1", "3"]);
    }

    #[test]
    fn test_uncategorized_catalog_is_one_group() {
        let catalog = vec![interest("1", "Rust", None), interest("2", "Chess", None)];
        let groups = group_by_category(&catalog, DEFAULT_CATEGORY);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].interests.len(), 2);
    }

    #[tokio::test]
    async fn test_successful_submit_completes_onboarding() {
        let backend = MemoryBackend::seeded_demo();
        let mut gate = OnboardingGate::new();
        let mut selection = InterestSelection::new();
        selection.toggle("a");
        selection.toggle("b");

        let before = StatusFetch::from_result(backend.my_interests_status().await);
        assert!(gate.should_show_modal(Some(&Role::Student), &before));

        submit_interests(&backend, SelectionMode::Onboarding, &mut selection)
            .await
            .unwrap();
        gate.mark_completed();

        assert_eq!(backend.mutation_count(), 1);
        assert!(gate.completed_this_session());
        assert!(selection.selected().is_empty());
        assert!(selection.error().is_none());
        assert!(!selection.is_submitting());

        // Server now agrees, so a fresh gate also stays hidden
        let status = StatusFetch::from_result(backend.my_interests_status().await);
        assert_eq!(status, StatusFetch::Loaded(InterestStatus { has_interests: true, count: 2 }));
        assert!(!OnboardingGate::new().should_show_modal(Some(&Role::Student), &status));
    }

    #[tokio::test]
    async fn test_rejected_submit_keeps_selection() {
        let backend = MemoryBackend::seeded_demo();
        backend.reject_next_mutation(&json!({"data": {"message": "Quota exceeded"}}));

        let mut selection = InterestSelection::new();
        selection.toggle("a");
        selection.toggle("b");

        let outcome = submit_interests(&backend, SelectionMode::Onboarding, &mut selection).await;
        assert_eq!(outcome, Err("Quota exceeded".to_string()));
        assert_eq!(selection.error(), Some("Quota exceeded"));
        assert_eq!(selection.selected(), ["a", "b"]);
        assert!(!selection.is_submitting());
        assert!(!backend.my_interests_status().await.unwrap().has_interests);

        // Retry with the kept selection goes through
        submit_interests(&backend, SelectionMode::Onboarding, &mut selection)
            .await
            .unwrap();
        assert!(backend.my_interests_status().await.unwrap().has_interests);
    }

    #[tokio::test]
    async fn test_rejection_without_message_uses_fallback() {
        let backend = MemoryBackend::seeded_demo();
        backend.reject_next_mutation(&json!({"status": "error"}));

        let message = submit_selection(&backend, SelectionMode::Onboarding, vec!["a".into()])
            .await
            .unwrap_err();
        assert_eq!(message, GENERIC_SUBMIT_ERROR);
    }

    #[tokio::test]
    async fn test_edit_mode_replaces_selection() {
        let backend = MemoryBackend::seeded_demo();
        backend
            .add_my_interests(&["a".to_string(), "b".to_string()])
            .await
            .unwrap();

        let mine = backend.my_interests().await.unwrap();
        let mut selection = InterestSelection::seeded(mine.iter().map(|i| i.id.clone()));
        selection.toggle("a");
        selection.toggle("c");
        submit_interests(&backend, SelectionMode::Edit, &mut selection)
            .await
            .unwrap();

        let ids: Vec<_> = backend
            .my_interests()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn test_only_edit_mode_is_dismissable() {
        assert!(!SelectionMode::Onboarding.is_dismissable());
        assert!(SelectionMode::Edit.is_dismissable());
    }
}
