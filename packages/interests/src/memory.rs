use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

use crate::backend::{Backend, BackendError};
use crate::models::{Interest, InterestStatus, Role, UserInfo};
use crate::normalize::extract_error_message;

/// In-memory Backend for testing and the offline demo mode.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    user: Option<UserInfo>,
    catalog: Vec<Interest>,
    selected: Vec<String>,
    mutations: usize,
    reject_next: Option<BackendError>,
    fail_status: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A signed-in student with a small categorized catalog and no interests.
    pub fn seeded_demo() -> Self {
        let backend = Self::new();
        {
            let mut state = backend.lock();
            state.user = Some(UserInfo {
                id: "demo-student".to_string(),
                name: Some("Demo Student".to_string()),
                email: "student@bitsa.demo".to_string(),
                role: Role::Student,
            });
            state.catalog = vec![
                demo_interest("a", "Artificial Intelligence", "🤖", None),
                demo_interest("b", "UI/UX Design", "🎨", Some("Arts")),
                demo_interest("c", "Competitive Programming", "💻", Some("Tech")),
                demo_interest("d", "Cybersecurity", "🔐", Some("Tech")),
                demo_interest("e", "Photography", "📷", Some("Arts")),
                demo_interest("f", "Entrepreneurship", "🚀", None),
            ];
        }
        backend
    }

    pub fn with_user(self, user: Option<UserInfo>) -> Self {
        self.lock().user = user;
        self
    }

    /// Number of mutations that reached the backend (accepted or rejected).
    pub fn mutation_count(&self) -> usize {
        self.lock().mutations
    }

    /// Reject the next mutation with an error body, as the server would.
    pub fn reject_next_mutation(&self, body: &Value) {
        self.lock().reject_next = Some(BackendError::Rejected {
            status: 400,
            message: extract_error_message(body),
        });
    }

    /// Make every status check fail with a network error.
    pub fn fail_status_checks(&self, fail: bool) {
        self.lock().fail_status = fail;
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // A poisoned lock only means a test panicked mid-update
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn mutate(
        &self,
        apply: impl FnOnce(&mut MemoryState) -> Result<(), BackendError>,
    ) -> Result<(), BackendError> {
        let mut state = self.lock();
        state.mutations += 1;
        if let Some(err) = state.reject_next.take() {
            return Err(err);
        }
        apply(&mut *state)
    }
}

impl MemoryState {
    fn known(&self, id: &str) -> Result<(), BackendError> {
        if self.catalog.iter().any(|i| i.id == id) {
            Ok(())
        } else {
            Err(BackendError::Rejected {
                status: 404,
                message: Some(format!("Interest {id} not found")),
            })
        }
    }
}

impl Backend for MemoryBackend {
    async fn current_user(&self) -> Result<Option<UserInfo>, BackendError> {
        Ok(self.lock().user.clone())
    }

    async fn interests_catalog(&self) -> Result<Vec<Interest>, BackendError> {
        Ok(self.lock().catalog.clone())
    }

    async fn my_interests_status(&self) -> Result<InterestStatus, BackendError> {
        let state = self.lock();
        if state.fail_status {
            return Err(BackendError::Network("status check unavailable".to_string()));
        }
        Ok(InterestStatus {
            has_interests: !state.selected.is_empty(),
            count: state.selected.len() as u32,
        })
    }

    async fn my_interests(&self) -> Result<Vec<Interest>, BackendError> {
        let state = self.lock();
        Ok(state
            .selected
            .iter()
            .filter_map(|id| state.catalog.iter().find(|i| &i.id == id).cloned())
            .collect())
    }

    async fn add_my_interests(&self, interest_ids: &[String]) -> Result<(), BackendError> {
        self.mutate(|state| {
            if interest_ids.is_empty() {
                return Err(BackendError::Rejected {
                    status: 400,
                    message: Some("interestIds must not be empty".to_string()),
                });
            }
            for id in interest_ids {
                state.known(id)?;
            }
            for id in interest_ids {
                if !state.selected.contains(id) {
                    state.selected.push(id.clone());
                }
            }
            Ok(())
        })
    }

    async fn replace_my_interests(&self, interest_ids: &[String]) -> Result<(), BackendError> {
        self.mutate(|state| {
            for id in interest_ids {
                state.known(id)?;
            }
            state.selected.clear();
            for id in interest_ids {
                if !state.selected.contains(id) {
                    state.selected.push(id.clone());
                }
            }
            Ok(())
        })
    }

    async fn remove_my_interest(&self, interest_id: &str) -> Result<(), BackendError> {
        self.mutate(|state| {
            let before = state.selected.len();
            state.selected.retain(|id| id != interest_id);
            if state.selected.len() == before {
                return Err(BackendError::Rejected {
                    status: 404,
                    message: Some("Interest is not in your selection".to_string()),
                });
            }
            Ok(())
        })
    }
}

fn demo_interest(id: &str, name: &str, icon: &str, category: Option<&str>) -> Interest {
    Interest {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        icon: Some(icon.to_string()),
        category: category.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_status_tracks_selection() {
        let backend = MemoryBackend::seeded_demo();

        let status = backend.my_interests_status().await.unwrap();
        assert!(!status.has_interests);
        assert_eq!(status.count, 0);

        backend
            .add_my_interests(&["a".to_string(), "c".to_string()])
            .await
            .unwrap();

        let status = backend.my_interests_status().await.unwrap();
        assert!(status.has_interests);
        assert_eq!(status.count, 2);
    }

    #[tokio::test]
    async fn test_add_is_a_set_union() {
        let backend = MemoryBackend::seeded_demo();
        backend.add_my_interests(&["a".to_string()]).await.unwrap();
        backend
            .add_my_interests(&["a".to_string(), "b".to_string()])
            .await
            .unwrap();

        let mine = backend.my_interests().await.unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(backend.mutation_count(), 2);
    }

    #[tokio::test]
    async fn test_unknown_id_is_rejected() {
        let backend = MemoryBackend::seeded_demo();
        let err = backend
            .add_my_interests(&["nope".to_string()])
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), Some("Interest nope not found"));
        assert!(backend.my_interests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_one() {
        let backend = MemoryBackend::seeded_demo();
        backend
            .add_my_interests(&["a".to_string(), "b".to_string()])
            .await
            .unwrap();

        backend.remove_my_interest("a").await.unwrap();
        let ids: Vec<_> = backend
            .my_interests()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, ["b"]);

        assert!(backend.remove_my_interest("a").await.is_err());
    }

    #[tokio::test]
    async fn test_rejection_is_one_shot() {
        let backend = MemoryBackend::seeded_demo();
        backend.reject_next_mutation(&json!({"message": "Try later"}));

        let err = backend.add_my_interests(&["a".to_string()]).await.unwrap_err();
        assert_eq!(err.user_message(), Some("Try later"));
        assert!(backend.add_my_interests(&["a".to_string()]).await.is_ok());
    }

    #[tokio::test]
    async fn test_signed_out_user() {
        let backend = MemoryBackend::seeded_demo().with_user(None);
        assert!(backend.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failing_status_checks() {
        let backend = MemoryBackend::seeded_demo();
        backend.fail_status_checks(true);
        assert!(matches!(
            backend.my_interests_status().await,
            Err(BackendError::Network(_))
        ));
    }
}
