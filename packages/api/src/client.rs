//! Process-wide backend handle using the OnceLock pattern.

use std::sync::OnceLock;

use interests::{Backend, BackendError, BitsaConfig, Interest, InterestStatus, MemoryBackend, UserInfo};

use crate::http::HttpBackend;

static BACKEND: OnceLock<AppBackend> = OnceLock::new();

/// The backend the application talks to.
#[derive(Clone, Debug)]
pub enum AppBackend {
    Http(HttpBackend),
    /// Seeded in-memory backend (`api.demo = true`).
    Memory(MemoryBackend),
}

impl AppBackend {
    pub fn from_config(config: &BitsaConfig, token: Option<String>) -> Self {
        if config.api.demo {
            AppBackend::Memory(MemoryBackend::seeded_demo())
        } else {
            AppBackend::Http(HttpBackend::new(config.api.base_url.clone()).with_token(token))
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, AppBackend::Memory(_))
    }
}

/// Initialize the shared backend. Call once, before launching the app.
///
/// Later calls keep the first backend and log a warning.
pub fn init(config: &BitsaConfig, token: Option<String>) -> &'static AppBackend {
    let mut fresh = false;
    let backend = BACKEND.get_or_init(|| {
        fresh = true;
        AppBackend::from_config(config, token)
    });
    if fresh {
        match backend {
            AppBackend::Http(http) => {
                tracing::info!(base_url = http.base_url(), "Using BITSA backend")
            }
            AppBackend::Memory(_) => tracing::info!("Using in-memory demo backend"),
        }
    } else {
        tracing::warn!("Backend already initialized; ignoring new configuration");
    }
    backend
}

/// Get the shared backend, falling back to the default configuration.
pub fn backend() -> &'static AppBackend {
    BACKEND.get_or_init(|| AppBackend::from_config(&BitsaConfig::default(), None))
}

impl Backend for AppBackend {
    async fn current_user(&self) -> Result<Option<UserInfo>, BackendError> {
        match self {
            AppBackend::Http(b) => b.current_user().await,
            AppBackend::Memory(b) => b.current_user().await,
        }
    }

    async fn interests_catalog(&self) -> Result<Vec<Interest>, BackendError> {
        match self {
            AppBackend::Http(b) => b.interests_catalog().await,
            AppBackend::Memory(b) => b.interests_catalog().await,
        }
    }

    async fn my_interests_status(&self) -> Result<InterestStatus, BackendError> {
        match self {
            AppBackend::Http(b) => b.my_interests_status().await,
            AppBackend::Memory(b) => b.my_interests_status().await,
        }
    }

    async fn my_interests(&self) -> Result<Vec<Interest>, BackendError> {
        match self {
            AppBackend::Http(b) => b.my_interests().await,
            AppBackend::Memory(b) => b.my_interests().await,
        }
    }

    async fn add_my_interests(&self, interest_ids: &[String]) -> Result<(), BackendError> {
        match self {
            AppBackend::Http(b) => b.add_my_interests(interest_ids).await,
            AppBackend::Memory(b) => b.add_my_interests(interest_ids).await,
        }
    }

    async fn replace_my_interests(&self, interest_ids: &[String]) -> Result<(), BackendError> {
        match self {
            AppBackend::Http(b) => b.replace_my_interests(interest_ids).await,
            AppBackend::Memory(b) => b.replace_my_interests(interest_ids).await,
        }
    }

    async fn remove_my_interest(&self, interest_id: &str) -> Result<(), BackendError> {
        match self {
            AppBackend::Http(b) => b.remove_my_interest(interest_id).await,
            AppBackend::Memory(b) => b.remove_my_interest(interest_id).await,
        }
    }
}
