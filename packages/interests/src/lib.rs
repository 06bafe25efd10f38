pub mod backend;
pub mod config;
pub mod gate;
pub mod models;
pub mod normalize;
pub mod selection;

mod memory;
pub use memory::MemoryBackend;

pub use backend::{Backend, BackendError};
pub use config::BitsaConfig;
pub use gate::{InterestsFact, OnboardingGate, StatusFetch};
pub use models::{Interest, InterestStatus, Role, UserInfo};
pub use selection::{
    group_by_category, submit_interests, CategoryGroup, InterestSelection, SelectionMode,
    SelectionState,
};
