//! # API crate — BITSA backend access for every frontend
//!
//! The web and desktop shells never build requests themselves. They call
//! [`backend()`] and use the [`interests::Backend`] trait on the result.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`http`] | [`HttpBackend`]: reqwest client for the REST contracts below |
//! | [`client`] | Process-wide [`AppBackend`] singleton, HTTP or in-memory demo |
//!
//! ## REST contracts (relative to `api.base_url`)
//!
//! | Operation | Request |
//! |-----------|---------|
//! | current user | `GET auth/me` |
//! | catalog | `GET interests` |
//! | status | `GET user-interests/check` |
//! | my interests | `GET user-interests` |
//! | add | `POST user-interests` `{ "interestIds": [...] }` |
//! | replace all | `PUT user-interests` `{ "interestIds": [...] }` |
//! | remove one | `DELETE user-interests/{id}` |
//!
//! Response bodies go through [`interests::normalize`] before they leave this
//! crate, so callers only ever see canonical types.

pub mod client;
pub mod http;

pub use client::{backend, init, AppBackend};
pub use http::HttpBackend;
pub use interests::{Backend, BackendError, Interest, InterestStatus, UserInfo};
