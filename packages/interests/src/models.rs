//! # Domain models for interests and users
//!
//! The backend is inconsistent about field names, so every entity has two
//! representations:
//!
//! | Raw type | Canonical type | Notes |
//! |----------|----------------|-------|
//! | [`RawInterest`] | [`Interest`] | id from `id` / `_id` / `interestId`, name from `name` / `interestName` |
//! | [`RawUser`] | [`UserInfo`] | id from `id` / `_id`, role parsed into [`Role`] |
//!
//! Raw types only exist at the ingest boundary ([`crate::normalize`]). Everything
//! past that boundary works with the canonical types, which serialize back to
//! the plain `id` / `name` form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A selectable interest from the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Emoji or short label shown next to the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Grouping label; absent means the default bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// An interest record exactly as the backend sent it.
///
/// Each id/name variant is its own field: the backend sometimes sends both
/// `id` and `_id`, which a serde alias would reject as a duplicate.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawInterest {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<Value>,
    #[serde(default, rename = "interestId")]
    pub interest_id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default, rename = "interestName")]
    pub interest_name: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub icon: Option<Value>,
    /// A plain label, or a populated category object carrying `name`.
    #[serde(default)]
    pub category: Option<Value>,
}

impl RawInterest {
    /// First usable identifier, checked in `id`, `_id`, `interestId` order.
    pub fn resolved_id(&self) -> Option<String> {
        [&self.id, &self.mongo_id, &self.interest_id]
            .into_iter()
            .flatten()
            .find_map(key_from_value)
    }

    /// First non-blank display name, `name` before `interestName`.
    pub fn resolved_name(&self) -> Option<String> {
        [&self.name, &self.interest_name]
            .into_iter()
            .flatten()
            .find_map(text_from_value)
    }

    /// Convert to the canonical form. Returns `None` for records that lack
    /// either an identifier or a display name.
    pub fn into_interest(self) -> Option<Interest> {
        let id = self.resolved_id()?;
        let name = self.resolved_name()?;
        Some(Interest {
            id,
            name,
            description: self.description.as_ref().and_then(text_from_value),
            icon: self.icon.as_ref().and_then(text_from_value),
            category: self.category.as_ref().and_then(label_from_value),
        })
    }
}

/// Result of the lightweight "has the user picked anything" check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestStatus {
    pub has_interests: bool,
    #[serde(default)]
    pub count: u32,
}

/// Role tag carried by the current user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Student,
    Admin,
    Other(String),
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "student" => Role::Student,
            "admin" => Role::Admin,
            _ => Role::Other(tag),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Student => "student".to_string(),
            Role::Admin => "admin".to_string(),
            Role::Other(tag) => tag,
        }
    }
}

/// The signed-in user, as far as the client cares.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub role: Role,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }
}

/// A user record exactly as `auth/me` sent it.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawUser {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub role: Option<Value>,
}

impl RawUser {
    pub fn into_user(self) -> Option<UserInfo> {
        let id = [&self.id, &self.mongo_id]
            .into_iter()
            .flatten()
            .find_map(key_from_value)?;
        Some(UserInfo {
            id,
            name: self.name.as_ref().and_then(text_from_value),
            email: self.email.as_ref().and_then(text_from_value).unwrap_or_default(),
            role: Role::from(self.role.as_ref().and_then(text_from_value).unwrap_or_default()),
        })
    }
}

fn key_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_blank(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Non-blank string content; any other JSON shape is treated as absent.
fn text_from_value(value: &Value) -> Option<String> {
    value.as_str().and_then(non_blank)
}

/// A label given either directly or as a populated object's `name`.
fn label_from_value(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => map.get("name").and_then(text_from_value),
        other => text_from_value(other),
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawInterest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_id_variants_resolve() {
        assert_eq!(raw(json!({"id": "a"})).resolved_id().as_deref(), Some("a"));
        assert_eq!(raw(json!({"_id": "b"})).resolved_id().as_deref(), Some("b"));
        assert_eq!(
            raw(json!({"interestId": 42})).resolved_id().as_deref(),
            Some("42")
        );
        // `id` wins when several are present
        assert_eq!(
            raw(json!({"id": "a", "_id": "b"})).resolved_id().as_deref(),
            Some("a")
        );
        // Blank `id` falls through to the next variant
        assert_eq!(
            raw(json!({"id": " ", "_id": "b"})).resolved_id().as_deref(),
            Some("b")
        );
    }

    #[test]
    fn test_name_variants_resolve() {
        let interest = raw(json!({"_id": "x", "interestName": "Robotics"}))
            .into_interest()
            .unwrap();
        assert_eq!(interest.id, "x");
        assert_eq!(interest.name, "Robotics");
    }

    #[test]
    fn test_incomplete_records_are_rejected() {
        assert!(raw(json!({"name": "No id"})).into_interest().is_none());
        assert!(raw(json!({"id": "no-name"})).into_interest().is_none());
        assert!(raw(json!({})).into_interest().is_none());
    }

    #[test]
    fn test_blank_optional_fields_are_dropped() {
        let interest = raw(json!({"id": "a", "name": "AI", "category": "", "icon": "🤖"}))
            .into_interest()
            .unwrap();
        assert!(interest.category.is_none());
        assert_eq!(interest.icon.as_deref(), Some("🤖"));
    }

    #[test]
    fn test_populated_category_uses_its_name() {
        let interest = raw(json!({
            "_id": "a",
            "name": "AI",
            "category": {"_id": "c1", "name": "Tech"}
        }))
        .into_interest()
        .unwrap();
        assert_eq!(interest.category.as_deref(), Some("Tech"));

        let nameless = raw(json!({"_id": "a", "name": "AI", "category": {"_id": "c1"}}))
            .into_interest()
            .unwrap();
        assert!(nameless.category.is_none());
    }

    #[test]
    fn test_odd_optional_fields_are_absent() {
        let interest = raw(json!({
            "id": "b",
            "name": "Design",
            "icon": 7,
            "description": ["not", "text"],
            "category": false
        }))
        .into_interest()
        .unwrap();
        assert_eq!(interest.name, "Design");
        assert!(interest.icon.is_none());
        assert!(interest.description.is_none());
        assert!(interest.category.is_none());

        // A non-string name is unresolvable, so the record is incomplete
        assert!(raw(json!({"id": "c", "name": 12})).into_interest().is_none());
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!(Role::from("Student".to_string()), Role::Student);
        assert_eq!(Role::from("ADMIN".to_string()), Role::Admin);
        assert_eq!(
            Role::from("mentor".to_string()),
            Role::Other("mentor".to_string())
        );
    }

    #[test]
    fn test_raw_user_conversion() {
        let raw: RawUser = serde_json::from_value(json!({
            "_id": "u1",
            "email": "jane@bitsa.test",
            "role": "student"
        }))
        .unwrap();
        let user = raw.into_user().unwrap();
        assert_eq!(user.id, "u1");
        assert!(user.is_student());
        assert_eq!(user.display_name(), "jane@bitsa.test");
    }
}
