//! # Response normalization at the data-access boundary
//!
//! The backend returns interest lists in three shapes:
//!
//! ```json
//! [ {...}, {...} ]
//! { "data": [ {...} ] }
//! { "interests": [ {...} ] }
//! ```
//!
//! [`normalize_records`] reduces all of them to one ordered list; any other
//! shape yields an empty list. [`normalize_interests`] goes one step further and
//! runs each record through [`RawInterest::into_interest`], dropping malformed
//! entries. Both are pure and total, and a bare array of canonical interests
//! normalizes to itself.

use serde_json::Value;

use crate::models::{Interest, InterestStatus, RawInterest, RawUser, UserInfo};

/// Extract the record list from any accepted payload shape.
pub fn normalize_records(payload: &Value) -> &[Value] {
    match payload {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => ["data", "interests"]
            .into_iter()
            .find_map(|key| map.get(key).and_then(Value::as_array))
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    }
}

/// Decode a payload into canonical interests, preserving source order.
pub fn normalize_interests(payload: &Value) -> Vec<Interest> {
    normalize_records(payload)
        .iter()
        .filter_map(|record| {
            let raw = match RawInterest::deserialize_lenient(record) {
                Some(raw) => raw,
                None => {
                    tracing::debug!(?record, "Skipping non-object interest record");
                    return None;
                }
            };
            let interest = raw.into_interest();
            if interest.is_none() {
                tracing::debug!(?record, "Dropping interest record without id or name");
            }
            interest
        })
        .collect()
}

/// Decode the status check, bare or wrapped in `data`.
pub fn normalize_status(payload: &Value) -> Option<InterestStatus> {
    let inner = match payload.get("data") {
        Some(data) if data.is_object() => data,
        _ => payload,
    };
    serde_json::from_value(inner.clone()).ok()
}

/// Decode the current user, bare or wrapped in `data` / `user`.
pub fn normalize_user(payload: &Value) -> Option<UserInfo> {
    let inner = ["data", "user"]
        .into_iter()
        .find_map(|key| payload.get(key).filter(|v| v.is_object()))
        .unwrap_or(payload);
    let raw: RawUser = serde_json::from_value(inner.clone()).ok()?;
    raw.into_user()
}

/// Pull a human-readable message out of an error body.
///
/// Checks `data.message`, `message`, then `error` (when it is a string).
pub fn extract_error_message(payload: &Value) -> Option<String> {
    let candidates = [
        payload.pointer("/data/message"),
        payload.get("message"),
        payload.get("error"),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

impl RawInterest {
    fn deserialize_lenient(record: &Value) -> Option<Self> {
        if !record.is_object() {
            return None;
        }
        serde_json::from_value(record.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Value {
        json!([
            {"id": "a", "name": "AI"},
            {"_id": "b", "name": "Design", "category": "Arts"},
            {"interestId": "c", "interestName": "Chess", "icon": "♟"}
        ])
    }

    #[test]
    fn test_all_shapes_yield_same_list() {
        let bare = normalize_interests(&records());
        let data = normalize_interests(&json!({ "data": records() }));
        let wrapped = normalize_interests(&json!({ "interests": records() }));

        assert_eq!(bare.len(), 3);
        assert_eq!(bare, data);
        assert_eq!(bare, wrapped);
        assert_eq!(
            bare.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_unknown_shapes_are_empty() {
        assert!(normalize_interests(&Value::Null).is_empty());
        assert!(normalize_interests(&json!({})).is_empty());
        assert!(normalize_interests(&json!({ "foo": records() })).is_empty());
        assert!(normalize_interests(&json!("interests")).is_empty());
        assert!(normalize_interests(&json!(17)).is_empty());
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = normalize_interests(&json!({ "interests": records() }));
        let reencoded = serde_json::to_value(&once).unwrap();
        let twice = normalize_interests(&reencoded);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_non_array_data_falls_through_to_interests() {
        let payload = json!({ "data": {"total": 1}, "interests": [{"id": "a", "name": "AI"}] });
        assert_eq!(normalize_interests(&payload).len(), 1);
    }

    #[test]
    fn test_malformed_records_are_dropped() {
        let payload = json!([
            {"id": "a", "name": "AI"},
            {"name": "Nameless id"},
            {"id": "z"},
            "not-an-object",
            null
        ]);
        let interests = normalize_interests(&payload);
        assert_eq!(interests.len(), 1);
        assert_eq!(interests[0].name, "AI");
    }

    #[test]
    fn test_records_with_unusual_optional_fields_survive() {
        let payload = json!({
            "data": [
                {"_id": "a", "name": "AI", "category": {"_id": "c1", "name": "Tech"}},
                {"_id": "b", "name": "Design", "icon": 7},
                {"_id": "c", "name": "Chess"}
            ]
        });
        let interests = normalize_interests(&payload);
        assert_eq!(
            interests.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert_eq!(interests[0].category.as_deref(), Some("Tech"));
        assert!(interests[1].icon.is_none());
    }

    #[test]
    fn test_user_with_unusual_fields() {
        let user = normalize_user(&json!({
            "data": {"_id": 9, "name": {"first": "Jane"}, "email": "jane@bitsa.test", "role": "Student"}
        }))
        .unwrap();
        assert_eq!(user.id, "9");
        assert!(user.name.is_none());
        assert!(user.is_student());
    }

    #[test]
    fn test_status_bare_and_wrapped() {
        let bare = normalize_status(&json!({"hasInterests": true, "count": 3})).unwrap();
        assert!(bare.has_interests);
        assert_eq!(bare.count, 3);

        let wrapped = normalize_status(&json!({"data": {"hasInterests": false}})).unwrap();
        assert!(!wrapped.has_interests);
        assert_eq!(wrapped.count, 0);

        assert!(normalize_status(&json!({"ok": true})).is_none());
    }

    #[test]
    fn test_user_envelopes() {
        let user = json!({"id": "u1", "email": "a@b.c", "role": "admin"});
        assert_eq!(normalize_user(&user).unwrap().id, "u1");
        assert_eq!(normalize_user(&json!({ "data": user.clone() })).unwrap().id, "u1");
        assert_eq!(normalize_user(&json!({ "user": user.clone() })).unwrap().id, "u1");
        assert!(normalize_user(&json!({"email": "a@b.c"})).is_none());
    }

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(&json!({"data": {"message": "Quota exceeded"}})).as_deref(),
            Some("Quota exceeded")
        );
        assert_eq!(
            extract_error_message(&json!({"message": "Nope"})).as_deref(),
            Some("Nope")
        );
        assert_eq!(
            extract_error_message(&json!({"error": "Bad ids"})).as_deref(),
            Some("Bad ids")
        );
        assert!(extract_error_message(&json!({"error": {"code": 5}})).is_none());
        assert!(extract_error_message(&json!({"message": "  "})).is_none());
        assert!(extract_error_message(&Value::Null).is_none());
    }
}
