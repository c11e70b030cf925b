//! Client-side text search over the loaded user list.

use crate::models::UserRecord;

/// Filter a user list by a raw query string.
///
/// The query is trimmed and lowercased. An empty query yields an empty
/// result, not the full list — the search view starts blank until something
/// is typed. Otherwise a record matches when any field value contains the
/// query as a lowercase substring. Original order is preserved.
pub fn filter_users(query: &str, users: &[UserRecord]) -> Vec<UserRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    users
        .iter()
        .filter(|user| {
            user.field_values()
                .iter()
                .any(|value| value.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
