//! # Domain models for user records and API envelopes
//!
//! Defines the data structures exchanged with the remote user API and held in
//! view state. These types are `Serialize + Deserialize` so they can cross the
//! HTTP boundary without any hand-written decoding.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserRecord`] | A user as the remote API returns it. The `id` is server-assigned and used as the routing key in item URLs. Every field decodes leniently: a missing field becomes the empty string. |
//! | [`UserDraft`] | The editable subset of a record (`name`, `email`, `role`) as held by the form. No identifier. |
//! | [`Envelope`] | The raw response envelope every [`crate::UserApi`] operation returns: the HTTP status plus the decoded body. |
//! | [`Payload`] | The two body shapes the remote API is known to produce: the payload itself, or the payload nested one level under a `data` key. |
//!
//! [`Payload`] exists because the remote API is inconsistent about nesting.
//! Rather than probing optional fields at every call site, the ambiguity is
//! decoded once, deterministically, with the wrapped shape tried first.

use serde::{Deserialize, Serialize};

/// A user record as returned by the remote API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Server-assigned identifier. Document-store backends spell this `_id`.
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl UserRecord {
    /// All field values, in declaration order. The search filter matches
    /// against every one of them.
    pub fn field_values(&self) -> [&str; 4] {
        [&self.id, &self.name, &self.email, &self.role]
    }
}

/// The editable fields of a user, without the identifier.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl UserDraft {
    /// Copy the editable fields out of a full record.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role.clone(),
        }
    }
}

/// Raw response envelope: HTTP status plus decoded body.
#[derive(Clone, Debug, PartialEq)]
pub struct Envelope<T> {
    pub status: u16,
    pub data: T,
}

/// The two tolerated response body shapes.
///
/// `Wrapped` must be tried before `Direct`: a wrapped body is itself a JSON
/// object, which a sufficiently lenient `Direct` target could also accept.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Wrapped { data: T },
    Direct(T),
}

impl<T> Payload<T> {
    pub fn into_inner(self) -> T {
        match self {
            Payload::Wrapped { data } => data,
            Payload::Direct(data) => data,
        }
    }
}
