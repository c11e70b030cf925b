//! # Directory — the user list and its operations over an abstract API
//!
//! This module is the core of the application. [`Directory`] owns the loaded
//! user list, the current search query, and the filtered snapshot derived
//! from it. All reads and writes go through the [`UserApi`] trait, so the
//! same control flow works against the live HTTP backend or an in-memory
//! fake ([`crate::memory`]).
//!
//! ## [`UserApi`] trait
//!
//! An async interface with the five operations of the remote user API:
//!
//! | Operation | Success statuses | Returns |
//! |-----------|------------------|---------|
//! | `list_users` | 200 | [`Envelope`] of the full list, either body shape accepted |
//! | `get_user` | 200 | [`Envelope`] of one record, either body shape accepted |
//! | `create_user` | 200, 201 | [`Envelope`] of the raw body |
//! | `update_user` | 200, 204 | [`Envelope`] of the raw body |
//! | `delete_user` | 200, 204 | [`Envelope`] of the raw body |
//!
//! Mutation bodies stay raw (`serde_json::Value`) because callers only log
//! them; the status is what decides the follow-up.
//!
//! ## Refresh discipline
//!
//! The list is replaced wholesale after every fetch, never patched. Each
//! mutation awaits completion, checks its status against the success set
//! above, and on success issues exactly one [`refresh`](Directory::refresh).
//! The re-fetch therefore always observes the mutation's effect. A refresh
//! also re-applies the stored query, so the filtered snapshot never outlives
//! the list it was derived from.

use serde_json::Value;

use crate::error::ApiError;
use crate::models::{Envelope, UserDraft, UserRecord};
use crate::search::filter_users;

/// Async interface to the remote user API.
pub trait UserApi {
    fn list_users(
        &self,
    ) -> impl std::future::Future<Output = Result<Envelope<Vec<UserRecord>>, ApiError>>;
    fn get_user(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Envelope<UserRecord>, ApiError>>;
    fn create_user(
        &self,
        draft: &UserDraft,
    ) -> impl std::future::Future<Output = Result<Envelope<Value>, ApiError>>;
    fn update_user(
        &self,
        id: &str,
        draft: &UserDraft,
    ) -> impl std::future::Future<Output = Result<Envelope<Value>, ApiError>>;
    fn delete_user(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Envelope<Value>, ApiError>>;
}

/// Whether a create call succeeded.
pub fn create_succeeded(status: u16) -> bool {
    matches!(status, 200 | 201)
}

/// Whether an update or delete call succeeded.
pub fn mutation_succeeded(status: u16) -> bool {
    matches!(status, 200 | 204)
}

/// The loaded user list, backed by a UserApi.
#[derive(Clone, Debug)]
pub struct Directory<A: UserApi> {
    api: A,
    users: Vec<UserRecord>,
    query: String,
    filtered: Vec<UserRecord>,
}

impl<A: UserApi> Directory<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            users: Vec::new(),
            query: String::new(),
            filtered: Vec::new(),
        }
    }

    /// The full list as of the last successful fetch.
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// The filtered list for the current query.
    pub fn filtered(&self) -> &[UserRecord] {
        &self.filtered
    }

    /// Re-fetch the full list and replace it wholesale, then re-apply the
    /// stored query. On error the previous list is left untouched.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let envelope = self.api.list_users().await?;
        self.users = envelope.data;
        self.filtered = filter_users(&self.query, &self.users);
        Ok(())
    }

    /// Store a new query and recompute the filtered list. Synchronous: this
    /// never touches the network.
    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
        self.filtered = filter_users(&self.query, &self.users);
    }

    /// Create a user from a draft. On a recognized success status the list
    /// is re-fetched once before returning.
    pub async fn create(&mut self, draft: &UserDraft) -> Result<Envelope<Value>, ApiError> {
        let envelope = self.api.create_user(draft).await?;
        if create_succeeded(envelope.status) {
            self.refresh().await?;
        }
        Ok(envelope)
    }

    /// Replace the user identified by `id` with the draft. On a recognized
    /// success status the list is re-fetched once before returning.
    pub async fn update(
        &mut self,
        id: &str,
        draft: &UserDraft,
    ) -> Result<Envelope<Value>, ApiError> {
        let envelope = self.api.update_user(id, draft).await?;
        if mutation_succeeded(envelope.status) {
            self.refresh().await?;
        }
        Ok(envelope)
    }

    /// Delete the user identified by `id`. Only a recognized success status
    /// triggers the single re-fetch; the raw envelope is returned either way
    /// so the caller can log it.
    pub async fn remove(&mut self, id: &str) -> Result<Envelope<Value>, ApiError> {
        let envelope = self.api.delete_user(id).await?;
        if mutation_succeeded(envelope.status) {
            self.refresh().await?;
        }
        Ok(envelope)
    }

    /// Fetch one record and coerce it to a draft for editing. Fields the
    /// response omits come back as empty strings.
    pub async fn fetch_draft(&self, id: &str) -> Result<UserDraft, ApiError> {
        let envelope = self.api.get_user(id).await?;
        Ok(UserDraft::from_record(&envelope.data))
    }
}
