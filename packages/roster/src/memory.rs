use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::directory::UserApi;
use crate::error::ApiError;
use crate::models::{Envelope, UserDraft, UserRecord};

/// In-memory UserApi for tests and offline demos.
///
/// Counts `list_users` calls and can be forced to answer every operation
/// with a fixed status, which is how the re-fetch rules are exercised.
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    users: Arc<Mutex<Vec<UserRecord>>>,
    next_id: Arc<Mutex<u64>>,
    list_calls: Arc<Mutex<usize>>,
    forced_status: Arc<Mutex<Option<u16>>>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let api = Self::default();
        *api.users.lock().unwrap() = users;
        api
    }

    /// How many times `list_users` has been called.
    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    /// Force every operation to answer with `status`; `None` restores
    /// normal behavior.
    pub fn force_status(&self, status: Option<u16>) {
        *self.forced_status.lock().unwrap() = status;
    }

    fn forced(&self) -> Option<u16> {
        *self.forced_status.lock().unwrap()
    }
}

impl UserApi for MemoryApi {
    async fn list_users(&self) -> Result<Envelope<Vec<UserRecord>>, ApiError> {
        *self.list_calls.lock().unwrap() += 1;
        Ok(Envelope {
            status: self.forced().unwrap_or(200),
            data: self.users.lock().unwrap().clone(),
        })
    }

    async fn get_user(&self, id: &str) -> Result<Envelope<UserRecord>, ApiError> {
        let found = self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned();
        let status = self
            .forced()
            .unwrap_or(if found.is_some() { 200 } else { 404 });
        Ok(Envelope {
            status,
            data: found.unwrap_or_default(),
        })
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<Envelope<Value>, ApiError> {
        if let Some(status) = self.forced() {
            return Ok(Envelope {
                status,
                data: Value::Null,
            });
        }
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            format!("u{}", *next)
        };
        let record = UserRecord {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            role: draft.role.clone(),
        };
        let body = serde_json::to_value(&record).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.users.lock().unwrap().push(record);
        Ok(Envelope {
            status: 201,
            data: body,
        })
    }

    async fn update_user(&self, id: &str, draft: &UserDraft) -> Result<Envelope<Value>, ApiError> {
        if let Some(status) = self.forced() {
            return Ok(Envelope {
                status,
                data: Value::Null,
            });
        }
        let mut users = self.users.lock().unwrap();
        let status = match users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.name = draft.name.clone();
                user.email = draft.email.clone();
                user.role = draft.role.clone();
                200
            }
            None => 404,
        };
        Ok(Envelope {
            status,
            data: Value::Null,
        })
    }

    async fn delete_user(&self, id: &str) -> Result<Envelope<Value>, ApiError> {
        if let Some(status) = self.forced() {
            return Ok(Envelope {
                status,
                data: Value::Null,
            });
        }
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|user| user.id != id);
        let status = if users.len() < before { 204 } else { 404 };
        Ok(Envelope {
            status,
            data: Value::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Directory;
    use crate::form::FormState;

    fn user(id: &str, name: &str, email: &str, role: &str) -> UserRecord {
        UserRecord {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    fn seeded() -> MemoryApi {
        MemoryApi::with_users(vec![
            user("1", "Ann", "a@x.com", "admin"),
            user("2", "Bo", "b@x.com", "user"),
        ])
    }

    #[tokio::test]
    async fn refresh_replaces_the_list() {
        let api = seeded();
        let mut dir = Directory::new(api.clone());
        assert!(dir.users().is_empty());

        dir.refresh().await.unwrap();
        assert_eq!(dir.users().len(), 2);
        assert_eq!(dir.users()[0].name, "Ann");
        assert_eq!(api.list_calls(), 1);
    }

    #[tokio::test]
    async fn create_success_refetches_once() {
        let api = seeded();
        let mut dir = Directory::new(api.clone());
        dir.refresh().await.unwrap();

        let draft = UserDraft {
            name: "Cara".into(),
            email: "c@x.com".into(),
            role: "user".into(),
        };
        let envelope = dir.create(&draft).await.unwrap();
        assert_eq!(envelope.status, 201);
        assert_eq!(api.list_calls(), 2);
        assert_eq!(dir.users().len(), 3);
    }

    #[tokio::test]
    async fn failed_create_skips_refetch() {
        let api = seeded();
        let mut dir = Directory::new(api.clone());
        dir.refresh().await.unwrap();

        api.force_status(Some(500));
        let envelope = dir.create(&UserDraft::default()).await.unwrap();
        assert_eq!(envelope.status, 500);
        assert_eq!(api.list_calls(), 1);
        assert_eq!(dir.users().len(), 2);
    }

    #[tokio::test]
    async fn update_success_refetches_once() {
        let api = seeded();
        let mut dir = Directory::new(api.clone());
        dir.refresh().await.unwrap();

        let draft = UserDraft {
            name: "Ann".into(),
            email: "a@x.com".into(),
            role: "owner".into(),
        };
        let envelope = dir.update("1", &draft).await.unwrap();
        assert_eq!(envelope.status, 200);
        assert_eq!(api.list_calls(), 2);
        assert_eq!(dir.users()[0].role, "owner");
    }

    #[tokio::test]
    async fn delete_refetches_only_on_success() {
        let api = seeded();
        let mut dir = Directory::new(api.clone());
        dir.refresh().await.unwrap();

        let envelope = dir.remove("1").await.unwrap();
        assert_eq!(envelope.status, 204);
        assert_eq!(api.list_calls(), 2);
        assert_eq!(dir.users().len(), 1);

        let envelope = dir.remove("nope").await.unwrap();
        assert_eq!(envelope.status, 404);
        assert_eq!(api.list_calls(), 2);
    }

    #[tokio::test]
    async fn submit_creates_when_no_edit_target() {
        let api = seeded();
        let mut dir = Directory::new(api.clone());
        dir.refresh().await.unwrap();

        let mut form = FormState::default();
        form.toggle();
        form.draft = UserDraft {
            name: "Cara".into(),
            email: "c@x.com".into(),
            role: "user".into(),
        };

        let envelope = form.submit(&mut dir).await.unwrap();
        assert_eq!(envelope.status, 201);
        assert_eq!(api.list_calls(), 2);
        assert!(dir.users().iter().any(|u| u.name == "Cara"));
        assert_eq!(form, FormState::default());
    }

    #[tokio::test]
    async fn submit_updates_the_edit_target() {
        let api = seeded();
        let mut dir = Directory::new(api.clone());
        dir.refresh().await.unwrap();

        let mut form = FormState::default();
        form.begin_edit(&dir, "2").await.unwrap();
        assert!(form.visible);
        assert_eq!(form.edit_target.as_deref(), Some("2"));
        assert_eq!(form.draft.name, "Bo");
        assert_eq!(form.draft.email, "b@x.com");

        form.draft.role = "admin".into();
        let envelope = form.submit(&mut dir).await.unwrap();
        assert_eq!(envelope.status, 200);
        assert_eq!(api.list_calls(), 2);
        let bo = dir.users().iter().find(|u| u.id == "2").unwrap();
        assert_eq!(bo.role, "admin");
        assert_eq!(form, FormState::default());
    }

    #[tokio::test]
    async fn submit_clears_the_form_even_on_failure() {
        let api = seeded();
        let mut dir = Directory::new(api.clone());
        dir.refresh().await.unwrap();

        let mut form = FormState {
            draft: UserDraft {
                name: "Cara".into(),
                ..UserDraft::default()
            },
            edit_target: Some("1".into()),
            visible: true,
        };

        api.force_status(Some(500));
        let envelope = form.submit(&mut dir).await.unwrap();
        assert_eq!(envelope.status, 500);
        assert_eq!(api.list_calls(), 1);
        assert_eq!(form, FormState::default());
    }

    #[tokio::test]
    async fn missing_edit_target_prefills_empty_draft() {
        let api = seeded();
        let dir = Directory::new(api.clone());

        let mut form = FormState::default();
        form.begin_edit(&dir, "nope").await.unwrap();
        assert_eq!(form.draft, UserDraft::default());
        assert_eq!(form.edit_target.as_deref(), Some("nope"));
    }

    #[tokio::test]
    async fn search_is_reapplied_after_refresh() {
        let api = seeded();
        let mut dir = Directory::new(api.clone());
        dir.refresh().await.unwrap();

        dir.search("user");
        assert_eq!(dir.filtered().len(), 1);
        assert_eq!(dir.filtered()[0].name, "Bo");

        let draft = UserDraft {
            name: "Cara".into(),
            email: "c@x.com".into(),
            role: "user".into(),
        };
        dir.create(&draft).await.unwrap();
        assert_eq!(dir.filtered().len(), 2);
        assert!(dir.filtered().iter().any(|u| u.name == "Cara"));
    }

    #[tokio::test]
    async fn empty_query_filters_to_empty() {
        let api = seeded();
        let mut dir = Directory::new(api.clone());
        dir.refresh().await.unwrap();

        dir.search("");
        assert!(dir.filtered().is_empty());
        dir.search("   ");
        assert!(dir.filtered().is_empty());
    }
}
