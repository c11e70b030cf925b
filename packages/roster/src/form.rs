//! Form state for the create/edit flow.

use serde_json::Value;

use crate::directory::{Directory, UserApi};
use crate::error::ApiError;
use crate::models::{Envelope, UserDraft};

/// Draft field values plus the edit target, owned by the root view.
///
/// `edit_target = None` means the form creates a new user on submit;
/// `Some(id)` means it replaces the record with that identifier.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub draft: UserDraft,
    pub edit_target: Option<String>,
    pub visible: bool,
}

impl FormState {
    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// Flip between hidden and a blank create form. While an edit is in
    /// progress this acts as cancel: leaving the edit target behind would
    /// silently turn the next blank form into an update.
    pub fn toggle(&mut self) {
        if self.visible {
            self.clear();
        } else {
            self.visible = true;
        }
    }

    /// Reset to the hidden state: empty draft, no edit target.
    pub fn clear(&mut self) {
        self.draft = UserDraft::default();
        self.edit_target = None;
        self.visible = false;
    }

    /// Fetch the record and open the form pre-filled for editing. On error
    /// the state is left untouched.
    pub async fn begin_edit<A: UserApi>(
        &mut self,
        directory: &Directory<A>,
        id: &str,
    ) -> Result<(), ApiError> {
        let draft = directory.fetch_draft(id).await?;
        self.draft = draft;
        self.edit_target = Some(id.to_string());
        self.visible = true;
        Ok(())
    }

    /// Submit the draft: update when an edit target is set, create
    /// otherwise. The form is reset before returning, whatever the outcome.
    pub async fn submit<A: UserApi>(
        &mut self,
        directory: &mut Directory<A>,
    ) -> Result<Envelope<Value>, ApiError> {
        let result = match self.edit_target.clone() {
            Some(id) => directory.update(&id, &self.draft).await,
            None => directory.create(&self.draft).await,
        };
        self.clear();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_blank_create_form() {
        let mut form = FormState::default();
        assert!(!form.visible);

        form.toggle();
        assert!(form.visible);
        assert!(!form.is_editing());
        assert_eq!(form.draft, UserDraft::default());

        form.toggle();
        assert!(!form.visible);
    }

    #[test]
    fn toggle_during_edit_cancels() {
        let mut form = FormState {
            draft: UserDraft {
                name: "Ann".into(),
                ..UserDraft::default()
            },
            edit_target: Some("7".into()),
            visible: true,
        };

        form.toggle();
        assert!(!form.visible);
        assert!(form.edit_target.is_none());
        assert_eq!(form.draft, UserDraft::default());
    }

    #[test]
    fn clear_resets_everything() {
        let mut form = FormState {
            draft: UserDraft {
                name: "Ann".into(),
                email: "a@x.com".into(),
                role: "admin".into(),
            },
            edit_target: Some("7".into()),
            visible: true,
        };

        form.clear();
        assert_eq!(form, FormState::default());
    }
}
