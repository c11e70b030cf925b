//! This crate contains all shared UI for the workspace.

use api::ApiClient;
use roster::Directory;

mod button;
pub use button::{Button, ButtonVariant};

mod header;
pub use header::Header;

mod user_form;
pub use user_form::UserForm;

mod user_table;
pub use user_table::UserTable;

pub mod views;

/// Build the directory controller against the compiled-in backend.
pub fn make_directory() -> Directory<ApiClient> {
    Directory::new(ApiClient::default())
}
