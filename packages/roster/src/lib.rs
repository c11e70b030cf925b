pub mod directory;
pub mod form;
pub mod models;
pub mod search;

mod error;
pub use error::ApiError;

mod memory;
pub use memory::MemoryApi;

pub use directory::{create_succeeded, mutation_succeeded, Directory, UserApi};
pub use form::FormState;
pub use models::{Envelope, Payload, UserDraft, UserRecord};
pub use search::filter_users;
