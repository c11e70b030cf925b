//! # API crate — HTTP client for the remote user service
//!
//! The one network-facing crate of the workspace. [`ApiClient`] implements
//! [`roster::UserApi`] over HTTP against a fixed base URL, so everything
//! above it (the directory controller, the form flow, the views) is written
//! against the trait and never touches `reqwest` directly.
//!
//! The base URL is baked in at compile time ([`DEFAULT_BASE_URL`], overridable
//! with the `ROSTER_API_URL` build environment variable); the web bundle has
//! no runtime environment to read from.

mod client;

pub use client::{default_base_url, ApiClient, DEFAULT_BASE_URL};

pub use roster::{Envelope, UserApi, UserDraft, UserRecord};
