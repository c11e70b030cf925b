use thiserror::Error;

/// Errors surfaced by [`crate::UserApi`] implementations.
///
/// A non-success HTTP status is not an error: it travels back in
/// [`crate::Envelope::status`] and is judged by the caller. Only failures
/// that prevent producing an envelope at all land here.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or protocol failure before a usable response was received.
    #[error("transport error: {0}")]
    Transport(String),
    /// The response body matched neither of the tolerated shapes.
    #[error("unexpected response body: {0}")]
    Decode(String),
}
