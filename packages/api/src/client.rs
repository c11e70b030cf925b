use roster::{ApiError, Envelope, Payload, UserApi, UserDraft, UserRecord};
use serde_json::Value;

/// Where the user service lives when no override is baked in.
pub const DEFAULT_BASE_URL: &str = "https://roster-api.fly.dev";

/// The base URL compiled into this build. `ROSTER_API_URL` in the build
/// environment overrides [`DEFAULT_BASE_URL`].
pub fn default_base_url() -> &'static str {
    option_env!("ROSTER_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// HTTP implementation of [`UserApi`].
///
/// One shared `reqwest::Client`, no retries, no timeouts: a request either
/// yields a response envelope or a transport error. Non-2xx statuses come
/// back in the envelope for the caller to judge.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(default_base_url())
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Read a mutation response body without assuming a shape: empty bodies
    /// become `Null`, non-JSON bodies are kept as plain strings for logging.
    async fn raw_body(response: reqwest::Response) -> Result<Envelope<Value>, ApiError> {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let data = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        Ok(Envelope { status, data })
    }
}

impl UserApi for ApiClient {
    async fn list_users(&self) -> Result<Envelope<Vec<UserRecord>>, ApiError> {
        let response = self
            .http
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let payload: Payload<Vec<UserRecord>> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let data = payload.into_inner();
        tracing::debug!(status, count = data.len(), "listed users");
        Ok(Envelope { status, data })
    }

    async fn get_user(&self, id: &str) -> Result<Envelope<UserRecord>, ApiError> {
        let response = self
            .http
            .get(self.item_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let payload: Payload<UserRecord> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        tracing::debug!(status, id, "fetched user");
        Ok(Envelope {
            status,
            data: payload.into_inner(),
        })
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<Envelope<Value>, ApiError> {
        let response = self
            .http
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let envelope = Self::raw_body(response).await?;
        tracing::debug!(status = envelope.status, "created user");
        Ok(envelope)
    }

    async fn update_user(&self, id: &str, draft: &UserDraft) -> Result<Envelope<Value>, ApiError> {
        let response = self
            .http
            .put(self.item_url(id))
            .json(draft)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let envelope = Self::raw_body(response).await?;
        tracing::debug!(status = envelope.status, id, "updated user");
        Ok(envelope)
    }

    async fn delete_user(&self, id: &str) -> Result<Envelope<Value>, ApiError> {
        let response = self
            .http
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let envelope = Self::raw_body(response).await?;
        tracing::debug!(status = envelope.status, id, "deleted user");
        Ok(envelope)
    }
}
