/// Transport seam between the client flows and the ingestion/chat backend.
///
/// The flows in [`crate::upload`] and [`crate::chat`] only ever talk to a
/// [`Backend`]. [`HttpBackend`] is the production implementation; tests
/// substitute in-memory doubles.
///
/// # Usage
///
/// ```rust,no_run
/// use pdfchat::api::{Backend, HttpBackend};
/// use pdfchat::config::ClientConfig;
///
/// # async fn example() -> anyhow::Result<()> {
/// let backend = HttpBackend::new(&ClientConfig::from_env()?);
/// let reply = backend.chat("What is on page 3?").await?;
/// # Ok(())
/// # }
/// ```
mod http;

pub use http::HttpBackend;

use crate::types::SelectedFile;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ============================================
// Error Types
// ============================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("{0}")]
    Transport(String),

    /// A response arrived but its body was not the JSON we expected
    #[error("{0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

// ============================================
// Wire Types
// ============================================

#[derive(Serialize)]
pub struct ChatRequest<'a> {
    pub query: &'a str,
}

/// Body of a `/upload` response. Success carries `message`, failure `detail`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UploadBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UploadReply {
    /// Whether the HTTP status was 2xx
    pub success: bool,
    pub status: u16,
    pub body: UploadBody,
}

/// Body of a `/chat` response. The backend may report `error` with a 2xx status.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

// ============================================
// Backend Trait
// ============================================

/// Browser fetch futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait Backend {
    /// POST the file to `/upload` as multipart field `file`.
    ///
    /// Takes the file by value so its bytes move into the request body.
    async fn upload(&self, file: SelectedFile) -> ApiResult<UploadReply>;

    /// POST `{"query": ...}` to `/chat`.
    async fn chat(&self, query: &str) -> ApiResult<ChatReply>;
}
