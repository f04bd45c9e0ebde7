//! Feedback Store Access
//!
//! REST bindings for the feedback store. Every call is a single
//! request/response: no retries, no batching, no caching.

use async_trait::async_trait;
use log::{debug, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;
use crate::model::{FeedbackData, FeedbackId, FeedbackItem};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Feedback not found: {id}")]
    NotFound { id: FeedbackId },
    #[error("Request failed with status code {status}: {message}")]
    Server { status: u16, message: String },
    #[error("Network Error: {0}")]
    Transport(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

/// Operations against the feedback store
#[async_trait(?Send)]
pub trait FeedbackApi {
    async fn create(&self, data: &FeedbackData) -> ApiResult<FeedbackItem>;

    async fn list(&self) -> ApiResult<Vec<FeedbackItem>>;

    async fn get(&self, id: &FeedbackId) -> ApiResult<FeedbackItem>;

    async fn update(&self, id: &FeedbackId, data: &FeedbackData) -> ApiResult<FeedbackItem>;

    async fn delete(&self, id: &FeedbackId) -> ApiResult<()>;
}

// ========================
// Response Shapes
// ========================

#[derive(Deserialize)]
struct ListResponse {
    feedbacks: Vec<FeedbackItem>,
}

/// Single-item responses come either wrapped or bare
#[derive(Deserialize)]
#[serde(untagged)]
enum ItemResponse {
    Wrapped { feedback: FeedbackItem },
    Bare(FeedbackItem),
}

impl ItemResponse {
    fn into_item(self) -> FeedbackItem {
        match self {
            ItemResponse::Wrapped { feedback } => feedback,
            ItemResponse::Bare(item) => item,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Characters escaped in an id path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Message for a non-2xx body: the JSON `message` field if present
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Error for a non-2xx response. `id` marks requests where a 404 means
/// the item does not exist.
fn status_error(status: StatusCode, body: &str, id: Option<&FeedbackId>) -> ApiError {
    match id {
        Some(id) if status == StatusCode::NOT_FOUND => ApiError::NotFound { id: id.clone() },
        _ => ApiError::Server { status: status.as_u16(), message: error_message(body) },
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// HTTP client for the feedback store (fetch-backed in the browser)
#[derive(Debug, Clone)]
pub struct HttpFeedbackApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFeedbackApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client: reqwest::Client::new(), base_url }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn item_url(&self, id: &FeedbackId) -> String {
        format!("{}/{}", self.base_url, encode_segment(id.as_str()))
    }

    /// Check the status and return the body
    async fn read_body(response: reqwest::Response, id: Option<&FeedbackId>) -> ApiResult<String> {
        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        if status.is_success() {
            return Ok(body);
        }
        warn!("[API] {} {}", status.as_u16(), body);
        Err(status_error(status, &body, id))
    }

    async fn read<T: DeserializeOwned>(
        response: reqwest::Response,
        id: Option<&FeedbackId>,
    ) -> ApiResult<T> {
        let body = Self::read_body(response, id).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl FeedbackApi for HttpFeedbackApi {
    async fn create(&self, data: &FeedbackData) -> ApiResult<FeedbackItem> {
        debug!("[API] POST /create {:?}", data.title);
        let response = self
            .client
            .post(format!("{}/create", self.base_url))
            .json(data)
            .send()
            .await
            .map_err(transport)?;
        Self::read::<ItemResponse>(response, None).await.map(ItemResponse::into_item)
    }

    async fn list(&self) -> ApiResult<Vec<FeedbackItem>> {
        debug!("[API] GET /");
        let response = self.client.get(&self.base_url).send().await.map_err(transport)?;
        Self::read::<ListResponse>(response, None).await.map(|r| r.feedbacks)
    }

    async fn get(&self, id: &FeedbackId) -> ApiResult<FeedbackItem> {
        debug!("[API] GET /{}", id);
        let response = self.client.get(self.item_url(id)).send().await.map_err(transport)?;
        Self::read::<ItemResponse>(response, Some(id)).await.map(ItemResponse::into_item)
    }

    async fn update(&self, id: &FeedbackId, data: &FeedbackData) -> ApiResult<FeedbackItem> {
        debug!("[API] PUT /{}", id);
        let response = self
            .client
            .put(self.item_url(id))
            .json(data)
            .send()
            .await
            .map_err(transport)?;
        Self::read::<ItemResponse>(response, Some(id)).await.map(ItemResponse::into_item)
    }

    async fn delete(&self, id: &FeedbackId) -> ApiResult<()> {
        debug!("[API] DELETE /{}", id);
        let response = self.client.delete(self.item_url(id)).send().await.map_err(transport)?;
        Self::read_body(response, Some(id)).await.map(|_| ())
    }
}
