#![doc = "HTTP implementation of the content API contract used by the CLI."]
//
//! # Content API client
//!
//! [`HttpClient`] implements [`ContentApi`] from `content-batch-core` over
//! `reqwest`. It owns the [`ApiConfig`] (base URL, timeout) and turns each
//! [`CreateRequest`] into exactly one HTTP call:
//!
//! - `RequestBody::Json` → `POST {base}/{endpoint}` with a JSON body
//! - `RequestBody::Multipart` → `POST {base}/{endpoint}` with a file part and
//!   an `application/json` part
//!
//! Listing is `GET {base}/{collection}`, deletion is
//! `DELETE {base}/{collection}/{id}` with `id` percent-encoded as a single
//! path segment. Only the documented success status
//! counts (201 create, 200 list/delete); anything else becomes
//! [`ApiError::Status`] carrying the response text.

use std::time::Duration;

use async_trait::async_trait;
use content_batch_core::config::ApiConfig;
use content_batch_core::contract::{ContentApi, CreateRequest, FilePart, RequestBody};
use content_batch_core::error::ApiError;
use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode, Url};
use serde_json::Value;

pub struct HttpClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| {
            tracing::error!(error = ?e, "Failed to build HTTP client");
            ApiError::Transport(e.to_string())
        })?;
        tracing::info!(base_url = %config.base_url, "Initialized HttpClient");
        Ok(HttpClient { http, config })
    }

    async fn multipart_form(
        file: &FilePart,
        json_field: &str,
        json: &Value,
    ) -> Result<Form, ApiError> {
        let bytes = tokio::fs::read(&file.path).await.map_err(|source| {
            tracing::error!(path = %file.path.display(), error = ?source, "Failed to read upload file");
            ApiError::Io {
                path: file.path.clone(),
                source,
            }
        })?;
        let file_part = Part::bytes(bytes)
            .file_name(file.file_name.clone())
            .mime_str(&file.mime)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let json_part = Part::text(json.to_string())
            .mime_str("application/json")
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Form::new()
            .part(file.field.clone(), file_part)
            .part(json_field.to_string(), json_part))
    }
}

/// `{base}/{collection}/{id}`, with `id` confined to one encoded path segment.
fn item_url(base: &str, id: &str) -> Result<Url, ApiError> {
    // `.` and `..` would be dropped from the path rather than encoded.
    if id.is_empty() || id == "." || id == ".." {
        return Err(ApiError::InvalidUrl(format!("unusable item id '{id}'")));
    }
    let mut url = Url::parse(base).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidUrl(format!("{base} cannot carry a path")))?
        .pop_if_empty()
        .push(id);
    Ok(url)
}

/// Maps a response to `Ok` when it carries `expected`, otherwise to `ApiError::Status`.
async fn expect_status(response: Response, expected: StatusCode) -> Result<Response, ApiError> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }
    let detail = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        detail,
    })
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[async_trait]
impl ContentApi for HttpClient {
    async fn create(&self, request: CreateRequest) -> Result<(), ApiError> {
        let url = self.config.url(&request.endpoint);
        tracing::info!(url = %url, "Creating item");

        let builder = match &request.body {
            RequestBody::Json(body) => self.http.post(&url).json(body),
            RequestBody::Multipart {
                file,
                json_field,
                json,
            } => {
                let form = Self::multipart_form(file, json_field, json).await?;
                self.http.post(&url).multipart(form)
            }
        };

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = ?e, url = %url, "Create request failed to send");
            transport(e)
        })?;
        expect_status(response, StatusCode::CREATED)
            .await
            .map(|_| tracing::info!(url = %url, "Item created"))
            .inspect_err(|e| tracing::warn!(error = %e, url = %url, "Create rejected"))
    }

    async fn list(&self, collection: &str) -> Result<Value, ApiError> {
        let url = self.config.url(collection);
        tracing::info!(url = %url, "Listing collection");
        let response = self.http.get(&url).send().await.map_err(transport)?;
        let response = expect_status(response, StatusCode::OK).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), ApiError> {
        let url = item_url(&self.config.url(collection), id)
            .inspect_err(|e| tracing::warn!(error = %e, collection, "Refusing delete"))?;
        tracing::info!(url = %url, "Deleting item");
        let response = self.http.delete(url).send().await.map_err(transport)?;
        expect_status(response, StatusCode::OK).await.map(|_| ())
    }
}
