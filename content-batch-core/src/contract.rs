#![allow(unused)]

//! # contract: the seams between the pipelines and the outside world
//!
//! The batch and purge pipelines never touch the network or the terminal
//! directly. They talk to two traits:
//!
//! - [`ContentApi`]: the remote content API (create, list, delete).
//! - [`Operator`]: the person running the tool (pick a folder, answer prompts,
//!   read reports).
//!
//! ## Mocking & Testing
//! - `ContentApi` is annotated for `mockall`, so tests get a `MockContentApi`
//!   with per-call expectations (`.times(n)`, `.never()`).
//! - `Operator` is usually scripted by hand in tests; `MockOperator` is used
//!   where a prompt must never be shown (`expect_confirm().never()`).
//!
//! ## Request Types
//! - [`CreateRequest`] is transport-agnostic: the endpoint segment plus a body
//!   that is either a plain JSON document or a file part with a JSON part.
//!   The HTTP client decides how that maps to a wire request.

use std::path::PathBuf;

use async_trait::async_trait;
use mockall::{automock, predicate::*};
use serde_json::Value;

use crate::error::ApiError;

/// A binary file attached to a multipart submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    /// Multipart field name (e.g. `icon`, `video`).
    pub field: String,
    pub path: PathBuf,
    pub file_name: String,
    pub mime: String,
}

/// How the item is encoded on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// A plain `application/json` body.
    Json(Value),
    /// A file part plus a JSON metadata part named `json_field`.
    Multipart {
        file: FilePart,
        json_field: String,
        json: Value,
    },
}

/// One create call against a collection endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRequest {
    /// Collection path segment, e.g. `cast`.
    pub endpoint: String,
    pub body: RequestBody,
}

/// The remote content API.
///
/// Implementations own the base URL and transport; every method is one
/// request and is fully awaited before the pipeline moves on.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Create one item. Succeeds only when the API reports creation (HTTP 201).
    async fn create(&self, request: CreateRequest) -> Result<(), ApiError>;

    /// Fetch the raw listing of a collection (HTTP 200 expected).
    async fn list(&self, collection: &str) -> Result<Value, ApiError>;

    /// Delete `{collection}/{id}` (HTTP 200 expected).
    async fn delete(&self, collection: &str, id: &str) -> Result<(), ApiError>;
}

/// The person driving a run.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait Operator: Send + Sync {
    /// Ask for a folder. `None` when the operator cancelled or gave nothing.
    fn choose_directory(&self, title: &str) -> Option<PathBuf>;

    /// Ask a free-text question and return the answer as typed.
    fn prompt_text(&self, prompt: &str) -> String;

    /// Ask a yes/no question and return the raw answer. See [`is_affirmative`].
    fn confirm(&self, question: &str) -> String;

    /// Show one line of output.
    fn show(&self, line: &str);
}

/// Only `yes` (any case, surrounding whitespace ignored) counts as consent.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
