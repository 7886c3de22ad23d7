//! # solvedocs-client
//!
//! Client for the GraphQL endpoint that knows each problem's difficulty and
//! topic tags.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solvedocs_client::MetadataClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), solvedocs_client::Error> {
//!     let client = MetadataClient::new(solvedocs_client::DEFAULT_ENDPOINT);
//!
//!     match client.question_detail("two-sum").await? {
//!         Some(meta) => println!("{} {:?}", meta.difficulty, meta.tags),
//!         None => println!("no such problem"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Wire Format
//!
//! ```text
//! POST /graphql
//! {"query": "query getQuestionDetail($titleSlug: String!) {...}",
//!  "variables": {"titleSlug": "two-sum"}}
//!
//! 200 OK
//! {"data": {"question": {"difficulty": "Easy",
//!                        "topicTags": [{"name": "Array", "slug": "array"}]}}}
//! ```

use serde::{Deserialize, Serialize};
use solvedocs_core::QuestionMeta;
use std::time::Duration;
use thiserror::Error;

/// Public GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://leetcode.com/graphql";

/// Per-request timeout used by [`MetadataClient::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Query selecting the fields stored in the cache.
pub const QUESTION_DETAIL_QUERY: &str = "
query getQuestionDetail($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    difficulty
    topicTags {
      name
      slug
    }
  }
}
";

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Errors from the metadata client.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed, including non-2xx responses.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The endpoint answered with GraphQL errors.
    #[error("Server error: {0}")]
    Server(String),
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// GraphQL request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub query: String,
    pub variables: QuestionVariables,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionVariables {
    pub title_slug: String,
}

impl QuestionRequest {
    /// Detail request for one slug.
    pub fn detail(slug: impl Into<String>) -> Self {
        Self {
            query: QUESTION_DETAIL_QUERY.to_string(),
            variables: QuestionVariables {
                title_slug: slug.into(),
            },
        }
    }
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

/// GraphQL response envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionResponse {
    #[serde(default)]
    pub data: Option<QuestionData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionData {
    #[serde(default)]
    pub question: Option<Question>,
}

/// The `question` object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub topic_tags: Vec<TopicTag>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicTag {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl From<Question> for QuestionMeta {
    fn from(question: Question) -> Self {
        let tags = question
            .topic_tags
            .into_iter()
            .filter_map(|tag| tag.name)
            .filter(|name| !name.is_empty())
            .collect();
        QuestionMeta::new(question.difficulty.unwrap_or_default(), tags)
    }
}

impl QuestionResponse {
    /// Reduce the envelope to metadata.
    ///
    /// A missing question is `Ok(None)` unless the server also reported
    /// errors, in which case those are returned.
    pub fn into_meta(self) -> Result<Option<QuestionMeta>, Error> {
        match self.data.and_then(|data| data.question) {
            Some(question) => Ok(Some(question.into())),
            None if !self.errors.is_empty() => Err(Error::Server(
                self.errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; "),
            )),
            None => Ok(None),
        }
    }
}

// =============================================================================
// CLIENT
// =============================================================================

/// HTTP client for the metadata endpoint.
#[derive(Debug, Clone)]
pub struct MetadataClient {
    endpoint: String,
    client: reqwest::Client,
}

impl MetadataClient {
    /// Create a client for the given endpoint with the default timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::builder()
                .timeout(DEFAULT_TIMEOUT)
                .user_agent(concat!("solvedocs/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Create a client with a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the HTTP client fails to build.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("solvedocs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// The endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch difficulty and tags for a slug.
    ///
    /// Returns `Ok(None)` when the endpoint knows no question with that slug.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on connection failure, timeout or a non-2xx
    /// status, [`Error::Json`] when the body is not a GraphQL response, and
    /// [`Error::Server`] when the response carries GraphQL errors instead of a
    /// question.
    pub async fn question_detail(&self, slug: &str) -> Result<Option<QuestionMeta>, Error> {
        tracing::debug!(slug, endpoint = %self.endpoint, "fetching question detail");

        let body = self
            .client
            .post(&self.endpoint)
            .json(&QuestionRequest::detail(slug))
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let resp: QuestionResponse = serde_json::from_slice(&body)?;
        resp.into_meta()
    }
}
