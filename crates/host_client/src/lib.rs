//! HTTP bridge from the overlay to its host runtime.
//!
//! Every call is a single POST to `<base>/<endpoint>` with no retry, timeout
//! or cancellation. Callers decide how to recover from a failure.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    domain::{HeaderDetails, ModerationAction, Submission, SubmissionPosition},
    protocol::{
        EmptyRequest, PublishRequest, PublishResponse, SubmissionActionRequest,
        SubmissionActionResponse,
    },
};
use tracing::debug;
use url::Url;

pub mod config;
pub mod error;

pub use error::HostError;

pub const CLOSE_UI: &str = "closeUI";
pub const GET_PENDING_SUBMISSIONS: &str = "getPendingSubmissions";
pub const PUBLISH_NEWSPAPER: &str = "publishNewspaper";
pub const WRITE_MY_OWN_ARTICLE: &str = "writeMyOwnArticle";

#[async_trait]
pub trait HostApi: Send + Sync {
    async fn close_ui(&self) -> Result<(), HostError>;
    async fn pending_submissions(&self) -> Result<Vec<Submission>, HostError>;
    async fn moderate(
        &self,
        action: ModerationAction,
        position: SubmissionPosition,
    ) -> Result<SubmissionActionResponse, HostError>;
    async fn publish(&self, header_details: HeaderDetails) -> Result<PublishResponse, HostError>;
    async fn write_my_own_article(&self) -> Result<(), HostError>;
}

pub struct HostClient {
    http: Client,
    base_url: Url,
}

impl HostClient {
    /// `base_url` should end with `/` so endpoint names are appended to it.
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &'static str) -> Result<Url, HostError> {
        self.base_url
            .join(endpoint)
            .map_err(|source| HostError::InvalidUrl { endpoint, source })
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &'static str,
        body: Option<&B>,
    ) -> Result<Response, HostError> {
        let url = self.endpoint_url(endpoint)?;
        debug!(%url, "posting to host");
        let request = self.http.post(url);
        let request = match body {
            Some(body) => request.json(body),
            None => request,
        };
        request
            .send()
            .await
            .map_err(|source| HostError::Transport { endpoint, source })
    }

    async fn post_checked<B: Serialize + ?Sized>(
        &self,
        endpoint: &'static str,
        body: Option<&B>,
    ) -> Result<Response, HostError> {
        let response = self.post(endpoint, body).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HostError::Status { endpoint, status });
        }
        Ok(response)
    }
}

/// Reads a JSON body, treating an empty body or `null` as absent.
async fn read_optional<T: DeserializeOwned>(
    endpoint: &'static str,
    response: Response,
) -> Result<Option<T>, HostError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|source| HostError::Transport { endpoint, source })?;
    decode_optional(endpoint, &bytes)
}

fn decode_optional<T: DeserializeOwned>(
    endpoint: &'static str,
    bytes: &[u8],
) -> Result<Option<T>, HostError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(bytes).map_err(|source| HostError::Decode { endpoint, source })
}

#[async_trait]
impl HostApi for HostClient {
    async fn close_ui(&self) -> Result<(), HostError> {
        self.post_checked::<EmptyRequest>(CLOSE_UI, None).await?;
        Ok(())
    }

    async fn pending_submissions(&self) -> Result<Vec<Submission>, HostError> {
        let response = self
            .post_checked(GET_PENDING_SUBMISSIONS, Some(&EmptyRequest {}))
            .await?;
        let submissions: Option<Vec<Submission>> =
            read_optional(GET_PENDING_SUBMISSIONS, response).await?;
        let submissions = submissions.unwrap_or_default();
        debug!(count = submissions.len(), "fetched pending submissions");
        Ok(submissions)
    }

    async fn moderate(
        &self,
        action: ModerationAction,
        position: SubmissionPosition,
    ) -> Result<SubmissionActionResponse, HostError> {
        let endpoint = action.endpoint();
        let response = self
            .post_checked(endpoint, Some(&SubmissionActionRequest { index: position }))
            .await?;
        Ok(read_optional(endpoint, response).await?.unwrap_or_default())
    }

    async fn publish(&self, header_details: HeaderDetails) -> Result<PublishResponse, HostError> {
        // The publish result is read from the body whatever the status code.
        let response = self
            .post(PUBLISH_NEWSPAPER, Some(&PublishRequest { header_details }))
            .await?;
        read_optional(PUBLISH_NEWSPAPER, response)
            .await?
            .ok_or(HostError::EmptyBody {
                endpoint: PUBLISH_NEWSPAPER,
            })
    }

    async fn write_my_own_article(&self) -> Result<(), HostError> {
        self.post_checked(WRITE_MY_OWN_ARTICLE, Some(&EmptyRequest {}))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
