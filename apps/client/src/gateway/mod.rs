//! Submission Gateway — the single point of contact with the interview backend.
//!
//! Both calls are one request/response with no retry or backoff. Callers hold an
//! `Arc<dyn InterviewGateway>` so the views never know which transport is behind it.

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::ClientError;
use crate::models::result::ResultData;
use crate::models::setup::InterviewSetupRequest;
use crate::models::submission::QnaEntry;

pub mod http;

pub const CREATE_PATH: &str = "/api/interview/create";
pub const SUBMIT_PATH: &str = "/api/interview/submit";

/// Success body of the creation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedInterview {
    pub interview_id: String,
    #[serde(default)]
    pub questions: Vec<String>,
}

#[async_trait]
pub trait InterviewGateway: Send + Sync {
    /// Fails with `ClientError::Server` carrying the backend's message when it sends one.
    async fn create(&self, request: &InterviewSetupRequest)
        -> Result<CreatedInterview, ClientError>;

    /// Fails with the generic `ClientError::Submission` on any non-2xx status.
    async fn submit(
        &self,
        interview_id: &str,
        qna_list: &[QnaEntry],
    ) -> Result<ResultData, ClientError>;
}

#[cfg(test)]
pub mod fake;
