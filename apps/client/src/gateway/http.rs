use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::errors::ClientError;
use crate::gateway::{CreatedInterview, InterviewGateway, CREATE_PATH, SUBMIT_PATH};
use crate::models::result::ResultData;
use crate::models::setup::InterviewSetupRequest;
use crate::models::submission::{QnaEntry, SubmitRequest};

/// reqwest-backed gateway talking to the interview backend over HTTP.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// `base_url` must not end with a slash.
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn build_form(request: &InterviewSetupRequest) -> Result<Form, ClientError> {
        let mut form = Form::new()
            .text("job_title", request.job_title.clone())
            .text("experience_level", request.experience_level.as_str());

        if let Some(cover_letter) = &request.cover_letter {
            form = form.text("cover_letter", cover_letter.clone());
        }

        if let Some(resume) = &request.resume_file {
            let part = Part::bytes(resume.content.to_vec())
                .file_name(resume.file_name.clone())
                .mime_str(resume.mime_type())?;
            form = form.part("resume_file", part);
        }

        Ok(form)
    }
}

#[async_trait]
impl InterviewGateway for HttpGateway {
    async fn create(
        &self,
        request: &InterviewSetupRequest,
    ) -> Result<CreatedInterview, ClientError> {
        debug!(
            "Creating interview: level={}, cover_letter_len={}, resume={}",
            request.experience_level,
            request.cover_letter.as_deref().map_or(0, str::len),
            request.resume_file.is_some()
        );

        let response = self
            .client
            .post(self.endpoint(CREATE_PATH))
            .multipart(Self::build_form(request)?)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Create endpoint returned {}: {}", status, body);
            let message = server_message(&body)
                .unwrap_or_else(|| format!("server error: {}", status.as_u16()));
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let created: CreatedInterview = decode(&response.text().await?)?;
        info!(
            "Interview {} created with {} questions",
            created.interview_id,
            created.questions.len()
        );
        Ok(created)
    }

    async fn submit(
        &self,
        interview_id: &str,
        qna_list: &[QnaEntry],
    ) -> Result<ResultData, ClientError> {
        debug!(
            "Submitting interview {}: {} answers",
            interview_id,
            qna_list.len()
        );

        let response = self
            .client
            .post(self.endpoint(SUBMIT_PATH))
            .json(&SubmitRequest {
                interview_id,
                qna_list,
            })
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            warn!("Submit endpoint returned {}", status);
            return Err(ClientError::Submission {
                status: status.as_u16(),
            });
        }

        let result: ResultData = decode(&response.text().await?)?;
        info!(
            "Interview {} scored {} ({})",
            interview_id, result.total_score, result.grade
        );
        Ok(result)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Pulls a human-readable message out of an error body.
/// Looks at `message`, then `error` as a string, then `error.message`.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let non_empty = |v: &serde_json::Value| {
        v.as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    non_empty(&value["message"])
        .or_else(|| non_empty(&value["error"]))
        .or_else(|| non_empty(&value["error"]["message"]))
}
