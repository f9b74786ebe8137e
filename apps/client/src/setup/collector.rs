use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::ClientError;
use crate::gateway::{CreatedInterview, InterviewGateway};
use crate::models::question::Question;
use crate::models::setup::InterviewSetupRequest;
use crate::navigation::{InterviewHandoff, View};

pub struct SetupCollector {
    gateway: Arc<dyn InterviewGateway>,
    is_loading: bool,
}

impl SetupCollector {
    pub fn new(gateway: Arc<dyn InterviewGateway>) -> Self {
        Self {
            gateway,
            is_loading: false,
        }
    }

    /// True only while the creation call is outstanding.
    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Sends the validated request and returns the single navigation to the
    /// Interview view. On error the caller keeps its form and may resubmit.
    pub async fn submit(&mut self, request: &InterviewSetupRequest) -> Result<View, ClientError> {
        if self.is_loading {
            return Err(ClientError::Validation(
                "An interview is already being prepared.".to_string(),
            ));
        }

        self.is_loading = true;
        let outcome = self.gateway.create(request).await;
        self.is_loading = false;

        match outcome {
            Ok(created) => {
                info!(
                    "Setup complete, moving to interview {}",
                    created.interview_id
                );
                Ok(interview_view(request, created))
            }
            Err(e) => {
                warn!("Interview creation failed: {e}");
                Err(e)
            }
        }
    }
}

/// Builds the Setup → Interview navigation carrying the hand-off.
pub fn interview_view(request: &InterviewSetupRequest, created: CreatedInterview) -> View {
    View::Interview {
        interview_id: created.interview_id,
        handoff: Some(InterviewHandoff {
            job_title: request.job_title.clone(),
            experience_level: request.experience_level,
            questions: Question::sequence_from_texts(created.questions),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::fake::FakeGateway;
    use crate::models::setup::ExperienceLevel;

    fn request() -> InterviewSetupRequest {
        InterviewSetupRequest {
            job_title: "Frontend Developer".to_string(),
            experience_level: ExperienceLevel::Newbie,
            cover_letter: None,
            resume_file: None,
        }
    }

    #[tokio::test]
    async fn test_success_hands_off_numbered_questions() {
        let gateway = Arc::new(
            FakeGateway::new().with_create(Ok(FakeGateway::created("abc123", &["Q1", "Q2"]))),
        );
        let mut collector = SetupCollector::new(gateway.clone());

        let view = collector.submit(&request()).await.unwrap();

        assert_eq!(
            view,
            View::Interview {
                interview_id: "abc123".to_string(),
                handoff: Some(InterviewHandoff {
                    job_title: "Frontend Developer".to_string(),
                    experience_level: ExperienceLevel::Newbie,
                    questions: vec![
                        Question {
                            id: 1,
                            title: "Q1".to_string()
                        },
                        Question {
                            id: 2,
                            title: "Q2".to_string()
                        },
                    ],
                }),
            }
        );
        assert!(!collector.is_loading());
        assert_eq!(gateway.create_calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_clears_loading_and_allows_retry() {
        let gateway = Arc::new(
            FakeGateway::new()
                .with_create(Err(ClientError::Server {
                    status: 500,
                    message: "server error: 500".to_string(),
                }))
                .with_create(Ok(FakeGateway::created("retry-1", &["Q1"]))),
        );
        let mut collector = SetupCollector::new(gateway.clone());

        let err = collector.submit(&request()).await.unwrap_err();
        assert_eq!(err.user_message(), "server error: 500");
        assert!(!collector.is_loading());

        let view = collector.submit(&request()).await.unwrap();
        assert_eq!(view.name(), "interview");
        assert_eq!(gateway.create_calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_zero_questions_still_navigates() {
        let gateway = Arc::new(FakeGateway::new().with_create(Ok(FakeGateway::created("empty", &[]))));
        let mut collector = SetupCollector::new(gateway);

        match collector.submit(&request()).await.unwrap() {
            View::Interview {
                handoff: Some(handoff),
                ..
            } => assert!(handoff.questions.is_empty()),
            other => panic!("expected interview view, got {other:?}"),
        }
    }
}
