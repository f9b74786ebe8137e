//! In-memory gateway for tests: replays queued outcomes and records every call.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::ClientError;
use crate::gateway::{CreatedInterview, InterviewGateway};
use crate::models::result::{QuestionFeedback, ResultData};
use crate::models::setup::InterviewSetupRequest;
use crate::models::submission::QnaEntry;

#[derive(Default)]
pub struct FakeGateway {
    create_outcomes: Mutex<VecDeque<Result<CreatedInterview, ClientError>>>,
    submit_outcomes: Mutex<VecDeque<Result<ResultData, ClientError>>>,
    pub create_calls: Mutex<Vec<InterviewSetupRequest>>,
    pub submit_calls: Mutex<Vec<(String, Vec<QnaEntry>)>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_create(self, outcome: Result<CreatedInterview, ClientError>) -> Self {
        self.create_outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn with_submit(self, outcome: Result<ResultData, ClientError>) -> Self {
        self.submit_outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn created(interview_id: &str, questions: &[&str]) -> CreatedInterview {
        CreatedInterview {
            interview_id: interview_id.to_string(),
            questions: questions.iter().map(|q| q.to_string()).collect(),
        }
    }

    pub fn submit_call_count(&self) -> usize {
        self.submit_calls.lock().unwrap().len()
    }
}

pub fn sample_result() -> ResultData {
    ResultData {
        total_score: 72.0,
        grade: "Fair".to_string(),
        radar_scores: [70.0, 65.0, 60.0, 80.0, 85.0],
        analysis_text: "Good structure.\nNeeds more concrete examples.".to_string(),
        questions: vec![
            QuestionFeedback {
                label: None,
                title: "Q1".to_string(),
                answer: "A1".to_string(),
                good_points: vec!["Clear opening".to_string()],
                improvement_points: vec!["Quantify impact".to_string()],
            },
            QuestionFeedback {
                label: Some("Wrap-up".to_string()),
                title: "Q2".to_string(),
                answer: String::new(),
                good_points: vec![],
                improvement_points: vec!["Answer the question".to_string()],
            },
        ],
    }
}

#[async_trait]
impl InterviewGateway for FakeGateway {
    async fn create(
        &self,
        request: &InterviewSetupRequest,
    ) -> Result<CreatedInterview, ClientError> {
        self.create_calls.lock().unwrap().push(request.clone());
        self.create_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected create call")
    }

    async fn submit(
        &self,
        interview_id: &str,
        qna_list: &[QnaEntry],
    ) -> Result<ResultData, ClientError> {
        self.submit_calls
            .lock()
            .unwrap()
            .push((interview_id.to_string(), qna_list.to_vec()));
        self.submit_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected submit call")
    }
}
