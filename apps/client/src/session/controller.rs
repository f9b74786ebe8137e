//! Interview session state machine.
//!
//! State is `{current_index, answers, is_submitting}`. While `is_submitting` is set
//! every navigation and edit is refused. A failed submission clears the flag and
//! leaves `current_index` and `answers` exactly as they were.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::errors::ClientError;
use crate::gateway::InterviewGateway;
use crate::models::question::Question;
use crate::models::setup::ExperienceLevel;
use crate::models::submission::{build_qna_list, QnaEntry};
use crate::navigation::{InterviewHandoff, ResultHandoff};

/// Job title shown when the view was entered without a hand-off.
pub const MISSING_JOB_TITLE: &str = "No job information";

/// Outcome of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Moved { index: usize },
    /// Request was valid but had nothing to do (first question, out-of-range jump).
    Unchanged,
    /// A submission is in flight.
    Locked,
    /// Last question, user declined the submit confirmation.
    Declined,
    /// Last question, confirmed. `is_submitting` is now set; pass the list to `submit`.
    Submit(Vec<QnaEntry>),
}

#[derive(Debug, Clone)]
pub struct SessionController {
    interview_id: String,
    job_title: String,
    experience_level: ExperienceLevel,
    questions: Vec<Question>,
    current_index: usize,
    answers: HashMap<usize, String>,
    is_submitting: bool,
}

impl SessionController {
    /// A missing hand-off, or one with no questions, yields the single fallback question.
    pub fn new(interview_id: String, handoff: Option<InterviewHandoff>) -> Self {
        let (job_title, experience_level, questions) = match handoff {
            Some(h) => (h.job_title, h.experience_level, h.questions),
            None => {
                warn!("Interview {interview_id} opened without setup data");
                (MISSING_JOB_TITLE.to_string(), ExperienceLevel::default(), Vec::new())
            }
        };

        let questions = if questions.is_empty() {
            vec![Question::fallback()]
        } else {
            questions
        };

        Self {
            interview_id,
            job_title,
            experience_level,
            questions,
            current_index: 0,
            answers: HashMap::new(),
            is_submitting: false,
        }
    }

    pub fn interview_id(&self) -> &str {
        &self.interview_id
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn experience_level(&self) -> ExperienceLevel {
        self.experience_level
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    #[cfg(test)]
    pub fn answers(&self) -> &HashMap<usize, String> {
        &self.answers
    }

    /// Missing entries read as "".
    pub fn answer(&self, index: usize) -> &str {
        self.answers.get(&index).map(String::as_str).unwrap_or("")
    }

    pub fn current_answer(&self) -> &str {
        self.answer(self.current_index)
    }

    #[cfg(test)]
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    pub fn is_last(&self) -> bool {
        self.current_index == self.last_index()
    }

    /// Replaces the answer at the current index. Returns false while submitting.
    pub fn edit_answer(&mut self, text: impl Into<String>) -> bool {
        if self.is_submitting {
            return false;
        }
        self.answers.insert(self.current_index, text.into());
        true
    }

    pub fn go_prev(&mut self) -> Advance {
        if self.is_submitting {
            return Advance::Locked;
        }
        if self.current_index == 0 {
            return Advance::Unchanged;
        }
        self.current_index -= 1;
        Advance::Moved {
            index: self.current_index,
        }
    }

    /// `confirm` is consulted only on the last question.
    pub fn go_next(&mut self, confirm: impl FnOnce() -> bool) -> Advance {
        if self.is_submitting {
            return Advance::Locked;
        }
        if self.current_index < self.last_index() {
            self.current_index += 1;
            return Advance::Moved {
                index: self.current_index,
            };
        }
        if !confirm() {
            debug!("Submission declined at question {}", self.current_index + 1);
            return Advance::Declined;
        }
        self.is_submitting = true;
        Advance::Submit(build_qna_list(&self.questions, &self.answers))
    }

    pub fn jump_to(&mut self, index: usize) -> Advance {
        if self.is_submitting {
            return Advance::Locked;
        }
        if index >= self.questions.len() {
            return Advance::Unchanged;
        }
        self.current_index = index;
        Advance::Moved { index }
    }

    /// Sends the list produced by `go_next`. On failure the session is interactive
    /// again with its answers and position untouched.
    pub async fn submit(
        &mut self,
        gateway: &dyn InterviewGateway,
        qna_list: Vec<QnaEntry>,
    ) -> Result<ResultHandoff, ClientError> {
        if !self.is_submitting {
            return Err(ClientError::Validation(
                "Submission was not confirmed.".to_string(),
            ));
        }

        match gateway.submit(&self.interview_id, &qna_list).await {
            Ok(result) => {
                info!(
                    "Interview {} submitted with {} answers",
                    self.interview_id,
                    qna_list.len()
                );
                Ok(ResultHandoff { result })
            }
            Err(e) => {
                warn!("Submission of interview {} failed: {e}", self.interview_id);
                self.is_submitting = false;
                Err(e)
            }
        }
    }
}
