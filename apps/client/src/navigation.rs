//! Views and the one-shot hand-offs attached to navigating between them.
//!
//! A hand-off is moved into the `View` that consumes it; nothing else can reach it.
//! `None` means the view was entered without going through the previous step.

use crate::models::question::Question;
use crate::models::result::ResultData;
use crate::models::setup::ExperienceLevel;

/// Setup → Interview.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewHandoff {
    pub job_title: String,
    pub experience_level: ExperienceLevel,
    pub questions: Vec<Question>,
}

/// Interview → Result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultHandoff {
    pub result: ResultData,
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Setup,
    Interview {
        interview_id: String,
        handoff: Option<InterviewHandoff>,
    },
    Result {
        handoff: Option<ResultHandoff>,
    },
    Exit,
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Setup => "setup",
            View::Interview { .. } => "interview",
            View::Result { .. } => "result",
            View::Exit => "exit",
        }
    }
}
