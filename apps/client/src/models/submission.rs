use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::question::Question;

/// One question/answer pair as transmitted at submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QnaEntry {
    pub question: String,
    pub answer: String,
}

/// JSON body of `POST /api/interview/submit`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest<'a> {
    pub interview_id: &'a str,
    pub qna_list: &'a [QnaEntry],
}

/// One entry per question, in question order; a missing answer becomes "".
pub fn build_qna_list(questions: &[Question], answers: &HashMap<usize, String>) -> Vec<QnaEntry> {
    questions
        .iter()
        .enumerate()
        .map(|(index, q)| QnaEntry {
            question: q.title.clone(),
            answer: answers.get(&index).cloned().unwrap_or_default(),
        })
        .collect()
}
