// Derived, read-only views over a session. Nothing here is stored state.

use crate::session::controller::SessionController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSegment {
    pub answered: bool,
    pub current: bool,
}

impl SessionController {
    /// A question counts as answered iff its trimmed text is non-empty.
    pub fn is_answered(&self, index: usize) -> bool {
        !self.answer(index).trim().is_empty()
    }

    pub fn progress(&self) -> Vec<ProgressSegment> {
        (0..self.questions().len())
            .map(|index| ProgressSegment {
                answered: self.is_answered(index),
                current: index == self.current_index(),
            })
            .collect()
    }

    pub fn answered_count(&self) -> usize {
        (0..self.questions().len())
            .filter(|&index| self.is_answered(index))
            .count()
    }

    /// Characters in the current answer, counted as Unicode scalar values.
    pub fn char_count(&self) -> usize {
        self.current_answer().chars().count()
    }

    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current_index() + 1, self.questions().len())
    }

    pub fn header(&self) -> String {
        format!("{} ({})", self.job_title(), self.experience_level().label())
    }
}
