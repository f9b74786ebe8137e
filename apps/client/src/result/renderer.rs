use std::collections::HashMap;

use tracing::warn;

use crate::models::result::ResultData;
use crate::navigation::ResultHandoff;
use crate::result::scroll::{ScrollFlags, ScrollMetrics, ScrollThresholds};

pub const MISSING_RESULT_MESSAGE: &str = "No result data. Please complete an interview first.";

/// The Result view either has data to render or must send the user back to setup.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultState {
    Redirect,
    Rendering(ResultPage),
}

impl ResultState {
    pub fn from_handoff(handoff: Option<ResultHandoff>) -> Self {
        match handoff {
            Some(h) => ResultState::Rendering(ResultPage::new(h.result)),
            None => {
                warn!("Result view opened without result data, redirecting to setup");
                ResultState::Redirect
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage {
    data: ResultData,
    expanded: HashMap<usize, bool>,
    scroll: ScrollFlags,
}

impl ResultPage {
    pub fn new(data: ResultData) -> Self {
        Self {
            data,
            expanded: HashMap::new(),
            scroll: ScrollFlags::default(),
        }
    }

    pub fn data(&self) -> &ResultData {
        &self.data
    }

    /// Collapsed unless toggled open.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(&index).copied().unwrap_or(false)
    }

    /// Flips one feedback item. Returns its new state, or `None` for an unknown index.
    pub fn toggle_feedback(&mut self, index: usize) -> Option<bool> {
        if index >= self.data.questions.len() {
            return None;
        }
        let expanded = !self.is_expanded(index);
        self.expanded.insert(index, expanded);
        Some(expanded)
    }

    pub fn scroll_flags(&self) -> ScrollFlags {
        self.scroll
    }

    pub fn update_scroll(&mut self, metrics: ScrollMetrics, thresholds: ScrollThresholds) {
        self.scroll = ScrollFlags::compute(metrics, thresholds);
    }
}
