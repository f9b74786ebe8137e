/// Geometry of the result page at one scroll position. Units are whatever the
/// front-end measures in (pixels on the web, lines in the terminal pager).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Bottom edge of the summary card relative to the top of the viewport.
    pub summary_bottom: f64,
    pub viewport_height: f64,
    pub scroll_offset: f64,
    pub document_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThresholds {
    pub summary_hidden_below: f64,
    pub bottom_margin: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            summary_hidden_below: 50.0,
            bottom_margin: 100.0,
        }
    }
}

/// Visibility of the floating "study feedback" button and the footer actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollFlags {
    pub show_fab: bool,
    pub show_footer: bool,
}

impl ScrollFlags {
    pub fn compute(metrics: ScrollMetrics, thresholds: ScrollThresholds) -> Self {
        let summary_hidden = metrics.summary_bottom < thresholds.summary_hidden_below;
        let at_bottom = metrics.viewport_height + metrics.scroll_offset
            >= metrics.document_height - thresholds.bottom_margin;

        Self {
            show_fab: summary_hidden && !at_bottom,
            show_footer: at_bottom,
        }
    }
}
