use crate::errors::ClientError;
use crate::models::result::{ResultData, MAX_SCORE};
use crate::navigation::{ResultHandoff, View};
use crate::result::renderer::{ResultPage, ResultState, MISSING_RESULT_MESSAGE};
use crate::result::scroll::{ScrollMetrics, ScrollThresholds};
use crate::ui::Terminal;

const BAR_WIDTH: usize = 20;

/// The pager measures in lines.
const LINE_THRESHOLDS: ScrollThresholds = ScrollThresholds {
    summary_hidden_below: 1.0,
    bottom_margin: 2.0,
};

const HELP: &str = "Commands: t <n> toggle feedback, j scroll down, k scroll up, r retake interview, s study feedback, q quit";

/// Shows the scored interview. Without a hand-off the user is sent back to setup.
pub fn run_result(
    term: &mut dyn Terminal,
    handoff: Option<ResultHandoff>,
    viewport: usize,
) -> Result<View, ClientError> {
    let mut page = match ResultState::from_handoff(handoff) {
        ResultState::Redirect => {
            term.alert(MISSING_RESULT_MESSAGE);
            return Ok(View::Setup);
        }
        ResultState::Rendering(page) => page,
    };

    let viewport = viewport.max(1);
    let mut offset = 0usize;

    term.print_line(HELP);

    loop {
        let (summary, feedback) = document(&page);
        let total = summary.len() + feedback.len();
        offset = offset.min(total.saturating_sub(viewport));

        page.update_scroll(
            ScrollMetrics {
                summary_bottom: summary.len() as f64 - offset as f64,
                viewport_height: viewport as f64,
                scroll_offset: offset as f64,
                document_height: total as f64,
            },
            LINE_THRESHOLDS,
        );

        for line in summary.iter().chain(feedback.iter()).skip(offset).take(viewport) {
            term.print_line(line);
        }

        let flags = page.scroll_flags();
        if flags.show_footer {
            term.print_line("[r] Retake interview   [s] Study feedback");
        } else if flags.show_fab {
            term.print_line("(s) Study feedback");
        }

        let Some(line) = term.read_line("result")? else {
            return Ok(View::Exit);
        };
        let line = line.trim();

        match line.split_once(' ').unwrap_or((line, "")) {
            ("t", arg) => {
                let toggled = arg
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .and_then(|n| page.toggle_feedback(n - 1));
                if toggled.is_none() {
                    term.alert(&format!("No feedback item '{}'.", arg.trim()));
                }
            }
            ("j", _) => offset += viewport / 2 + 1,
            ("k", _) => offset = offset.saturating_sub(viewport / 2 + 1),
            ("r", _) => return Ok(View::Setup),
            ("s", _) => term.alert("Feedback study is not available in this client."),
            ("q", _) => return Ok(View::Exit),
            _ => term.print_line(HELP),
        }
    }
}

/// Summary card lines and feedback list lines, rendered for the current toggles.
fn document(page: &ResultPage) -> (Vec<String>, Vec<String>) {
    let data = page.data();
    (summary_lines(data), feedback_lines(page))
}

fn summary_lines(data: &ResultData) -> Vec<String> {
    let mut lines = vec![
        "=== Mock interview results ===".to_string(),
        format!(
            "Total score: {} / {}   Grade: {}",
            format_score(data.total_score),
            format_score(MAX_SCORE),
            data.grade
        ),
        String::new(),
    ];

    for (axis, score) in data.radar() {
        lines.push(format!(
            "  {:<22} {:>5}  {}",
            axis,
            format_score(score),
            score_bar(score)
        ));
    }

    lines.push(String::new());
    lines.push("Overall analysis".to_string());
    lines.extend(data.analysis_text.lines().map(|l| format!("  {l}")));
    lines.push(String::new());
    lines
}

fn feedback_lines(page: &ResultPage) -> Vec<String> {
    let mut lines = vec!["--- Feedback per question ---".to_string()];

    for (index, q) in page.data().questions.iter().enumerate() {
        let expanded = page.is_expanded(index);
        lines.push(format!(
            "{} {}: {}",
            if expanded { "[-]" } else { "[+]" },
            q.display_label(index),
            q.title
        ));
        if !expanded {
            continue;
        }

        lines.push("    My answer:".to_string());
        lines.extend(q.answer.lines().map(|l| format!("      {l}")));
        lines.push("    What went well:".to_string());
        lines.extend(q.good_points.iter().map(|p| format!("      + {p}")));
        lines.push("    What to improve:".to_string());
        lines.extend(q.improvement_points.iter().map(|p| format!("      ! {p}")));
    }

    lines
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}

fn score_bar(score: f64) -> String {
    let filled = ((score / MAX_SCORE) * BAR_WIDTH as f64)
        .round()
        .clamp(0.0, BAR_WIDTH as f64) as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::fake::sample_result;
    use crate::ui::scripted::ScriptedTerminal;

    fn handoff() -> Option<ResultHandoff> {
        Some(ResultHandoff {
            result: sample_result(),
        })
    }

    #[test]
    fn test_missing_data_redirects_without_rendering() {
        let mut term = ScriptedTerminal::new(vec!["q"]);

        let view = run_result(&mut term, None, 40).unwrap();

        assert_eq!(view, View::Setup);
        assert_eq!(term.alerts, vec![MISSING_RESULT_MESSAGE]);
        assert!(!term.printed("Total score"));
        assert_eq!(term.remaining_input(), 1);
    }

    #[test]
    fn test_renders_summary_and_collapsed_feedback() {
        let mut term = ScriptedTerminal::new(vec!["q"]);

        let view = run_result(&mut term, handoff(), 100).unwrap();

        assert_eq!(view, View::Exit);
        assert!(term.printed("Total score: 72 / 100   Grade: Fair"));
        assert!(term.printed("Job relevance"));
        assert!(term.printed("Needs more concrete examples."));
        assert!(term.printed("[+] Question 1: Q1"));
        assert!(term.printed("[+] Wrap-up: Q2"));
        assert!(!term.printed("Quantify impact"));
    }

    #[test]
    fn test_toggle_expands_only_that_item() {
        let mut term = ScriptedTerminal::new(vec!["t 2", "q"]);

        run_result(&mut term, handoff(), 100).unwrap();

        assert!(term.printed("[-] Wrap-up: Q2"));
        assert!(term.printed("Answer the question"));
        assert!(!term.printed("Quantify impact"));
        assert!(!term.printed("[-] Question 1: Q1"));
    }

    #[test]
    fn test_footer_shown_when_whole_document_fits() {
        let mut term = ScriptedTerminal::new(vec!["r"]);

        let view = run_result(&mut term, handoff(), 100).unwrap();

        assert_eq!(view, View::Setup);
        assert!(term.printed("[r] Retake interview"));
    }

    #[test]
    fn test_scrolling_past_summary_shows_study_shortcut() {
        // 13 summary lines + 13 expanded feedback lines, scrolled 2 lines at a time.
        let mut lines = vec!["t 1", "t 2"];
        lines.extend(vec!["j"; 7]);
        lines.push("q");
        let mut term = ScriptedTerminal::new(lines);

        run_result(&mut term, handoff(), 3).unwrap();

        assert!(term.printed("(s) Study feedback"));
        assert!(!term.printed("[r] Retake interview"));
    }

    #[test]
    fn test_bad_toggle_index_alerts() {
        let mut term = ScriptedTerminal::new(vec!["t 9", "t x", "q"]);

        run_result(&mut term, handoff(), 100).unwrap();

        assert_eq!(term.alerts.len(), 2);
    }

    #[test]
    fn test_score_formatting() {
        assert_eq!(format_score(72.0), "72");
        assert_eq!(format_score(72.5), "72.5");
        assert_eq!(score_bar(50.0), format!("{}{}", "#".repeat(10), ".".repeat(10)));
        assert_eq!(score_bar(140.0), "#".repeat(20));
    }
}
