use std::sync::Arc;

use tracing::info;

use crate::errors::ClientError;
use crate::gateway::InterviewGateway;
use crate::navigation::View;
use crate::session::controller::SessionController;
use crate::setup::collector::SetupCollector;
use crate::ui::interview_page::run_interview;
use crate::ui::result_page::run_result;
use crate::ui::setup_page::run_setup;
use crate::ui::Terminal;

/// Runs views one after another until a page returns `View::Exit`.
/// Every view starts from fresh state; only the hand-off crosses over.
pub struct App {
    gateway: Arc<dyn InterviewGateway>,
    result_viewport: usize,
}

impl App {
    pub fn new(gateway: Arc<dyn InterviewGateway>, result_viewport: usize) -> Self {
        Self {
            gateway,
            result_viewport,
        }
    }

    pub async fn run(&self, term: &mut dyn Terminal, start: View) -> Result<(), ClientError> {
        let mut view = start;

        loop {
            info!("Entering {} view", view.name());

            view = match view {
                View::Setup => {
                    let mut collector = SetupCollector::new(self.gateway.clone());
                    run_setup(term, &mut collector).await?
                }
                View::Interview {
                    interview_id,
                    handoff,
                } => {
                    let session = SessionController::new(interview_id, handoff);
                    run_interview(term, self.gateway.as_ref(), session).await?
                }
                View::Result { handoff } => run_result(term, handoff, self.result_viewport)?,
                View::Exit => return Ok(()),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::fake::{sample_result, FakeGateway};
    use crate::ui::scripted::ScriptedTerminal;

    #[tokio::test]
    async fn test_full_flow_setup_to_result() {
        let gateway = Arc::new(
            FakeGateway::new()
                .with_create(Ok(FakeGateway::created("abc123", &["Q1", "Q2"])))
                .with_submit(Ok(sample_result())),
        );
        let app = App::new(gateway.clone(), 100);
        let mut term = ScriptedTerminal::new(vec![
            // setup
            "Rust Developer",
            "2",
            "",
            "",
            // interview
            "Ownership.",
            ":n",
            "Lifetimes.",
            ":n",
            "y",
            // result
            "q",
        ]);

        app.run(&mut term, View::Setup).await.unwrap();

        assert!(term.printed("Rust Developer (junior (1–3 yrs))"));
        assert!(term.printed("Total score: 72 / 100"));
        let calls = gateway.submit_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "abc123");
        let answers: Vec<_> = calls[0].1.iter().map(|e| e.answer.as_str()).collect();
        assert_eq!(answers, vec!["Ownership.", "Lifetimes."]);
    }

    #[tokio::test]
    async fn test_retake_returns_to_fresh_setup() {
        let gateway = Arc::new(FakeGateway::new());
        let app = App::new(gateway, 100);
        let mut term = ScriptedTerminal::new(vec!["r"]);

        app.run(
            &mut term,
            View::Result {
                handoff: Some(crate::navigation::ResultHandoff {
                    result: sample_result(),
                }),
            },
        )
        .await
        .unwrap();

        assert!(term.printed("=== Interview setup ==="));
        assert_eq!(term.prompts.last().map(String::as_str), Some("Job title (required)"));
    }

    #[tokio::test]
    async fn test_direct_result_entry_redirects_to_setup() {
        let gateway = Arc::new(FakeGateway::new());
        let app = App::new(gateway, 100);
        let mut term = ScriptedTerminal::new(Vec::<String>::new());

        app.run(&mut term, View::Result { handoff: None }).await.unwrap();

        assert_eq!(term.alerts.len(), 1);
        assert!(term.printed("=== Interview setup ==="));
    }
}
