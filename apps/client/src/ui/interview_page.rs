use tracing::info;

use crate::errors::ClientError;
use crate::gateway::InterviewGateway;
use crate::navigation::View;
use crate::session::controller::{Advance, SessionController};
use crate::ui::Terminal;

const HELP: &str = "Type your answer (start with :: for an answer beginning with ':'). Commands: :a <text> append line, :n next/submit, :p previous, :g <n> go to question, :q quit";

enum Command {
    SetAnswer(String),
    AppendLine(String),
    Next,
    Prev,
    Jump(usize),
    Help,
    Quit,
    Invalid(String),
}

fn parse_command(line: &str) -> Command {
    let Some(rest) = line.strip_prefix(':') else {
        return Command::SetAnswer(line.to_string());
    };
    if rest.starts_with(':') {
        return Command::SetAnswer(rest.to_string());
    }

    let (cmd, arg) = rest.split_once(' ').unwrap_or((rest, ""));
    match cmd {
        "a" => Command::AppendLine(arg.to_string()),
        "n" => Command::Next,
        "p" => Command::Prev,
        "g" => match arg.trim().parse::<usize>() {
            Ok(n) if n >= 1 => Command::Jump(n - 1),
            _ => Command::Invalid(format!("Not a question number: '{}'", arg.trim())),
        },
        "h" | "?" => Command::Help,
        "q" => Command::Quit,
        other => Command::Invalid(format!("Unknown command ':{other}'")),
    }
}

/// Drives one session until it is submitted (→ Result) or abandoned (→ Exit).
pub async fn run_interview(
    term: &mut dyn Terminal,
    gateway: &dyn InterviewGateway,
    mut session: SessionController,
) -> Result<View, ClientError> {
    info!(
        "Interview {} started with {} questions",
        session.interview_id(),
        session.questions().len()
    );
    term.print_line(HELP);

    loop {
        render(term, &session);

        let Some(line) = term.read_line("answer")? else {
            return Ok(View::Exit);
        };

        match parse_command(&line) {
            Command::SetAnswer(text) => {
                session.edit_answer(text);
            }
            Command::AppendLine(text) => {
                let combined = if session.current_answer().is_empty() {
                    text
                } else {
                    format!("{}\n{}", session.current_answer(), text)
                };
                session.edit_answer(combined);
            }
            Command::Prev => {
                if session.go_prev() == Advance::Unchanged {
                    term.print_line("Already at the first question.");
                }
            }
            Command::Jump(index) => {
                if session.jump_to(index) == Advance::Unchanged {
                    term.alert(&format!(
                        "There is no question {}.",
                        index + 1
                    ));
                }
            }
            Command::Next => {
                let advance = session.go_next(|| term.confirm("Submit all answers?"));
                if let Advance::Submit(qna_list) = advance {
                    term.print_line("The AI interviewer is analyzing your answers.");
                    term.print_line("This can take a little while, please wait...");

                    match session.submit(gateway, qna_list).await {
                        Ok(handoff) => {
                            return Ok(View::Result {
                                handoff: Some(handoff),
                            })
                        }
                        Err(e) => term.alert(&e.user_message()),
                    }
                }
            }
            Command::Help => term.print_line(HELP),
            Command::Quit => return Ok(View::Exit),
            Command::Invalid(msg) => term.alert(&msg),
        }
    }
}

fn render(term: &mut dyn Terminal, session: &SessionController) {
    let bar: String = session
        .progress()
        .iter()
        .map(|segment| match (segment.current, segment.answered) {
            (true, true) => "[*]",
            (true, false) => "[>]",
            (false, true) => "[x]",
            (false, false) => "[ ]",
        })
        .collect();

    term.print_line("");
    term.print_line(&format!(
        "{}  | Interview in progress | {}",
        session.header(),
        session.position_label()
    ));
    term.print_line(&format!(
        "{bar}  {} of {} answered",
        session.answered_count(),
        session.questions().len()
    ));
    term.print_line(&format!("Question {}", session.current_index() + 1));
    term.print_line(&session.current_question().title);
    if session.current_answer().is_empty() {
        term.print_line("  (no answer yet)");
    } else {
        for line in session.current_answer().lines() {
            term.print_line(&format!("  {line}"));
        }
    }
    term.print_line(&format!("{} chars", session.char_count()));
    term.print_line(if session.is_last() {
        ":n submits all answers"
    } else {
        ":n next question"
    });
}
