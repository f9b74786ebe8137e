use std::path::PathBuf;

use crate::errors::ClientError;
use crate::models::setup::{ExperienceLevel, EXPERIENCE_LEVELS};
use crate::navigation::View;
use crate::setup::collector::SetupCollector;
use crate::setup::form::SetupForm;
use crate::ui::Terminal;

/// Typed alone on an optional field, drops the previous value.
const CLEAR_TOKEN: &str = "-";

/// Collects the form, creates the interview and returns the next view.
/// Failed attempts keep everything typed so far; an empty answer keeps the old value
/// and `-` clears an optional one.
pub async fn run_setup(
    term: &mut dyn Terminal,
    collector: &mut SetupCollector,
) -> Result<View, ClientError> {
    let mut form = SetupForm::default();

    term.print_line("=== Interview setup ===");
    term.print_line("Tell the AI interviewer about the role.");

    loop {
        if !fill_form(term, &mut form)? {
            return Ok(View::Exit);
        }

        let request = match form.to_request().await {
            Ok(request) => request,
            Err(e) => {
                term.alert(&e.user_message());
                continue;
            }
        };

        term.print_line("Preparing your interview... the AI interviewer is writing questions.");

        match collector.submit(&request).await {
            Ok(view) => return Ok(view),
            Err(e) => term.alert(&format!(
                "Interview request failed. ({})",
                e.user_message()
            )),
        }
    }
}

/// Returns false when input ends.
fn fill_form(term: &mut dyn Terminal, form: &mut SetupForm) -> Result<bool, ClientError> {
    let Some(job_title) = prompt_keep(term, "Job title (required)", &form.job_title)? else {
        return Ok(false);
    };
    form.job_title = job_title;

    for (number, (level, label)) in EXPERIENCE_LEVELS.iter().enumerate() {
        term.print_line(&format!("  {}) {} [{}]", number + 1, label, level));
    }
    let current_level = form
        .experience_level
        .map(|l| l.as_str().to_string())
        .unwrap_or_default();
    let Some(level) = prompt_keep(term, "Experience level (required)", &current_level)? else {
        return Ok(false);
    };
    form.experience_level = match level.parse::<ExperienceLevel>() {
        Ok(level) => Some(level),
        Err(_) if level.trim().is_empty() => None,
        Err(e) => {
            term.alert(&e);
            None
        }
    };

    term.print_line("Cover letter (optional, - to clear). Finish with an empty line.");
    let Some(cover_letter) = read_paragraph(term)? else {
        return Ok(false);
    };
    if cover_letter.trim() == CLEAR_TOKEN {
        form.cover_letter.clear();
    } else if !cover_letter.is_empty() {
        form.cover_letter = cover_letter;
    }

    let current_resume = form
        .resume_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let Some(resume) = prompt_keep(
        term,
        "Resume file .txt/.pdf/.docx (optional, - to clear)",
        &current_resume,
    )?
    else {
        return Ok(false);
    };
    form.resume_path = Some(resume.trim())
        .filter(|p| !p.is_empty() && *p != CLEAR_TOKEN)
        .map(PathBuf::from);

    Ok(true)
}

fn prompt_keep(
    term: &mut dyn Terminal,
    label: &str,
    current: &str,
) -> Result<Option<String>, ClientError> {
    let prompt = if current.is_empty() {
        label.to_string()
    } else {
        format!("{label} [{current}]")
    };

    Ok(term.read_line(&prompt)?.map(|line| {
        if line.trim().is_empty() {
            current.to_string()
        } else {
            line
        }
    }))
}

fn read_paragraph(term: &mut dyn Terminal) -> Result<Option<String>, ClientError> {
    let mut lines = Vec::new();
    loop {
        match term.read_line("|")? {
            None => return Ok(None),
            Some(line) if line.trim().is_empty() => break,
            Some(line) => lines.push(line),
        }
    }
    Ok(Some(lines.join("\n")))
}
