use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::debug;

use crate::errors::ClientError;
use crate::models::setup::{ExperienceLevel, InterviewSetupRequest, ResumeFile, RESUME_EXTENSIONS};

/// Raw setup input as the user typed it. Kept intact across failed attempts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetupForm {
    pub job_title: String,
    pub experience_level: Option<ExperienceLevel>,
    pub cover_letter: String,
    pub resume_path: Option<PathBuf>,
}

impl SetupForm {
    /// Input-layer checks; nothing is sent when this fails.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.job_title.trim().is_empty() {
            return Err(ClientError::Validation("Job title is required.".to_string()));
        }
        if self.experience_level.is_none() {
            return Err(ClientError::Validation(
                "Experience level is required.".to_string(),
            ));
        }
        if let Some(path) = &self.resume_path {
            check_resume_extension(path)?;
        }
        Ok(())
    }

    /// Validates, then reads the resume (if any) into memory.
    pub async fn to_request(&self) -> Result<InterviewSetupRequest, ClientError> {
        self.validate()?;

        let resume_file = match &self.resume_path {
            Some(path) => Some(read_resume(path).await?),
            None => None,
        };

        let cover_letter = Some(self.cover_letter.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(InterviewSetupRequest {
            job_title: self.job_title.trim().to_string(),
            experience_level: self.experience_level.unwrap_or_default(),
            cover_letter,
            resume_file,
        })
    }
}

fn check_resume_extension(path: &Path) -> Result<(), ClientError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if RESUME_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(ClientError::Validation(format!(
            "Resume must be one of: {}.",
            RESUME_EXTENSIONS
                .iter()
                .map(|e| format!(".{e}"))
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}

async fn read_resume(path: &Path) -> Result<ResumeFile, ClientError> {
    let content = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());

    debug!("Read resume {} ({} bytes)", file_name, content.len());

    Ok(ResumeFile {
        file_name,
        content: Bytes::from(content),
    })
}
