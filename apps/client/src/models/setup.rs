use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Newbie,
    Junior,
    Senior,
}

/// Display labels, enumerated once. Menu order matches the setup form.
pub const EXPERIENCE_LEVELS: [(ExperienceLevel, &str); 3] = [
    (ExperienceLevel::Newbie, "entry-level"),
    (ExperienceLevel::Junior, "junior (1–3 yrs)"),
    (ExperienceLevel::Senior, "senior (5+ yrs)"),
];

impl ExperienceLevel {
    /// Wire value sent as `experience_level`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Newbie => "newbie",
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Senior => "senior",
        }
    }

    pub fn label(&self) -> &'static str {
        EXPERIENCE_LEVELS
            .iter()
            .find(|(level, _)| level == self)
            .map(|(_, label)| *label)
            .unwrap_or("entry-level")
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    /// Accepts the wire value or the 1-based menu number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newbie" | "1" => Ok(ExperienceLevel::Newbie),
            "junior" | "2" => Ok(ExperienceLevel::Junior),
            "senior" | "3" => Ok(ExperienceLevel::Senior),
            other => Err(format!("Unknown experience level '{other}'")),
        }
    }
}

/// Extensions the resume picker accepts.
pub const RESUME_EXTENSIONS: &[&str] = &["txt", "pdf", "docx"];

/// A resume already read into memory, ready to attach to the creation request.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub content: Bytes,
}

impl ResumeFile {
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
    }

    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("txt") => "text/plain",
            Some("pdf") => "application/pdf",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            _ => "application/octet-stream",
        }
    }
}

/// Built at submit time from validated form fields; dropped once the create call returns.
#[derive(Debug, Clone)]
pub struct InterviewSetupRequest {
    pub job_title: String,
    pub experience_level: ExperienceLevel,
    pub cover_letter: Option<String>,
    pub resume_file: Option<ResumeFile>,
}
