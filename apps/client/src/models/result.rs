use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Radar chart axes, in the order of `ResultData::radar_scores`.
pub const RADAR_AXES: [&str; 5] = [
    "Job relevance",
    "Logical structure",
    "Specificity",
    "Key keywords",
    "Professional attitude",
];

/// Keys accepted when the backend sends the radar as an object, one row per
/// axis of `RADAR_AXES`.
const RADAR_KEYS: [[&str; 2]; 5] = [
    ["직무", "job_fit"],
    ["논리", "logic"],
    ["구체성", "specificity"],
    ["키워드", "keywords"],
    ["태도", "attitude"],
];

pub const MAX_SCORE: f64 = 100.0;

/// Scoring payload returned by the submit endpoint. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultData {
    pub total_score: f64,
    pub grade: String,
    #[serde(deserialize_with = "deserialize_radar")]
    pub radar_scores: [f64; 5],
    #[serde(default)]
    pub analysis_text: String,
    #[serde(default)]
    pub questions: Vec<QuestionFeedback>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RadarWire {
    Ordered([f64; 5]),
    Keyed(HashMap<String, f64>),
}

/// Accepts either five scores in axis order or an object keyed by criterion.
fn deserialize_radar<'de, D>(deserializer: D) -> Result<[f64; 5], D::Error>
where
    D: Deserializer<'de>,
{
    match RadarWire::deserialize(deserializer) {
        Ok(RadarWire::Ordered(scores)) => Ok(scores),
        Ok(RadarWire::Keyed(by_key)) => {
            let mut scores = [0.0; 5];
            for (slot, keys) in scores.iter_mut().zip(RADAR_KEYS.iter()) {
                *slot = keys
                    .iter()
                    .find_map(|key| by_key.get(*key).copied())
                    .ok_or_else(|| {
                        serde::de::Error::custom(format!("missing radar score '{}'", keys[0]))
                    })?;
            }
            Ok(scores)
        }
        Err(_) => Err(serde::de::Error::custom(
            "radarScores must be five scores or an object keyed by criterion",
        )),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFeedback {
    #[serde(default)]
    pub label: Option<String>,
    pub title: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub good_points: Vec<String>,
    #[serde(default)]
    pub improvement_points: Vec<String>,
}

impl QuestionFeedback {
    /// Backend label, else "Question <n>" for the 0-based `index`.
    pub fn display_label(&self, index: usize) -> String {
        self.label
            .clone()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| format!("Question {}", index + 1))
    }
}

impl ResultData {
    pub fn radar(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        RADAR_AXES.iter().copied().zip(self.radar_scores.iter().copied())
    }
}
