use serde::{Deserialize, Serialize};

/// Title of the single stand-in question used when no questions were handed over.
pub const FALLBACK_QUESTION_TITLE: &str = "Could not load question data.";

/// An interview question. Immutable once received from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based, sequential in received order.
    pub id: u32,
    pub title: String,
}

impl Question {
    /// Pairs each generated question text with a synthetic 1-based id.
    pub fn sequence_from_texts<I, S>(texts: I) -> Vec<Question>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(index, title)| Question {
                id: index as u32 + 1,
                title: title.into(),
            })
            .collect()
    }

    pub fn fallback() -> Question {
        Question {
            id: 1,
            title: FALLBACK_QUESTION_TITLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_ids_are_one_based_in_order() {
        let questions = Question::sequence_from_texts(vec!["Q1", "Q2"]);
        assert_eq!(
            questions,
            vec![
                Question {
                    id: 1,
                    title: "Q1".to_string()
                },
                Question {
                    id: 2,
                    title: "Q2".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_empty_texts_give_empty_sequence() {
        let questions = Question::sequence_from_texts(Vec::<String>::new());
        assert!(questions.is_empty());
    }
}
