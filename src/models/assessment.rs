use serde::{Deserialize, Serialize};

/// An instructor-authored quiz. `questions` is carried as encoded JSON text
/// by the backend; decode it with `utils::validation::parse_questions` before
/// grading or display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub assessment_id: String,
    pub course_id: String,
    pub title: String,
    pub max_score: i32,
    pub questions: String,
}

/// One decoded element of an assessment's question payload. Option order is
/// display order only; correctness is decided against `correct_answer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    // Older backend rows serialize the text under "question1".
    #[serde(alias = "question1", default)]
    pub question_text: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: String,
}
