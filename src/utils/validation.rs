use crate::error::{Error, Result};
use crate::models::assessment::Question;
use serde_json::Value as JsonValue;
use validator::Validate;

pub fn validate<T: Validate>(val: &T) -> Result<()> {
    val.validate()?;
    Ok(())
}

/// Decodes a serialized question payload without judging its content.
///
/// Used on the take-assessment path, where an existing assessment must stay
/// gradable even if it was authored with gaps (the grader treats a question
/// with no options or no answer key as never-correct).
pub fn parse_questions(raw: &str) -> Result<Vec<Question>> {
    let value: JsonValue = serde_json::from_str(raw)
        .map_err(|e| Error::Validation(format!("Questions payload is not valid JSON: {}", e)))?;

    let items = value
        .as_array()
        .ok_or_else(|| Error::Validation("Questions payload must be a JSON array".to_string()))?;

    let mut questions = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let question: Question = serde_json::from_value(item.clone())
            .map_err(|e| Error::Validation(format!("Question {} is malformed: {}", idx + 1, e)))?;
        questions.push(question);
    }

    Ok(questions)
}

/// Strict variant used before creating an assessment: every question must
/// carry non-empty text, a non-empty array of options, and a non-empty answer
/// key. Rejected payloads never reach the network.
pub fn validate_questions(raw: &str) -> Result<Vec<Question>> {
    let questions = parse_questions(raw)?;

    for (idx, q) in questions.iter().enumerate() {
        let number = idx + 1;
        if q.question_text.trim().is_empty() {
            return Err(Error::Validation(format!(
                "Question {} is missing its questionText",
                number
            )));
        }
        if q.options.is_empty() {
            return Err(Error::Validation(format!(
                "Question {} must have at least one option",
                number
            )));
        }
        if q.correct_answer.trim().is_empty() {
            return Err(Error::Validation(format!(
                "Question {} is missing its correctAnswer",
                number
            )));
        }
    }

    Ok(questions)
}
