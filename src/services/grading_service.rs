use crate::models::assessment::Question;
use std::collections::HashMap;
use tracing::info;

/// Outcome of grading one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeOutcome {
    /// Scaled score, `round(correct / total * max_score)`.
    pub score: i32,
    pub correct_count: usize,
    pub total_questions: usize,
}

#[derive(Clone, Default)]
pub struct GradingService;

impl GradingService {
    pub fn new() -> Self {
        Self
    }

    /// Grades a set of answers against the question list. Answers are keyed by
    /// question index; a missing or blank answer is wrong, as is any question
    /// with no options to choose from. Comparison ignores case and surrounding
    /// whitespace.
    pub fn grade(
        &self,
        questions: &[Question],
        answers: &HashMap<usize, String>,
        max_score: i32,
    ) -> GradeOutcome {
        let total_questions = questions.len();
        if total_questions == 0 {
            return GradeOutcome {
                score: 0,
                correct_count: 0,
                total_questions: 0,
            };
        }

        let correct_count = questions
            .iter()
            .enumerate()
            .filter(|(idx, q)| is_correct(q, answers.get(idx)))
            .count();

        let score =
            (correct_count as f64 / total_questions as f64 * max_score as f64).round() as i32;

        info!(
            "Graded attempt: {}/{} correct, score {}",
            correct_count, total_questions, score
        );

        GradeOutcome {
            score,
            correct_count,
            total_questions,
        }
    }
}

fn is_correct(question: &Question, answer: Option<&String>) -> bool {
    if question.options.is_empty() {
        return false;
    }
    let key = question.correct_answer.trim();
    if key.is_empty() {
        return false;
    }
    match answer {
        Some(given) => {
            let given = given.trim();
            !given.is_empty() && given.to_lowercase() == key.to_lowercase()
        }
        None => false,
    }
}
