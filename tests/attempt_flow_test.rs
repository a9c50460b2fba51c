use edusync_client::dto::result_dto::CreateResultRequest;
use edusync_client::error::Error;
use edusync_client::models::assessment::{Assessment, Question};
use edusync_client::services::attempt_service::{AssessmentAttempt, RecordResults};
use edusync_client::utils::validation::{parse_questions, validate_questions};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Result sink that counts calls and remembers what was posted.
#[derive(Default)]
struct CountingRecorder {
    calls: AtomicUsize,
    last: Mutex<Option<CreateResultRequest>>,
    fail: bool,
}

impl CountingRecorder {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RecordResults for CountingRecorder {
    async fn record(&self, req: &CreateResultRequest) -> edusync_client::error::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(req.clone());
        if self.fail {
            return Err(Error::Api {
                status: 500,
                message: "backend down".to_string(),
            });
        }
        Ok(())
    }
}

fn sample_assessment() -> Assessment {
    Assessment {
        assessment_id: "a-1".to_string(),
        course_id: "c-1".to_string(),
        title: "Geography quiz".to_string(),
        max_score: 100,
        questions: String::new(),
    }
}

fn sample_questions() -> Vec<Question> {
    vec![
        Question {
            question_text: "Capital of France?".to_string(),
            options: vec!["Paris".to_string(), "Lyon".to_string()],
            correct_answer: "Paris".to_string(),
        },
        Question {
            question_text: "Capital of Japan?".to_string(),
            options: vec!["Kyoto".to_string(), "Tokyo".to_string()],
            correct_answer: "Tokyo".to_string(),
        },
    ]
}

#[tokio::test]
async fn submit_posts_exactly_once() {
    let recorder = CountingRecorder::default();
    let mut attempt = AssessmentAttempt::new(sample_assessment(), sample_questions());
    attempt.select_answer(0, "Paris").unwrap();
    attempt.select_answer(1, "Tokyo").unwrap();

    let outcome = attempt.submit(&recorder, "user-1").await.unwrap();
    assert_eq!(outcome.score, 100);
    assert_eq!(recorder.call_count(), 1);

    let posted = recorder.last.lock().unwrap().clone().unwrap();
    assert_eq!(posted.assessment_id, "a-1");
    assert_eq!(posted.user_id, "user-1");
    assert_eq!(posted.score, 100);

    // A second submit is rejected before any network traffic.
    let err = attempt.submit(&recorder, "user-1").await.unwrap_err();
    assert!(matches!(err, Error::BadRequest(_)));
    assert_eq!(recorder.call_count(), 1);
}

#[tokio::test]
async fn failed_post_still_locks_the_attempt() {
    let recorder = CountingRecorder::failing();
    let mut attempt = AssessmentAttempt::new(sample_assessment(), sample_questions());
    attempt.select_answer(0, "Paris").unwrap();

    let err = attempt.submit(&recorder, "user-1").await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 500, .. }));
    assert!(attempt.is_submitted());

    // Retrying does not produce a second post.
    let err = attempt.submit(&recorder, "user-1").await.unwrap_err();
    assert!(matches!(err, Error::BadRequest(_)));
    assert_eq!(recorder.call_count(), 1);

    // The grade was still computed locally.
    assert_eq!(attempt.outcome().unwrap().correct_count, 1);
}

#[tokio::test]
async fn answers_can_be_changed_until_submit() {
    let recorder = CountingRecorder::default();
    let mut attempt = AssessmentAttempt::new(sample_assessment(), sample_questions());

    attempt.select_answer(0, "Lyon").unwrap();
    attempt.select_answer(0, "Paris").unwrap();
    assert_eq!(attempt.answer(0), Some("Paris"));

    attempt.submit(&recorder, "user-1").await.unwrap();

    let err = attempt.select_answer(0, "Lyon").unwrap_err();
    assert!(matches!(err, Error::BadRequest(_)));
    assert_eq!(attempt.answer(0), Some("Paris"));
}

#[test]
fn out_of_range_answer_is_rejected() {
    let mut attempt = AssessmentAttempt::new(sample_assessment(), sample_questions());
    let err = attempt.select_answer(5, "Paris").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn authoring_validation_rejects_bad_payloads() {
    // Not JSON at all.
    assert!(validate_questions("not json").is_err());

    // JSON, but not an array.
    assert!(validate_questions(r#"{"questionText":"Q?"}"#).is_err());

    // Missing question text.
    let missing_text = r#"[{"questionText":"","options":["A"],"correctAnswer":"A"}]"#;
    assert!(validate_questions(missing_text).is_err());

    // No options.
    let no_options = r#"[{"questionText":"Q?","options":[],"correctAnswer":"A"}]"#;
    assert!(validate_questions(no_options).is_err());

    // Missing answer key.
    let no_answer = r#"[{"questionText":"Q?","options":["A","B"]}]"#;
    assert!(validate_questions(no_answer).is_err());

    // A well-formed payload passes.
    let ok = r#"[{"questionText":"Q?","options":["A","B"],"correctAnswer":"B"}]"#;
    let questions = validate_questions(ok).unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].correct_answer, "B");
}

#[test]
fn lenient_decode_tolerates_gaps_and_legacy_keys() {
    // Legacy rows carry the text under "question1".
    let legacy = r#"[{"question1":"Old format?","options":["Yes","No"],"correctAnswer":"Yes"}]"#;
    let questions = parse_questions(legacy).unwrap();
    assert_eq!(questions[0].question_text, "Old format?");

    // Missing fields decode to empty values rather than failing.
    let sparse = r#"[{"questionText":"No key"}]"#;
    let questions = parse_questions(sparse).unwrap();
    assert!(questions[0].options.is_empty());
    assert!(questions[0].correct_answer.is_empty());

    // But it still refuses non-array payloads.
    assert!(parse_questions(r#""just a string""#).is_err());
}
