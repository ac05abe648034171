use std::collections::HashMap;
use std::fs;

use quiz_pilot::{
    launch_browser, Answer, AnswerService, ChatBackend, Config, LexicalScorer, LlmService,
    QuestionKind, QuizAutomator, QuizResult, QuizSession,
};

/// Offline stand-in for the chat-completion service.
struct CannedBackend(&'static str);

impl ChatBackend for CannedBackend {
    fn complete(
        &self,
        _user_message: &str,
        _system_message: Option<&str>,
    ) -> impl std::future::Future<Output = quiz_pilot::Result<String>> + Send {
        let reply = self.0.to_string();
        async move { Ok(reply) }
    }
}

const LESSON: &str = "Paris is the capital of France. \
                      The Seine flows through the city. \
                      The Eiffel Tower was completed in 1889.";

const QUIZ: &str = "1. What is the capital of France?\n\
                    2. Which river flows through Paris?\n\
                    3. When was the Eiffel Tower completed?";

#[tokio::test]
async fn full_multiple_choice_pipeline() {
    let mut session = QuizSession::new();
    session.load_lesson(LESSON).await.unwrap();
    session.extract_questions(QUIZ);
    assert_eq!(session.questions().len(), 3);

    let service: AnswerService<_, LlmService> =
        AnswerService::new(LexicalScorer, None, 0.75, false);
    let kind = QuestionKind::MultipleChoice {
        options: vec!["Paris".to_string(), "Berlin".to_string()],
    };
    session.generate_answers(&service, &kind).await.unwrap();
    assert_eq!(session.answers().len(), session.questions().len());

    for answer in session.answers() {
        assert!(matches!(answer, Answer::Choice { .. }));
        assert!((0.0..=1.0).contains(&answer.confidence()));
    }
}

#[tokio::test]
async fn full_short_answer_pipeline_with_stub_backend() {
    let mut session = QuizSession::new();
    session.load_lesson(LESSON).await.unwrap();
    session.extract_questions(QUIZ);

    let service = AnswerService::new(
        LexicalScorer,
        Some(CannedBackend("A fact from the lesson.")),
        0.75,
        false,
    );
    session
        .generate_answers(&service, &QuestionKind::ShortAnswer)
        .await
        .unwrap();

    assert_eq!(session.answers().len(), 3);
    for answer in session.answers() {
        assert_eq!(answer.text(), "A fact from the lesson.");
        assert_eq!(answer.confidence(), 1.0);
    }
}

#[tokio::test]
async fn results_file_round_trips_through_json() {
    let mut session = QuizSession::new();
    session.load_lesson(LESSON).await.unwrap();
    session.extract_questions(QUIZ);

    let service = AnswerService::new(
        LexicalScorer,
        Some(CannedBackend("Because the lesson says so?")),
        0.75,
        false,
    );
    session
        .generate_answers(&service, &QuestionKind::ShortAnswer)
        .await
        .unwrap();

    let path = std::env::temp_dir().join("quiz_pilot_pipeline_results.json");
    session.save_results(&path).unwrap();

    let reloaded: QuizResult =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(reloaded.questions, session.questions());
    assert_eq!(reloaded.answers, session.answers());
    assert_eq!(
        reloaded.lesson_source,
        format!("{}...", LESSON.chars().take(100).collect::<String>())
    );
    fs::remove_file(&path).ok();
}

// ========== Live tests, run manually: cargo test -- --ignored ==========

#[tokio::test]
#[ignore]
async fn live_browser_login() {
    quiz_pilot::logger::init();
    let config = Config::from_env();

    let (browser, page) = launch_browser(&config).await.expect("browser launch failed");
    let automator = QuizAutomator::new(browser, page, &config);

    let logged_in = automator
        .login(
            &std::env::var("ELEARN_USERNAME").expect("ELEARN_USERNAME must be set"),
            &std::env::var("ELEARN_PASSWORD").expect("ELEARN_PASSWORD must be set"),
        )
        .await;

    automator.close().await.expect("browser close failed");
    assert!(logged_in, "login should succeed with valid credentials");
}

#[tokio::test]
#[ignore]
async fn live_quiz_submission() {
    quiz_pilot::logger::init();
    let config = Config::from_env();

    let (browser, page) = launch_browser(&config).await.expect("browser launch failed");
    let automator = QuizAutomator::new(browser, page, &config);

    let logged_in = automator
        .login(
            &std::env::var("ELEARN_USERNAME").expect("ELEARN_USERNAME must be set"),
            &std::env::var("ELEARN_PASSWORD").expect("ELEARN_PASSWORD must be set"),
        )
        .await;
    assert!(logged_in);

    let quiz_url = std::env::var("ELEARN_QUIZ_URL").expect("ELEARN_QUIZ_URL must be set");
    let mut answers = HashMap::new();
    answers.insert("question-1".to_string(), "Paris".to_string());

    let submitted = automator.submit_quiz(&quiz_url, &answers).await;
    automator.close().await.expect("browser close failed");
    assert!(submitted);
}
