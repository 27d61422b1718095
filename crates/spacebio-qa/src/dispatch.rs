//! Question → [`QueryResult`]. Every failure becomes a visible result.

use std::sync::Arc;

use spacebio_common::QueryResult;
use tracing::{info, warn};

use crate::client::AnswerService;
use crate::limit::ResultLimit;

pub struct QueryDispatcher {
    service: Arc<dyn AnswerService>,
    default_top_k: u32,
    max_top_k: u32,
}

impl QueryDispatcher {
    pub fn new(service: Arc<dyn AnswerService>, default_top_k: u32, max_top_k: u32) -> Self {
        Self { service, default_top_k, max_top_k }
    }

    /// Validates the input, asks the service once, and reports the outcome.
    /// Invalid input is reported without contacting the service.
    pub async fn dispatch(&self, question: &str, raw_limit: &str) -> QueryResult {
        let question = question.trim();
        if question.is_empty() {
            return failed(question, "Please enter a question before asking.".to_string());
        }

        let limit = match ResultLimit::parse(raw_limit, self.default_top_k, self.max_top_k) {
            Ok(limit) => limit,
            Err(e) => return failed(question, e.to_string()),
        };

        match self.service.ask(question, limit).await {
            Ok(answer) => {
                info!(snippets = answer.snippets.len(), "Question answered");
                QueryResult::Answered {
                    question: question.to_string(),
                    answer_text: answer.answer_text,
                    snippets: answer.snippets,
                    raw: answer.raw,
                }
            }
            Err(e) => {
                warn!("Question failed: {}", e);
                failed(question, e.to_string())
            }
        }
    }
}

fn failed(question: &str, error_message: String) -> QueryResult {
    QueryResult::Failed { question: question.to_string(), error_message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::Answer;
    use crate::error::QueryError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Records the limit it was asked with and echoes the question back.
    #[derive(Default)]
    struct Echo {
        last_limit: AtomicU32,
    }

    #[async_trait]
    impl AnswerService for Echo {
        async fn ask(&self, question: &str, limit: ResultLimit) -> Result<Answer, QueryError> {
            self.last_limit.store(limit.get(), Ordering::SeqCst);
            Ok(Answer {
                answer_text: format!("echo: {question}"),
                snippets: vec![],
                raw: serde_json::json!({"answer": question}),
            })
        }
    }

    struct Down;

    #[async_trait]
    impl AnswerService for Down {
        async fn ask(&self, _question: &str, _limit: ResultLimit) -> Result<Answer, QueryError> {
            Err(QueryError::Api { status: 503, message: "model loading".into() })
        }
    }

    #[tokio::test]
    async fn test_success_becomes_answered() {
        let echo = Arc::new(Echo::default());
        let dispatcher = QueryDispatcher::new(echo.clone(), 5, 20);

        let result = dispatcher.dispatch("  does radiation matter? ", "50").await;
        match result {
            QueryResult::Answered { question, answer_text, .. } => {
                assert_eq!(question, "does radiation matter?");
                assert_eq!(answer_text, "echo: does radiation matter?");
            }
            other => panic!("expected answer, got {other:?}"),
        }
        assert_eq!(echo.last_limit.load(Ordering::SeqCst), 20);
    }

    #[tokio::test]
    async fn test_service_failure_becomes_failed() {
        let dispatcher = QueryDispatcher::new(Arc::new(Down), 5, 20);
        let result = dispatcher.dispatch("anything", "").await;
        match result {
            QueryResult::Failed { error_message, .. } => assert!(error_message.contains("503")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_limit_never_reaches_service() {
        let echo = Arc::new(Echo::default());
        let dispatcher = QueryDispatcher::new(echo.clone(), 5, 20);

        let result = dispatcher.dispatch("question", "lots").await;
        assert!(result.is_failure());
        assert_eq!(echo.last_limit.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_blank_question_is_rejected() {
        let dispatcher = QueryDispatcher::new(Arc::new(Echo::default()), 5, 20);
        assert!(dispatcher.dispatch("   ", "5").await.is_failure());
    }
}
