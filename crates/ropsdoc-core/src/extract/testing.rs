//! Scripted backends for pipeline tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use ropsdoc_backend::{
    AnalyzeResult, BackendError, ChatMessage, Completion, CompletionBackend, OcrBackend, OcrModel,
    SamplingParams,
};

/// OCR backend returning a fixed result.
pub struct MockOcr {
    outcome: Result<AnalyzeResult, String>,
    calls: Mutex<Vec<(usize, OcrModel)>>,
}

impl MockOcr {
    pub fn returning(result: AnalyzeResult) -> Self {
        Self {
            outcome: Ok(result),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Document sizes and models seen so far.
    pub fn calls(&self) -> Vec<(usize, OcrModel)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl OcrBackend for MockOcr {
    async fn analyze(&self, document: &[u8], model: OcrModel) -> ropsdoc_backend::Result<AnalyzeResult> {
        self.calls.lock().unwrap().push((document.len(), model));
        match &self.outcome {
            Ok(result) => Ok(result.clone()),
            Err(message) => Err(BackendError::Http(message.clone())),
        }
    }
}

/// Completion backend answering from a queue of scripted responses.
pub struct MockCompletion {
    responses: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<(Vec<ChatMessage>, SamplingParams)>>,
}

impl MockCompletion {
    pub fn new<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Result<String, String>>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(responses: &[&str]) -> Self {
        Self::new(responses.iter().map(|r| Ok(r.to_string())))
    }

    pub fn requests(&self) -> Vec<(Vec<ChatMessage>, SamplingParams)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionBackend for MockCompletion {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &SamplingParams,
    ) -> ropsdoc_backend::Result<Completion> {
        self.requests
            .lock()
            .unwrap()
            .push((messages.to_vec(), params.clone()));

        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(Completion::from_text(text)),
            Some(Err(message)) => Err(BackendError::Status {
                status: 429,
                body: message,
            }),
            None => Err(BackendError::Malformed("no scripted response".to_string())),
        }
    }
}
