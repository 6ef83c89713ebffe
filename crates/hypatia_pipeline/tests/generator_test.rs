//! Tests for the bounded-retry generation loop and the length guard.

use async_trait::async_trait;
use hypatia_core::{FinishReason, ModelRequest, ModelResponse};
use hypatia_error::{GeminiError, GeminiErrorKind, HypatiaResult};
use hypatia_interface::TextModel;
use hypatia_pipeline::{ScriptGenerator, Verdict};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One scripted reply from the fake provider.
enum Reply {
    Text(String, Option<FinishReason>),
    Error,
}

/// Driver double that pops scripted replies and records every prompt.
struct ScriptedDriver {
    replies: Mutex<VecDeque<Reply>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedDriver {
    fn new(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    fn prompt(&self, index: usize) -> String {
        self.prompts.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl TextModel for ScriptedDriver {
    async fn generate(&self, req: &ModelRequest) -> HypatiaResult<ModelResponse> {
        self.prompts.lock().unwrap().push(req.prompt().clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("driver called more times than scripted");
        match reply {
            Reply::Text(text, finish) => Ok(ModelResponse::new(text, finish)),
            Reply::Error => {
                Err(GeminiError::new(GeminiErrorKind::ApiRequest("scripted failure".into())).into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

/// A compiling script comfortably past the length-guard threshold.
fn long_valid_script() -> String {
    format!(
        "from manim import *\n\nclass MainScene(Scene):\n    def construct(self):\n{}",
        "        self.wait(1)\n".repeat(80)
    )
}

#[tokio::test]
async fn success_on_first_attempt_makes_one_call() {
    let driver = ScriptedDriver::new(vec![Reply::Text(
        long_valid_script(),
        Some(FinishReason::Stop),
    )]);
    let generator = ScriptGenerator::new(driver.clone());

    let out = generator.generate_script("pythagoras").await.unwrap();
    assert_eq!(driver.calls(), 1);
    assert_eq!(out.verdict(), &Verdict::Accepted);
}

#[tokio::test]
async fn success_on_third_attempt_makes_three_calls() {
    let driver = ScriptedDriver::new(vec![
        Reply::Error,
        Reply::Text(String::new(), Some(FinishReason::Stop)),
        Reply::Text(long_valid_script(), Some(FinishReason::Stop)),
    ]);
    let generator = ScriptGenerator::new(driver.clone());

    let out = generator.generate_script("pythagoras").await.unwrap();
    assert_eq!(driver.calls(), 3);
    assert_eq!(out.verdict(), &Verdict::Accepted);
}

#[tokio::test]
async fn exhaustion_after_three_failures() {
    let driver = ScriptedDriver::new(vec![Reply::Error, Reply::Error, Reply::Error]);
    let generator = ScriptGenerator::new(driver.clone());

    let err = generator.generate_script("pythagoras").await.unwrap_err();
    assert_eq!(driver.calls(), 3);
    assert!(err.to_string().contains("3 attempts"));
}

#[tokio::test]
async fn truncation_swaps_in_the_simplified_prompt() {
    let driver = ScriptedDriver::new(vec![
        Reply::Text("partial".into(), Some(FinishReason::MaxTokens)),
        Reply::Text(long_valid_script(), Some(FinishReason::Stop)),
    ]);
    let generator = ScriptGenerator::new(driver.clone());

    generator.generate_script("pythagoras").await.unwrap();
    assert_eq!(driver.calls(), 2);
    assert!(!driver.prompt(0).contains("simple Manim animation"));
    assert!(driver.prompt(1).contains("simple Manim animation"));
}

#[tokio::test]
async fn truncation_on_final_attempt_fails() {
    let driver = ScriptedDriver::new(vec![
        Reply::Text("p".into(), Some(FinishReason::MaxTokens)),
        Reply::Text("p".into(), Some(FinishReason::MaxTokens)),
        Reply::Text("p".into(), Some(FinishReason::MaxTokens)),
    ]);
    let generator = ScriptGenerator::new(driver.clone());

    let err = generator.generate_script("pythagoras").await.unwrap_err();
    assert_eq!(driver.calls(), 3);
    assert!(err.to_string().contains("truncated"));
}

#[tokio::test]
async fn short_candidate_triggers_one_amplified_regeneration() {
    let driver = ScriptedDriver::new(vec![
        Reply::Text("print('stub')".into(), Some(FinishReason::Stop)),
        Reply::Text(long_valid_script(), Some(FinishReason::Stop)),
    ]);
    let generator = ScriptGenerator::new(driver.clone());

    let out = generator.generate_script("pythagoras").await.unwrap();
    assert_eq!(driver.calls(), 2);
    assert!(driver.prompt(1).contains("MUCH longer"));
    assert!(!out.source().contains("stub"));
    assert_eq!(out.verdict(), &Verdict::Accepted);
}

#[tokio::test]
async fn amplified_result_accepted_regardless_of_length() {
    // The retried candidate is still short; the guard is single-shot.
    let driver = ScriptedDriver::new(vec![
        Reply::Text("print('a')".into(), Some(FinishReason::Stop)),
        Reply::Text("x = 1".into(), Some(FinishReason::Stop)),
    ]);
    let generator = ScriptGenerator::new(driver.clone());

    let out = generator.generate_script("pythagoras").await.unwrap();
    assert_eq!(driver.calls(), 2);
    assert!(out.source().contains("x = 1"));
}

#[tokio::test]
async fn broken_candidate_degrades_to_error_scene() {
    let broken = format!(
        "from manim import *\nclass MainScene(Scene):\n    def construct(self):\n{}\n        x = = 1",
        "        self.wait(1)\n".repeat(80)
    );
    let driver = ScriptedDriver::new(vec![Reply::Text(broken, Some(FinishReason::Stop))]);
    let generator = ScriptGenerator::new(driver.clone());

    let out = generator.generate_script("pythagoras").await.unwrap();
    assert_eq!(out.verdict(), &Verdict::Replaced);
    assert!(out.source().contains("Generation Error"));
    assert!(out.source().contains("pythagoras"));
}

#[tokio::test]
async fn chat_empty_reply_yields_apology() {
    let driver = ScriptedDriver::new(vec![Reply::Text("  ".into(), Some(FinishReason::Stop))]);
    let generator = ScriptGenerator::new(driver.clone());

    let reply = generator.chat_response("what is a limit?").await.unwrap();
    assert!(reply.contains("I apologize"));
}

#[tokio::test]
async fn chat_transport_failure_propagates() {
    let driver = ScriptedDriver::new(vec![Reply::Error]);
    let generator = ScriptGenerator::new(driver.clone());

    assert!(generator.chat_response("what is a limit?").await.is_err());
}
