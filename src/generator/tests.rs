use super::{generate_template_text, GeneratedText, GenerationRequest, GeneratorError, RetryPolicy, TextGenerator};

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;

struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, GeneratorError>>>,
    calls: AtomicU32
}

impl ScriptedGenerator {
    fn new(replies: Vec<Result<String, GeneratorError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: AtomicU32::new(0)
        }
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GeneratorError> {
        assert!(request.prompt.contains("SPBU"));
        self.calls.fetch_add(1, Ordering::SeqCst);

        let next = {
            let mut replies = self.replies.lock().expect("scripted replies lock poisoned");
            replies.pop_front()
        };

        next.unwrap_or_else(|| Err(GeneratorError::Request("no scripted reply".to_string())))
    }
}

fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        attempts: 3,
        base_delay: Duration::from_millis(1)
    }
}

#[test]
fn test_parse_accepts_plain_and_fenced_json() -> Result<()> {
    let plain = GeneratedText::parse(r#"{"address": "Jl. Sudirman 1\nJakarta", "footerNote": "Terima kasih"}"#)?;

    assert_eq!(plain.address, "Jl. Sudirman 1\nJakarta");
    assert_eq!(plain.footer_note, "Terima kasih");

    let fenced = GeneratedText::parse("```json\n{\"address\": \"A\", \"footerNote\": \"B\"}\n```")?;

    assert_eq!(fenced, GeneratedText { address: "A".to_string(), footer_note: "B".to_string() });

    Ok(())
}

#[test]
fn test_parse_rejects_non_json_reply() {
    assert!(matches!(GeneratedText::parse("Sure! Here is an address."), Err(GeneratorError::InvalidResponse(_))));
}

#[test]
fn test_retry_delays_double_each_attempt() {
    let policy = RetryPolicy::default();

    assert_eq!(policy.delay_after(0), Duration::from_secs(1));
    assert_eq!(policy.delay_after(1), Duration::from_secs(2));
    assert_eq!(policy.delay_after(2), Duration::from_secs(4));
}

#[tokio::test]
async fn test_generation_requires_station_name() {
    let generator = ScriptedGenerator::new(vec![]);
    let result = generate_template_text(&generator, "  ", fast_policy()).await;

    assert!(matches!(result, Err(GeneratorError::MissingStationName)));
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_generation_retries_until_a_reply_arrives() -> Result<()> {
    let generator = ScriptedGenerator::new(vec![
        Err(GeneratorError::Request("503".to_string())),
        Ok(r#"{"address": "Jl. Pahlawan 7", "footerNote": "Hati-hati di jalan"}"#.to_string())
    ]);

    let generated = generate_template_text(&generator, "SPBU 44.501", fast_policy()).await?;

    assert_eq!(generated.address, "Jl. Pahlawan 7");
    assert_eq!(generator.calls(), 2);

    Ok(())
}

#[tokio::test]
async fn test_generation_gives_up_after_all_attempts() {
    let generator = ScriptedGenerator::new(vec![
        Err(GeneratorError::Request("timeout".to_string())),
        Err(GeneratorError::Request("timeout".to_string())),
        Err(GeneratorError::Request("quota".to_string()))
    ]);

    let result = generate_template_text(&generator, "SPBU 44.501", fast_policy()).await;

    match result {
        Err(GeneratorError::Exhausted { attempts, last }) => {
            assert_eq!(attempts, 3);
            assert!(last.to_string().contains("quota"));
        }
        other => panic!("Expected exhausted retries, got {other:?}"),
    }

    assert_eq!(generator.calls(), 3);
}

#[tokio::test]
async fn test_invalid_reply_is_not_retried() {
    let generator = ScriptedGenerator::new(vec![
        Ok("not json".to_string()),
        Ok(r#"{"address": "unused"}"#.to_string())
    ]);

    let result = generate_template_text(&generator, "SPBU 44.501", fast_policy()).await;

    assert!(matches!(result, Err(GeneratorError::InvalidResponse(_))));
    assert_eq!(generator.calls(), 1);
}
