use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::generator::{GeneratedText, GenerationRequest, GeneratorError, TextGenerator};

/// Exponential backoff between generation attempts.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub base_delay: Duration
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            base_delay: Duration::from_secs(1)
        }
    }
}

impl RetryPolicy {
    /// Delay after the zero-based `attempt` fails: `base_delay * 2^attempt`.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// Asks the generator for a station's address and footer, retrying failed
/// requests with backoff. A reply that arrives but cannot be parsed is not
/// retried.
pub async fn generate_template_text<G: TextGenerator>(
    generator: &G,
    station_name: &str,
    policy: RetryPolicy
) -> Result<GeneratedText, GeneratorError> {
    if station_name.trim().is_empty() {
        return Err(GeneratorError::MissingStationName);
    }

    let request = GenerationRequest::for_station(station_name);
    let attempts = policy.attempts.max(1);
    let mut last_error = None;

    for attempt in 0..attempts {
        match generator.generate(&request).await {
            Ok(reply) => {
                info!("Generated template text for [{station_name}] on attempt {}", attempt + 1);
                return GeneratedText::parse(&reply);
            }
            Err(error) => {
                warn!("Template text generation attempt {} failed: {error}", attempt + 1);
                last_error = Some(error);

                if attempt + 1 < attempts {
                    sleep(policy.delay_after(attempt)).await;
                }
            }
        }
    }

    let last = last_error.unwrap_or_else(|| GeneratorError::Request("no attempt was made".to_string()));

    Err(GeneratorError::Exhausted { attempts, last: Box::new(last) })
}
