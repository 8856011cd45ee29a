//! Port to the external text-generation service that drafts a station's
//! address and footer.

mod errors;
mod retry;
#[cfg(test)]
mod tests;

use std::future::Future;

use serde::Deserialize;

pub use errors::GeneratorError;
pub use retry::{generate_template_text, RetryPolicy};

const SYSTEM_INSTRUCTION: &str = "Anda asisten generator nota. Buat alamat fiktif realistis (multi-baris dengan \\n) \
    dan footer profesional untuk SPBU. Balas HANYA JSON: {\"address\": \"...\", \"footerNote\": \"...\"}";

/// Prompt sent to the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_instruction: String
}

impl GenerationRequest {
    pub fn for_station(station_name: &str) -> Self {
        Self {
            prompt: format!("Buatkan data untuk SPBU bernama: \"{station_name}\""),
            system_instruction: SYSTEM_INSTRUCTION.to_string()
        }
    }
}

/// Address and footer text drafted for a station.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedText {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub footer_note: String
}

impl GeneratedText {
    /// Parses the JSON object the service replies with. Replies wrapped in a
    /// markdown code fence are accepted too.
    pub fn parse(reply: &str) -> Result<Self, GeneratorError> {
        let body = strip_code_fence(reply.trim());

        serde_json::from_str(body).map_err(|error| GeneratorError::InvalidResponse(error.to_string()))
    }
}

/// A client of the text-generation service. Implementations return the raw
/// text of the first candidate reply.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, request: &GenerationRequest) -> impl Future<Output = Result<String, GeneratorError>> + Send;
}

fn strip_code_fence(reply: &str) -> &str {
    let Some(inner) = reply.strip_prefix("```") else {
        return reply;
    };

    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
