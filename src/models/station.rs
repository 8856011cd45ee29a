use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generator::GeneratedText;
use crate::models::errors::TemplateError;
use crate::types::TemplateId;

pub const DEFAULT_RECEIPT_WIDTH: u32 = 450;

const PIXELS_PER_COLUMN: u32 = 11;
const MIN_COLUMNS: usize = 24;
const MAX_COLUMNS: usize = 64;
const ID_SUFFIX_LENGTH: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A fuel station's receipt header and footer.
///
/// The field names follow the document layout of the template store, so a
/// stored template deserializes as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationTemplate {
    pub id: TemplateId,
    #[serde(default)]
    pub name: String,
    /// Newline separated, printed centered under the name.
    #[serde(default)]
    pub address: String,
    /// Newline separated, printed centered at the bottom.
    #[serde(default)]
    pub footer_note: String,
    /// Receipt width in pixels.
    #[serde(default = "default_receipt_width")]
    pub receipt_width: u32,
    /// Pre-encoded logo image as a data URI.
    #[serde(default)]
    pub logo_base64: Option<String>
}

impl Default for StationTemplate {
    fn default() -> Self {
        Self {
            id: generate_template_id(),
            name: "SPBU PERTAMINA 00.000.00".to_string(),
            address: "ALAMAT SPBU LENGKAP".to_string(),
            footer_note: "Terimakasih dan selamat jalan".to_string(),
            receipt_width: DEFAULT_RECEIPT_WIDTH,
            logo_base64: None
        }
    }
}

impl StationTemplate {
    /// Starting point for a template the user is about to fill in.
    pub fn new_blank() -> Self {
        Self {
            name: "SPBU BARU".to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.name.trim().is_empty() {
            return Err(TemplateError::missing_name(self));
        }

        Ok(())
    }

    /// Sets the width from raw form text, falling back to the default width.
    pub fn set_receipt_width(&mut self, raw: &str) {
        self.receipt_width = match raw.trim().parse::<u32>() {
            Ok(width) if width > 0 => width,
            _ => DEFAULT_RECEIPT_WIDTH
        };
    }

    pub fn set_logo(&mut self, data_uri: String) {
        self.logo_base64 = Some(data_uri);
    }

    pub fn clear_logo(&mut self) {
        self.logo_base64 = None;
    }

    /// Takes generated address and footer text, keeping the current values
    /// where the generator returned nothing.
    pub fn apply_generated(&mut self, generated: &GeneratedText) {
        if !generated.address.trim().is_empty() {
            self.address = generated.address.clone();
        }

        if !generated.footer_note.trim().is_empty() {
            self.footer_note = generated.footer_note.clone();
        }
    }

    /// Number of monospace characters that fit on one receipt line.
    pub fn columns(&self) -> usize {
        let columns = (self.receipt_width / PIXELS_PER_COLUMN) as usize;
        columns.clamp(MIN_COLUMNS, MAX_COLUMNS)
    }

    pub fn address_lines(&self) -> impl Iterator<Item = &str> {
        self.address.split('\n')
    }

    pub fn footer_lines(&self) -> impl Iterator<Item = &str> {
        self.footer_note.split('\n')
    }
}

fn default_receipt_width() -> u32 {
    DEFAULT_RECEIPT_WIDTH
}

/// Builds an id of the form `spbu-{unix millis}-{9 base36 chars}`.
pub fn generate_template_id() -> TemplateId {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LENGTH)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    format!("spbu-{}-{}", Utc::now().timestamp_millis(), suffix)
}
