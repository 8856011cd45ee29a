use crate::models::StationTemplate;
use crate::types::TemplateId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Station template [{template_id}] has no name")]
    MissingName {
        template_id: TemplateId
    },
    #[error("Station template [{template_id}] was not found")]
    NotFound {
        template_id: TemplateId
    },
    #[error("Station template file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Station template file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error)
}

impl TemplateError {
    pub fn missing_name(template: &StationTemplate) -> Self {
        Self::MissingName { template_id: template.id.clone() }
    }

    pub fn not_found(template_id: &str) -> Self {
        Self::NotFound { template_id: template_id.to_string() }
    }
}
