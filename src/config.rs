use std::env;
use std::path::PathBuf;

use crate::types::TemplateId;

pub const TEMPLATES_VAR: &str = "RECEIPT_TEMPLATES";
pub const TEMPLATE_ID_VAR: &str = "RECEIPT_TEMPLATE_ID";
pub const OUTPUT_DIR_VAR: &str = "RECEIPT_OUTPUT_DIR";

/// Runtime settings read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON file holding the stored station templates.
    pub templates_path: Option<PathBuf>,
    /// Template to render with; the first stored one when unset.
    pub template_id: Option<TemplateId>,
    /// Directory the receipt is written to instead of stdout.
    pub output_dir: Option<PathBuf>
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, ignoring blank values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|value| value.trim().to_string()).filter(|value| !value.is_empty());

        Self {
            templates_path: read(TEMPLATES_VAR).map(PathBuf::from),
            template_id: read(TEMPLATE_ID_VAR),
            output_dir: read(OUTPUT_DIR_VAR).map(PathBuf::from)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, OUTPUT_DIR_VAR, TEMPLATES_VAR, TEMPLATE_ID_VAR};
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn test_config_reads_every_setting() {
        let values = HashMap::from([
            (TEMPLATES_VAR, "templates.json"),
            (TEMPLATE_ID_VAR, " spbu-1 "),
            (OUTPUT_DIR_VAR, "out")
        ]);

        let config = AppConfig::from_lookup(|key| values.get(key).map(|value| value.to_string()));

        assert_eq!(config.templates_path, Some(PathBuf::from("templates.json")));
        assert_eq!(config.template_id.as_deref(), Some("spbu-1"));
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_config_treats_blank_values_as_unset() {
        let config = AppConfig::from_lookup(|_| Some("   ".to_string()));

        assert_eq!(config, AppConfig::default());
    }
}
