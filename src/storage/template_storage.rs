use crate::models::{StationTemplate, TemplateError};
use crate::storage::TemplateStorage;
use crate::types::TemplateId;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::info;

pub struct MemoryTemplateStorage {
    cache: Arc<DashMap<TemplateId, StationTemplate>>
}

impl MemoryTemplateStorage {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new())
        }
    }

    pub fn with_templates(templates: Vec<StationTemplate>) -> Self {
        let storage = Self::new();

        for template in templates {
            storage.cache.insert(template.id.clone(), template);
        }

        storage
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for MemoryTemplateStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStorage for MemoryTemplateStorage {
    fn list(&self) -> Vec<StationTemplate> {
        let mut templates: Vec<StationTemplate> = self.cache.iter()
            .map(|entry| entry.value().clone())
            .collect();

        templates.sort_by(|left, right| left.id.cmp(&right.id));
        templates
    }

    fn load(&self, template_id: &str) -> Option<StationTemplate> {
        self.cache.get(template_id).map(|entry| entry.value().clone())
    }

    fn save(&self, template: StationTemplate) -> Result<(), TemplateError> {
        template.validate()?;

        info!("Saving station template [{}]:[{}]", template.id, template.name);
        self.cache.insert(template.id.clone(), template);

        Ok(())
    }

    fn delete(&self, template_id: &str) -> Result<StationTemplate, TemplateError> {
        let (_, template) = self.cache.remove(template_id)
            .ok_or_else(|| TemplateError::not_found(template_id))?;

        info!("Deleted station template [{template_id}]");

        Ok(template)
    }
}
