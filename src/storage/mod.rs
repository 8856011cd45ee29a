mod file;
mod template_storage;
#[cfg(test)]
mod tests;

use tracing::debug;

use crate::models::{StationTemplate, TemplateError};
use crate::types::TemplateId;

pub use file::{load_templates_file, save_templates_file};
pub use template_storage::MemoryTemplateStorage;

/// Boundary to the document store that keeps station templates.
pub trait TemplateStorage: Send + Sync + 'static {
    /// All templates, ordered by id.
    fn list(&self) -> Vec<StationTemplate>;
    fn load(&self, template_id: &str) -> Option<StationTemplate>;
    /// Inserts or replaces a template after checking it has a name.
    fn save(&self, template: StationTemplate) -> Result<(), TemplateError>;
    fn delete(&self, template_id: &str) -> Result<StationTemplate, TemplateError>;
}

/// Picks the template to render with.
///
/// The selected id wins when it exists, then the first stored template, then
/// the built-in default.
pub fn select_template<S: TemplateStorage + ?Sized>(storage: &S, selected: Option<&str>) -> StationTemplate {
    if let Some(template) = selected.and_then(|template_id| storage.load(template_id)) {
        return template;
    }

    if let Some(template_id) = selected {
        debug!("Selected station template [{template_id}] is not stored, falling back");
    }

    storage.list().into_iter().next().unwrap_or_default()
}

/// Id to select once the current template has been deleted.
pub fn remaining_selection<S: TemplateStorage + ?Sized>(storage: &S) -> Option<TemplateId> {
    storage.list().into_iter().next().map(|template| template.id)
}
