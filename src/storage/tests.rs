use super::{load_templates_file, remaining_selection, save_templates_file, select_template, MemoryTemplateStorage, TemplateStorage};
use crate::models::{StationTemplate, TemplateError};
use anyhow::{anyhow, Result};
use std::io::Write;
use tempfile::NamedTempFile;

fn create_template(id: &str, name: &str) -> StationTemplate {
    StationTemplate {
        id: id.to_string(),
        name: name.to_string(),
        ..StationTemplate::default()
    }
}

#[test]
fn test_storage_basic_load_and_save_operations() -> Result<()> {
    let storage = MemoryTemplateStorage::new();

    assert!(storage.load("spbu-missing").is_none());

    storage.save(create_template("spbu-1", "SPBU 34.101"))?;

    let retrieved = storage.load("spbu-1").ok_or_else(|| anyhow!("Template not found in storage"))?;

    assert_eq!(retrieved.name, "SPBU 34.101");

    Ok(())
}

#[test]
fn test_storage_save_overwrites_existing_template() -> Result<()> {
    let storage = MemoryTemplateStorage::new();
    storage.save(create_template("spbu-1", "Old name"))?;

    let mut updated = storage.load("spbu-1").ok_or_else(|| anyhow!("Template v1 missing"))?;
    updated.footer_note = "Sampai jumpa".to_string();
    storage.save(updated)?;

    let final_template = storage.load("spbu-1").ok_or_else(|| anyhow!("Final template missing"))?;

    assert_eq!(final_template.footer_note, "Sampai jumpa");
    assert_eq!(storage.len(), 1);

    Ok(())
}

#[test]
fn test_storage_rejects_template_without_name() {
    let storage = MemoryTemplateStorage::new();
    let result = storage.save(create_template("spbu-1", ""));

    assert!(matches!(result, Err(TemplateError::MissingName { .. })));
    assert!(storage.is_empty());
}

#[test]
fn test_storage_delete_missing_template_fails() {
    let storage = MemoryTemplateStorage::new();

    assert!(matches!(storage.delete("spbu-9"), Err(TemplateError::NotFound { .. })));
}

#[test]
fn test_storage_lists_templates_in_id_order() -> Result<()> {
    let storage = MemoryTemplateStorage::new();
    storage.save(create_template("spbu-3", "C"))?;
    storage.save(create_template("spbu-1", "A"))?;
    storage.save(create_template("spbu-2", "B"))?;

    let names: Vec<String> = storage.list().into_iter().map(|template| template.name).collect();

    assert_eq!(names, vec!["A", "B", "C"]);

    Ok(())
}

#[test]
fn test_select_template_prefers_selected_then_first_then_default() -> Result<()> {
    let storage = MemoryTemplateStorage::new();

    assert_eq!(select_template(&storage, Some("spbu-2")).name, "SPBU PERTAMINA 00.000.00");

    storage.save(create_template("spbu-1", "First"))?;
    storage.save(create_template("spbu-2", "Second"))?;

    assert_eq!(select_template(&storage, Some("spbu-2")).name, "Second");
    assert_eq!(select_template(&storage, Some("spbu-9")).name, "First");
    assert_eq!(select_template(&storage, None).name, "First");

    Ok(())
}

#[test]
fn test_remaining_selection_after_delete() -> Result<()> {
    let storage = MemoryTemplateStorage::with_templates(vec![
        create_template("spbu-1", "First"),
        create_template("spbu-2", "Second")
    ]);

    storage.delete("spbu-1")?;

    assert_eq!(remaining_selection(&storage).as_deref(), Some("spbu-2"));

    storage.delete("spbu-2")?;

    assert!(remaining_selection(&storage).is_none());

    Ok(())
}

#[test]
fn test_templates_file_survives_a_save_and_load() -> Result<()> {
    let file = NamedTempFile::new()?;
    let mut template = create_template("spbu-1", "SPBU 54.601");
    template.address = "Jl. Raya\nSurabaya".to_string();

    save_templates_file(file.path(), &[template.clone()])?;
    let loaded = load_templates_file(file.path())?;

    assert_eq!(loaded, vec![template]);

    Ok(())
}

#[test]
fn test_templates_file_reports_invalid_json() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{{ not json")?;

    assert!(matches!(load_templates_file(file.path()), Err(TemplateError::Serialization(_))));
    assert!(matches!(load_templates_file(std::path::Path::new("missing-templates.json")), Err(TemplateError::Io(_))));

    Ok(())
}
