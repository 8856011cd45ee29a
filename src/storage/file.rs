use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::models::{StationTemplate, TemplateError};

/// Reads a JSON array of station templates.
pub fn load_templates_file(path: &Path) -> Result<Vec<StationTemplate>, TemplateError> {
    let file = File::open(path)?;
    let templates: Vec<StationTemplate> = serde_json::from_reader(BufReader::new(file))?;

    debug!("Loaded {} station templates from {}", templates.len(), path.display());

    Ok(templates)
}

/// Writes station templates as a pretty-printed JSON array, replacing the file.
pub fn save_templates_file(path: &Path, templates: &[StationTemplate]) -> Result<(), TemplateError> {
    let mut writer = BufWriter::new(File::create(path)?);

    serde_json::to_writer_pretty(&mut writer, templates)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    debug!("Saved {} station templates to {}", templates.len(), path.display());

    Ok(())
}
