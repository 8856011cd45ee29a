use std::fs;
use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing::level_filters::LevelFilter;

use fuel_receipt_generator::config::AppConfig;
use fuel_receipt_generator::engine::ReplayEngine;
use fuel_receipt_generator::models::TransactionForm;
use fuel_receipt_generator::render::render_receipt;
use fuel_receipt_generator::storage::{load_templates_file, select_template, MemoryTemplateStorage};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: fuel-receipt-generator [edits].csv [log_level:optional] > [receipt].txt");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        eprintln!("Environment: RECEIPT_TEMPLATES, RECEIPT_TEMPLATE_ID, RECEIPT_OUTPUT_DIR");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|level| parse_log_level(level)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let config = AppConfig::from_env();

    let storage = match &config.templates_path {
        Some(templates_path) => {
            let templates = load_templates_file(templates_path)
                .with_context(|| format!("Could not load station templates from {}", templates_path.display()))?;
            MemoryTemplateStorage::with_templates(templates)
        }
        None => MemoryTemplateStorage::new()
    };

    let station = select_template(&storage, config.template_id.as_deref());
    info!("Rendering with station template [{}]:[{}]", station.id, station.name);

    let timer = Instant::now();
    let form = ReplayEngine::new(TransactionForm::default()).run(path).await?;
    let duration = timer.elapsed();

    info!("Replayed form edits in: {duration:?}");

    let receipt = render_receipt(&station, &form);

    match &config.output_dir {
        Some(output_dir) => {
            let target = output_dir.join(form.export_file_name("txt"));
            fs::write(&target, &receipt)
                .with_context(|| format!("Could not write receipt to {}", target.display()))?;
            info!("Receipt written to {}", target.display());
        }
        None => write_receipt_to_stdout(&receipt)?
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or_else(|_| {
        eprintln!("Unknown log level '{level}', logging errors only");
        LevelFilter::ERROR
    })
}

/// Receipts are written to stdout, so every log line goes to stderr.
fn setup_logging(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_writer(stderr)
        .with_target(false)
        .with_max_level(level)
        .init();
}

fn write_receipt_to_stdout(receipt: &str) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    output.write_all(receipt.as_bytes())?;
    output.flush()?;

    Ok(())
}
