use crate::actors::FormActor;
use crate::models::{FormEdit, TransactionForm};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::BufReader;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{error, info, warn};

/// Replays a recorded stream of form edits against a transaction form.
pub struct ReplayEngine {
    form: TransactionForm,
    backpressure: usize
}

impl ReplayEngine {
    /// Creates an engine that starts from `form`.
    pub fn new(form: TransactionForm) -> Self {
        Self {
            form,
            backpressure: 256
        }
    }

    /// Reads `field,value` records from the CSV at `path` and applies them in
    /// order, returning the resulting form.
    pub async fn run(self, path: &str) -> anyhow::Result<TransactionForm> {
        let (sender, receiver) = mpsc::channel::<FormEdit>(self.backpressure);
        let csv_handle = Self::spawn_csv_reader(path.to_string(), sender);
        let form = Self::apply_edits(self.form, receiver).await;

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        form
    }

    fn spawn_csv_reader(path: String, sender: mpsc::Sender<FormEdit>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let reader = match File::open(&path) {
                Ok(file) => ReaderBuilder::new()
                    .trim(Trim::All)
                    .flexible(true)
                    .from_reader(BufReader::new(file)),
                Err(error) => {
                    error!("Edit stream {path} could not be opened, keeping the initial form | {error}");
                    return;
                }
            };

            let mut skipped = 0usize;

            for (row, result) in reader.into_deserialize::<FormEdit>().enumerate() {
                let edit = match result {
                    Ok(edit) => edit,
                    Err(error) => {
                        skipped += 1;
                        error!("Edit row {} skipped: {error}", row + 1);
                        continue;
                    }
                };

                if sender.blocking_send(edit).is_err() {
                    warn!("Form session closed while edits were still being read");
                    break;
                }
            }

            if skipped > 0 {
                warn!("{skipped} malformed edit rows skipped in {path}");
            }
        })
    }

    async fn apply_edits(form: TransactionForm, mut receiver: mpsc::Receiver<FormEdit>) -> anyhow::Result<TransactionForm> {
        let session = FormActor::spawn(form);
        let mut applied = 0usize;

        while let Some(edit) = receiver.recv().await {
            if !session.accept(edit) {
                error!("Form session stopped before every edit was applied");
                break;
            }
            applied += 1;
        }

        let form = session.finish().await?;

        info!("Replayed {applied} form edits");

        Ok(form)
    }
}
