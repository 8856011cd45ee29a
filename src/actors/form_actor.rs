use tokio::spawn;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::models::{FormEdit, TransactionForm};

pub struct FormActor;

/// Handle to a running form actor.
pub struct FormSession {
    sender: mpsc::UnboundedSender<FormEdit>,
    handle: JoinHandle<TransactionForm>
}

impl FormActor {
    /// Spawns an actor that owns `form` and applies edits in arrival order.
    pub fn spawn(form: TransactionForm) -> FormSession {
        let (sender, mut receiver) = mpsc::unbounded_channel::<FormEdit>();

        let handle = spawn(async move {
            let mut form = form;

            while let Some(edit) = receiver.recv().await {
                form.apply(&edit);

                let reconciliation = form.reconcile();
                debug!(
                    "Edit [{:?}] applied | volume [{}] total [{}] derived [{}]",
                    edit.field,
                    reconciliation.derived_volume,
                    reconciliation.derived_total,
                    reconciliation.volume_is_derived
                );
            }

            form
        });

        FormSession { sender, handle }
    }
}

impl FormSession {
    /// Queues an edit. Returns false once the actor has stopped.
    pub fn accept(&self, edit: FormEdit) -> bool {
        self.sender.send(edit).is_ok()
    }

    /// Closes the session and waits for every queued edit to be applied.
    pub async fn finish(self) -> Result<TransactionForm, tokio::task::JoinError> {
        drop(self.sender);
        self.handle.await
    }
}
