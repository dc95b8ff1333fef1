use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};

use spoofcheck_core::api::client::SpoofClient;
use spoofcheck_core::api::outcome::ApiOutcome;
use spoofcheck_core::pipeline::check_photo_use_case::CheckPhotoUseCase;
use spoofcheck_core::request::options::CheckOptions;

/// Messages sent from the worker thread to the UI.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    Resolved(ApiOutcome),
    Error(String),
    Cancelled,
}

/// Parameters for one check job.
pub struct CheckParams {
    pub path: PathBuf,
    pub options: CheckOptions,
}

/// Spawn a background check. Returns the channel receiver and cancellation
/// token. The blocking request itself cannot be interrupted, so cancelling
/// discards the eventual result; the client's timeout bounds the thread.
pub fn spawn(params: CheckParams) -> (Receiver<WorkerMessage>, Arc<AtomicBool>) {
    let (tx, rx) = crossbeam_channel::unbounded::<WorkerMessage>();
    let cancelled = Arc::new(AtomicBool::new(false));
    let cancelled_clone = cancelled.clone();

    thread::spawn(move || {
        if let Err(e) = run_check(&tx, &cancelled_clone, &params) {
            if cancelled_clone.load(Ordering::Relaxed) {
                let _ = tx.send(WorkerMessage::Cancelled);
            } else {
                let _ = tx.send(WorkerMessage::Error(e.to_string()));
            }
        }
    });

    (rx, cancelled)
}

fn run_check(
    tx: &Sender<WorkerMessage>,
    cancelled: &Arc<AtomicBool>,
    params: &CheckParams,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = SpoofClient::new()?;
    let use_case = CheckPhotoUseCase::new(client);
    let outcome = use_case.execute(&params.path, &params.options)?;

    if cancelled.load(Ordering::Relaxed) {
        return Err("Cancelled".into());
    }

    let _ = tx.send(WorkerMessage::Resolved(outcome));
    Ok(())
}
