use anyhow::Result;
use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
};
use tracing::debug;

use crate::{board::CopyRequest, domain::note::NoteId};

mod system;

pub(crate) use system::SystemClipboard;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

pub(crate) trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug)]
pub(crate) struct CopyOutcome {
    pub(crate) id: NoteId,
    pub(crate) result: Result<(), ClipboardError>,
}

/// Performs clipboard writes on a background thread so the event loop never
/// blocks on the system clipboard. Completions are picked up with
/// [`CopyWorker::drain`]; once the worker is dropped, pending completions are
/// discarded.
pub(crate) struct CopyWorker {
    requests: Sender<CopyRequest>,
    outcomes: Receiver<CopyOutcome>,
}

impl CopyWorker {
    /// Starts the worker. The clipboard is built on the worker thread, so it
    /// never has to cross threads.
    pub(crate) fn spawn<C, F>(make_clipboard: F) -> Result<Self>
    where
        C: Clipboard,
        F: FnOnce() -> C + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel();
        let (outcome_tx, outcome_rx) = mpsc::channel();
        thread::Builder::new()
            .name("clipboard".to_string())
            .spawn(move || run_worker(make_clipboard(), request_rx, outcome_tx))?;
        Ok(Self {
            requests: request_tx,
            outcomes: outcome_rx,
        })
    }

    /// Queues a write. Returns `false` when the worker thread has gone away.
    pub(crate) fn submit(&self, request: CopyRequest) -> bool {
        self.requests.send(request).is_ok()
    }

    pub(crate) fn drain(&self) -> Vec<CopyOutcome> {
        self.outcomes.try_iter().collect()
    }

    #[cfg(test)]
    pub(crate) fn recv_timeout(&self, timeout: std::time::Duration) -> Option<CopyOutcome> {
        self.outcomes.recv_timeout(timeout).ok()
    }
}

fn run_worker<C: Clipboard>(
    mut clipboard: C,
    requests: Receiver<CopyRequest>,
    outcomes: Sender<CopyOutcome>,
) {
    for request in requests {
        let result = clipboard.write_text(&request.text);
        let outcome = CopyOutcome {
            id: request.id,
            result,
        };
        if outcomes.send(outcome).is_err() {
            debug!(note_id = %request.id, "copy finished after board shut down");
            break;
        }
    }
}
