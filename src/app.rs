use anyhow::Result;

use crate::clipboard::{CopyWorker, SystemClipboard};

pub(crate) struct AppContext {
    copy_worker: CopyWorker,
}

impl AppContext {
    pub(crate) fn new() -> Result<Self> {
        let copy_worker = CopyWorker::spawn(SystemClipboard::new)?;
        Ok(Self { copy_worker })
    }

    pub(crate) fn copy_worker(&self) -> &CopyWorker {
        &self.copy_worker
    }
}
