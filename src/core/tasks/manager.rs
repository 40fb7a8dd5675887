use std::{
    fs,
    sync::mpsc,
    thread,
};

use rfd::FileDialog;

use super::types::TaskResult;
use crate::{
    core::store::EntryStore,
    persistence,
};

/// Runs file dialogs and file I/O off the UI thread and hands results back
/// through a channel drained once per frame.
pub struct TaskManager {
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    next_request: u64,
}

impl TaskManager {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { receiver, sender, next_request: 0 }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    /// Opens a pick dialog and parses the chosen file into a candidate store.
    /// Returns the request id; the caller remembers only the newest id so a
    /// slower, earlier import can never clobber a later one.
    pub fn import_store(&mut self) -> u64 {
        self.next_request += 1;
        let request = self.next_request;
        let sender = self.sender.clone();

        thread::spawn(move || {
            let Some(path) = FileDialog::new().add_filter("JSON", &["json"]).pick_file() else {
                // Dialog cancelled, nothing to report.
                return;
            };

            println!("Importing dataset from: {}", path.display());

            let result = fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|text| EntryStore::from_json(&text).map_err(|e| e.to_string()));

            let _ = sender.send(TaskResult::ImportFinished { request, result });
        });

        request
    }

    pub fn export_store(&self, store: EntryStore) {
        let sender = self.sender.clone();

        thread::spawn(move || {
            let Some(path) = FileDialog::new()
                .add_filter("JSON", &["json"])
                .set_file_name(persistence::export_file_name())
                .save_file()
            else {
                return;
            };

            let result = store
                .to_json_pretty()
                .map_err(|e| e.to_string())
                .and_then(|text| fs::write(&path, text).map_err(|e| e.to_string()))
                .map(|_| path.display().to_string());

            let _ = sender.send(TaskResult::ExportFinished(result));
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Remembers the newest import request the user started. When two dialogs
/// race, only the completion tagged with that id may replace the store; the
/// other is stale and gets dropped.
#[derive(Debug, Default)]
pub struct PendingImport {
    request: Option<u64>,
}

impl PendingImport {
    pub fn begin(&mut self, request: u64) {
        self.request = Some(request);
    }

    /// True when `request` is the awaited one; consumes the pending state so
    /// a duplicate completion is refused as well.
    pub fn accept(&mut self, request: u64) -> bool {
        if self.request == Some(request) {
            self.request = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn superseded_import_completion_is_dropped() {
        let mut pending = PendingImport::default();
        pending.begin(1);
        // A second dialog opens before the first one finishes.
        pending.begin(2);

        assert!(!pending.accept(1));
        assert!(pending.accept(2));
        // Consumed; a repeated completion for the same id is refused too.
        assert!(!pending.accept(2));
    }

    #[test]
    fn unsolicited_completion_is_dropped() {
        let mut pending = PendingImport::default();
        assert!(!pending.accept(7));
    }
}
