use crate::core::store::EntryStore;

#[derive(Debug)]
pub enum TaskResult {
    /// A finished file import. `request` says which import dialog this
    /// answers; the app drops completions tagged with a superseded id.
    ImportFinished { request: u64, result: Result<EntryStore, String> },

    /// A finished file export, carrying the path that was written.
    ExportFinished(Result<String, String>),
}
