pub mod errors;
pub mod quiz;
pub mod review;
pub mod store;
pub mod tasks;

pub use errors::KanshuError;
pub use quiz::{
    QuizSession,
    Score,
};
pub use review::ReviewTracker;
pub use store::{
    Bucket,
    Entry,
    EntryStore,
    PairColumn,
    TextField,
};
