pub mod manager;
pub mod types;

pub use manager::{
    PendingImport,
    TaskManager,
};
pub use types::TaskResult;
