pub mod app;
pub mod error_modal;
pub mod quiz;
pub mod review;
pub mod settings;
pub mod study;
pub mod theme;
pub mod top_bar;

pub use app::KanshuApp;
