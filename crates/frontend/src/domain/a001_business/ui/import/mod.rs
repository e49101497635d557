//! Business Import UI Module
//!
//! - pipeline.rs: read -> parse -> POST bulk -> navigate
//! - view_model.rs: import state and command
//! - view.rs: Leptos component

pub mod pipeline;
mod view;
mod view_model;

pub use pipeline::{run_import, ImportGuard, ImportOutcome, ImportState, ImportStateSink};
pub use view::BusinessImport;
pub use view_model::BusinessImportViewModel;
