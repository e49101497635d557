//! Business Details UI Module
//!
//! MVVM:
//! - model.rs: submit (validate, POST, navigate)
//! - view_model.rs: form state and commands
//! - view.rs / machinery.rs: Leptos components

mod machinery;
mod model;
mod view;
mod view_model;

pub use model::{submit_business, SubmitError, CREATE_ERROR_MESSAGE};
pub use view::BusinessDetails;
pub use view_model::BusinessDetailsViewModel;
