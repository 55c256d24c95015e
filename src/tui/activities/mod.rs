//! Activity modules for the TUI.

pub mod form;
pub mod model_preview;

pub use form::FormActivity;
pub use model_preview::ModelPreviewActivity;
