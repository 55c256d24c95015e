//! TUI components using tui-realm.

pub mod form;
pub mod help;
pub mod model_view;

pub use form::ParamForm;
pub use help::{FORM_FOOTER_ACTIONS, PREVIEW_FOOTER_ACTIONS, Screen, format_footer, render_help};
pub use model_view::ModelView;
