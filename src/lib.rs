//! Form editor for named string parameters.
//!
//! [`editor::ParameterEditor`] holds the editable state; [`tui`] renders it as an
//! interactive terminal form and [`export`] writes the resulting model.

pub mod cli;
pub mod config;
pub mod editor;
pub mod export;
pub mod logging;
pub mod model;
pub mod tui;
