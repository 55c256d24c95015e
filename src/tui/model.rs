//! Application model for the TUI.

use color_eyre::eyre::{Result, WrapErr};
use tuirealm::Update;

use crate::config::OutputSettings;
use crate::editor::ParameterEditor;
use crate::export::{render_model, write_model};

use super::activities::form::Msg;

/// Application model containing all state.
pub struct Model {
    pub editor: ParameterEditor,
    pub output: OutputSettings,

    // UI state
    pub show_help: bool,
    pub message: Option<String>,
}

impl Model {
    pub fn new(editor: ParameterEditor, output: OutputSettings) -> Self {
        Self {
            editor,
            output,
            show_help: false,
            message: None,
        }
    }

    /// Current model rendered in the configured output format.
    pub fn rendered_model(&self) -> Result<String> {
        render_model(&self.editor.get_model(), self.output.format)
            .wrap_err("Failed to render model")
    }

    /// Write the current model to the configured output file.
    pub fn export(&mut self) -> Result<()> {
        match self.output.path.clone() {
            Some(path) => {
                write_model(&self.editor.get_model(), self.output.format, &path)
                    .wrap_err_with(|| format!("Failed to write to {}", path.display()))?;
                self.message = Some(format!("Wrote model to {}", path.display()));
            }
            None => {
                self.message = Some("No output file configured (use --output)".to_string());
            }
        }
        Ok(())
    }
}

impl Update<Msg> for Model {
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;

        match msg {
            Msg::ParamChanged(id, value) => {
                self.editor.handle_change(id, value);
                self.message = None;
                None
            }

            Msg::Submit => {
                let model = self.editor.get_model();
                tracing::info!(?model, "model submitted");
                Some(Msg::SwitchToPreview)
            }

            Msg::ShowHelp => {
                self.show_help = true;
                None
            }
            Msg::HideHelp => {
                self.show_help = false;
                None
            }

            // Handled by the activity
            Msg::Quit | Msg::SwitchToPreview => None,
        }
    }
}
