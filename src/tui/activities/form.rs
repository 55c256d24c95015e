//! Form activity - the parameter editing screen.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::{Result, eyre};
use ratatui::{
    Terminal,
    crossterm::event::{self, Event},
    layout::{Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{Application, EventListenerCfg, PollStrategy, Update};

use crate::model::ParamId;
use crate::tui::Model;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{
    FORM_FOOTER_ACTIONS, ParamForm, Screen, format_footer, render_help,
};

// ============================================================================
// Component identifiers (scoped to FormActivity)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    Form,
}

// ============================================================================
// Messages (scoped to FormActivity)
// ============================================================================

/// All possible messages that can be sent in FormActivity.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // Application control
    Quit,
    ShowHelp,
    HideHelp,

    /// Full new value of one input, sent on every keystroke
    ParamChanged(ParamId, String),

    // Submit flow
    Submit,
    SwitchToPreview,
}

/// Custom user events (currently unused, but required by tui-realm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

// ============================================================================
// FormActivity
// ============================================================================

#[derive(Default)]
pub struct FormActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
}

impl FormActivity {
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    fn mount_components(app: &mut Application<Id, Msg, UserEvent>, model: &Model) -> Result<()> {
        let form = ParamForm::new(model.editor.fields());
        app.mount(Id::Form, Box::new(form), vec![])?;
        app.active(&Id::Form)?;
        Ok(())
    }
}

impl Activity for FormActivity {
    fn on_create(&mut self, context: Context) {
        let mut app = Self::create_application();
        if let Err(e) = Self::mount_components(&mut app, &context.model) {
            tracing::error!("Failed to mount components: {}", e);
        }

        self.context = Some(context);
        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let app = self
            .app
            .as_mut()
            .ok_or_else(|| eyre!("form activity drawn before creation"))?;
        let model = &mut self
            .context
            .as_mut()
            .ok_or_else(|| eyre!("form activity has no context"))?
            .model;

        terminal.draw(|frame| {
            let area = frame.area();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title
                    Constraint::Min(3),    // Form
                    Constraint::Length(1), // Status
                ])
                .split(area);

            let title = Paragraph::new(" Parameter editor ")
                .style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title, rows[0]);

            let block = Block::default().title(" Parameters ").borders(Borders::ALL);
            let inner = block.inner(rows[1]);
            frame.render_widget(block, rows[1]);
            app.view(&Id::Form, frame, inner);

            let status = model.message.clone().unwrap_or_else(|| {
                format_footer(
                    Screen::Form,
                    FORM_FOOTER_ACTIONS,
                    &[("save", "Enter"), ("quit", "Esc")],
                )
            });
            let status_widget =
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(status_widget, rows[2]);

            if model.show_help {
                render_help(frame, Screen::Form, model.editor.fields());
            }
        })?;

        // Help modal intercepts all input when visible
        if model.show_help {
            if let Event::Key(_) = event::read()? {
                model.update(Some(Msg::HideHelp));
            }
            return Ok(());
        }

        // Timeout is fine, just continue
        if let Ok(messages) = app.tick(PollStrategy::Once) {
            for msg in messages {
                if matches!(msg, Msg::Quit) {
                    self.exit_reason = Some(ExitReason::Quit);
                    return Ok(());
                }

                // Process through model, handle chained messages
                let mut current = Some(msg);
                while let Some(m) = current {
                    if matches!(m, Msg::SwitchToPreview) {
                        self.exit_reason = Some(ExitReason::SwitchToPreview);
                        return Ok(());
                    }
                    current = model.update(Some(m));
                }
            }
        }

        Ok(())
    }

    fn will_umount(&self) -> Option<&ExitReason> {
        self.exit_reason.as_ref()
    }

    fn on_destroy(&mut self) -> Option<Context> {
        self.app = None;
        self.context.take()
    }
}
