//! Model preview activity - shows the submitted model.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::{Result, eyre};
use crossterm_actions::{AppEvent, InputEvent, NavigationEvent, TuiEvent};
use ratatui::{
    Terminal,
    crossterm::event::{self, Event as TermEvent},
    layout::{Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    widgets::Paragraph,
};
use tuirealm::{
    Application, Component, Event, EventListenerCfg, MockComponent, PollStrategy,
    command::{Cmd, Direction as CmdDirection},
    event::Key,
};

use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::Model;
use crate::tui::components::{
    ModelView, PREVIEW_FOOTER_ACTIONS, Screen, format_footer, render_help,
};
use crate::tui::{AppAction, dispatcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    ModelView,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Quit,
    Back,
    ShowHelp,
    WriteModel,
    ScrollUp,
    ScrollDown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

impl Component<Msg, UserEvent> for ModelView {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        if key_event.code == Key::Esc {
            return Some(Msg::Back);
        }

        let action = dispatcher().dispatch(&key_event)?;

        match action {
            AppAction::Tui(TuiEvent::App(AppEvent::Quit)) => Some(Msg::Quit),
            AppAction::Tui(TuiEvent::App(AppEvent::Help)) => Some(Msg::ShowHelp),
            AppAction::Tui(TuiEvent::Input(InputEvent::Confirm))
            | AppAction::Tui(TuiEvent::Input(InputEvent::Cancel)) => Some(Msg::Back),
            AppAction::WriteModel => Some(Msg::WriteModel),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                self.perform(Cmd::Scroll(CmdDirection::Up));
                Some(Msg::ScrollUp)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                self.perform(Cmd::Scroll(CmdDirection::Down));
                Some(Msg::ScrollDown)
            }
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct ModelPreviewActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
}

impl ModelPreviewActivity {
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    fn mount_components(app: &mut Application<Id, Msg, UserEvent>, model: &Model) -> Result<()> {
        let text = model.rendered_model().unwrap_or_else(|e| format!("{e:#}"));
        let view = ModelView::new(&text, model.editor.colors().to_vec());
        app.mount(Id::ModelView, Box::new(view), vec![])?;
        app.active(&Id::ModelView)?;
        Ok(())
    }
}

impl Activity for ModelPreviewActivity {
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
            .ok_or_else(|| eyre!("preview activity drawn before creation"))?;
        let model = &mut self
            .context
            .as_mut()
            .ok_or_else(|| eyre!("preview activity has no context"))?
            .model;

        terminal.draw(|frame| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title
                    Constraint::Min(4),    // Model
                    Constraint::Length(1), // Status
                ])
                .split(frame.area());

            let title = format!(" Model - {:?} ", model.output.format).to_lowercase();
            let title_widget =
                Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title_widget, rows[0]);

            app.view(&Id::ModelView, frame, rows[1]);

            let status = model
                .message
                .clone()
                .unwrap_or_else(|| {
                    format_footer(Screen::Preview, PREVIEW_FOOTER_ACTIONS, &[("back", "Esc")])
                });
            let status_widget =
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(status_widget, rows[2]);

            if model.show_help {
                render_help(frame, Screen::Preview, model.editor.fields());
            }
        })?;

        if model.show_help {
            if let TermEvent::Key(_) = event::read()? {
                model.show_help = false;
            }
            return Ok(());
        }

        if let Ok(messages) = app.tick(PollStrategy::Once) {
            for msg in messages {
                match msg {
                    Msg::Quit => {
                        self.exit_reason = Some(ExitReason::Quit);
                        return Ok(());
                    }
                    Msg::Back => {
                        model.message = None;
                        self.exit_reason = Some(ExitReason::SwitchToForm);
                        return Ok(());
                    }
                    Msg::ShowHelp => model.show_help = true,
                    Msg::WriteModel => {
                        if let Err(e) = model.export() {
                            tracing::error!("Export failed: {e:#}");
                            model.message = Some(format!("Export failed: {e}"));
                        }
                    }
                    Msg::ScrollUp | Msg::ScrollDown => {
                        // Already handled in component
                    }
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

#[cfg(test)]
mod tests {
    use tuirealm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: Key) -> Event<UserEvent> {
        Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn view() -> ModelView {
        ModelView::new("{\n  \"paramValues\": []\n}", Vec::new())
    }

    #[test]
    fn help_key_opens_overlay() {
        assert_eq!(view().on(key(Key::Function(1))), Some(Msg::ShowHelp));
    }

    #[test]
    fn esc_goes_back_and_w_writes() {
        let mut view = view();
        assert_eq!(view.on(key(Key::Esc)), Some(Msg::Back));
        assert_eq!(view.on(key(Key::Char('w'))), Some(Msg::WriteModel));
    }
}
