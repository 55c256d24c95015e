//! Activity-based architecture for the TUI.
//!
//! Each screen in the TUI is an Activity with its own Application instance,
//! component IDs, and message types. The ActivityManager orchestrates transitions.

use std::io::Stdout;

use color_eyre::eyre::{Result, eyre};
use ratatui::{Terminal, prelude::CrosstermBackend};

use super::Model;
use super::activities::{FormActivity, ModelPreviewActivity};

/// Shared context passed between activities.
pub struct Context {
    pub model: Model,
}

/// Exit reasons for activity transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum ExitReason {
    Quit,
    SwitchToForm,
    SwitchToPreview,
}

/// Activity lifecycle trait.
///
/// Each activity owns its own tui-realm Application and handles its own events.
pub trait Activity {
    /// Initialize the activity with context from the manager.
    fn on_create(&mut self, context: Context);

    /// Draw the UI and handle one tick of events.
    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()>;

    /// Check if activity wants to exit. Returns Some(reason) to exit, None to continue.
    fn will_umount(&self) -> Option<&ExitReason>;

    /// Clean up and return the context to the manager.
    fn on_destroy(&mut self) -> Option<Context>;
}

/// Activity types available in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    Form,
    Preview,
}

/// Manages activity lifecycle and transitions.
pub struct ActivityManager {
    context: Option<Context>,
    current: ActivityType,
}

impl ActivityManager {
    pub fn new(context: Context) -> Self {
        Self {
            context: Some(context),
            current: ActivityType::Form,
        }
    }

    /// Run activities until one asks to quit, then hand the context back.
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<Context> {
        loop {
            let mut activity: Box<dyn Activity> = match self.current {
                ActivityType::Form => Box::<FormActivity>::default(),
                ActivityType::Preview => Box::<ModelPreviewActivity>::default(),
            };

            let context = self
                .context
                .take()
                .ok_or_else(|| eyre!("activity context was not returned"))?;
            activity.on_create(context);

            loop {
                activity.on_draw(terminal)?;

                if let Some(reason) = activity.will_umount() {
                    let next = match reason {
                        ExitReason::Quit => None,
                        ExitReason::SwitchToForm => Some(ActivityType::Form),
                        ExitReason::SwitchToPreview => Some(ActivityType::Preview),
                    };
                    self.context = activity.on_destroy();

                    match next {
                        Some(next) => {
                            tracing::debug!(from = ?self.current, to = ?next, "switching activity");
                            self.current = next;
                            break;
                        }
                        None => {
                            return self
                                .context
                                .take()
                                .ok_or_else(|| eyre!("activity context was not returned"));
                        }
                    }
                }
            }
        }
    }
}
