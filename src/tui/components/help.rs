//! Help overlay and status footers built from dispatcher keybindings.

use crossterm_actions::{AppEvent, NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::editor::Field;
use crate::tui::{AppAction, dispatcher};

/// Screen the keys are shown for.
///
/// The form swallows printable keys as text, so only bindings with a modifier
/// or a named key ever reach its dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Form,
    Preview,
}

impl Screen {
    fn reaches_dispatcher(self, key: &str) -> bool {
        match self {
            Screen::Form => key.chars().count() > 1 && !key.eq_ignore_ascii_case("space"),
            Screen::Preview => true,
        }
    }

    fn sections(self) -> &'static [(&'static str, &'static [AppAction])] {
        match self {
            Screen::Form => FORM_SECTIONS,
            Screen::Preview => PREVIEW_SECTIONS,
        }
    }

    fn direct_keys(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Screen::Form => &[
                ("Type into field", "any character"),
                ("Delete character", "Backspace"),
                ("Submit form", "Enter"),
                ("Quit", "Esc"),
            ],
            Screen::Preview => &[("Back to form", "Esc")],
        }
    }
}

const FORM_SECTIONS: &[(&str, &[AppAction])] = &[
    (
        "Global",
        &[
            AppAction::Tui(TuiEvent::App(AppEvent::Quit)),
            AppAction::Tui(TuiEvent::App(AppEvent::Help)),
        ],
    ),
    (
        "Fields",
        &[
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)),
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)),
        ],
    ),
];

const PREVIEW_SECTIONS: &[(&str, &[AppAction])] = &[
    (
        "Global",
        &[
            AppAction::Tui(TuiEvent::App(AppEvent::Quit)),
            AppAction::Tui(TuiEvent::App(AppEvent::Help)),
        ],
    ),
    (
        "Model",
        &[
            AppAction::WriteModel,
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)),
        ],
    ),
];

/// Actions shown in the form footer.
pub const FORM_FOOTER_ACTIONS: &[AppAction] = &[
    AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)),
    AppAction::Tui(TuiEvent::App(AppEvent::Help)),
];

/// Actions shown in the model preview footer.
pub const PREVIEW_FOOTER_ACTIONS: &[AppAction] = &[
    AppAction::WriteModel,
    AppAction::Tui(TuiEvent::App(AppEvent::Help)),
    AppAction::Tui(TuiEvent::App(AppEvent::Quit)),
];

/// Bound keys of `action` that work on `screen`, in binding order.
fn usable_keys(action: &AppAction, screen: Screen) -> Vec<String> {
    dispatcher()
        .config()
        .help_entries()
        .get(action)
        .map(|entry| {
            entry
                .keys
                .iter()
                .map(|k| k.to_string())
                .filter(|k| screen.reaches_dispatcher(k))
                .collect()
        })
        .unwrap_or_default()
}

/// Format a footer string from a list of actions.
/// Format: "desc: key | desc: key". Actions with no usable key are left out.
pub fn format_footer(screen: Screen, actions: &[AppAction], extras: &[(&str, &str)]) -> String {
    let help_entries = dispatcher().config().help_entries();
    let mut parts: Vec<String> = Vec::new();

    for action in actions {
        let Some(desc) = help_entries.get(action).and_then(|e| e.description) else {
            continue;
        };
        if let Some(key) = usable_keys(action, screen).into_iter().next() {
            let short_desc = desc
                .split_whitespace()
                .next()
                .unwrap_or(desc)
                .to_lowercase();
            parts.push(format!("{short_desc}: {key}"));
        }
    }

    for (desc, key) in extras {
        parts.push(format!("{desc}: {key}"));
    }

    parts.join(" | ")
}

fn entry_line(description: &str, keys: String) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("  {description:<22}")),
        Span::styled(keys, Style::default().fg(Color::Gray)),
    ])
}

/// Body of the help overlay: keys for `screen`, then every field being edited.
pub fn help_lines<'a>(
    screen: Screen,
    fields: impl IntoIterator<Item = Field<'a>>,
) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let help_entries = dispatcher().config().help_entries();
    let mut lines = Vec::new();

    for (title, actions) in screen.sections() {
        lines.push(Line::from(Span::styled(*title, bold)));
        for action in *actions {
            let keys = usable_keys(action, screen);
            if keys.is_empty() {
                continue;
            }
            let desc = help_entries
                .get(action)
                .and_then(|e| e.description)
                .unwrap_or("(no description)");
            lines.push(entry_line(desc, keys.join(", ")));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("Keys", bold)));
    for (description, keys) in screen.direct_keys() {
        lines.push(entry_line(description, keys.to_string()));
    }

    let fields: Vec<Field> = fields.into_iter().collect();
    if !fields.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Parameters", bold)));
        for field in fields {
            let value = if field.value.is_empty() {
                Span::styled("(empty)", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(field.value.to_string())
            };
            lines.push(Line::from(vec![
                Span::raw(format!("  #{:<4} {:<16} ", field.param.id, field.param.name)),
                value,
            ]));
        }
    }

    lines
}

/// Render the help overlay, sized to its content and centered.
pub fn render_help<'a>(
    frame: &mut Frame,
    screen: Screen,
    fields: impl IntoIterator<Item = Field<'a>>,
) {
    let lines = help_lines(screen, fields);
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4;
    // Borders plus the closing hint
    let height = lines.len() as u16 + 3;

    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body, hint] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    frame.render_widget(Paragraph::new(lines), body);

    let hint_widget = Paragraph::new(Span::styled(
        "Press any key to close",
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(hint_widget, hint);
}
