//! Parameter form Component: one labeled text input per parameter.

use crossterm_actions::{InputEvent, NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    event::{Key, KeyModifiers},
    props::{AttrValue, Attribute, Props},
};

use crate::editor::Field;
use crate::model::ParamId;
use crate::tui::activities::form::{Msg, UserEvent};
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

/// A single rendered input bound to one parameter id.
struct Row {
    id: ParamId,
    label: String,
    value: String,
}

/// Text inputs for every parameter, in definition order.
pub struct ParamForm {
    props: Props,
    rows: Vec<Row>,
    selected: usize,
    /// First row drawn
    scroll: usize,
}

impl ParamForm {
    pub fn new<'a>(fields: impl IntoIterator<Item = Field<'a>>) -> Self {
        let rows = fields
            .into_iter()
            .map(|field| Row {
                id: field.param.id,
                label: field.param.name.clone(),
                value: field.value.to_string(),
            })
            .collect();
        Self {
            props: Props::default(),
            rows,
            selected: 0,
            scroll: 0,
        }
    }

    fn focused(&self) -> bool {
        self.props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag()
    }

    fn select_next(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + 1) % self.rows.len();
        }
    }

    fn select_prev(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + self.rows.len() - 1) % self.rows.len();
        }
    }

    /// Move the window so the selected row is one of `height` visible rows.
    fn follow_selection(&mut self, height: usize) {
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if height > 0 && self.selected >= self.scroll + height {
            self.scroll = self.selected + 1 - height;
        }
    }

    /// Message carrying the full value of the selected input.
    fn change_msg(&self) -> Option<Msg> {
        self.rows
            .get(self.selected)
            .map(|row| Msg::ParamChanged(row.id, row.value.clone()))
    }

    fn changed(&mut self, cmd: Cmd) -> Option<Msg> {
        match self.perform(cmd) {
            CmdResult::Changed(_) => self.change_msg(),
            _ => None,
        }
    }
}

impl MockComponent for ParamForm {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focused();
        let height = area.height as usize;
        self.follow_selection(height);

        let label_width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0)
            + 1;

        let lines: Vec<Line> = self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(height)
            .map(|(i, row)| {
                let active = focused && i == self.selected;
                let label_style = if active {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                let value_style = if active {
                    Style::default().fg(Color::White).bg(Color::DarkGray)
                } else {
                    Style::default()
                };

                let mut spans = vec![
                    Span::styled(
                        format!("{:<label_width$} ", format!("{}:", row.label)),
                        label_style,
                    ),
                    Span::styled(row.value.clone(), value_style),
                ];
                if active {
                    spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
                }
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);

        if self.rows.len() > height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
            let mut scrollbar_state = ScrollbarState::new(self.rows.len()).position(self.selected);
            frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        match self.rows.get(self.selected) {
            Some(row) => State::Tup2((
                StateValue::Usize(self.selected),
                StateValue::String(row.value.clone()),
            )),
            None => State::None,
        }
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Down) => {
                self.select_next();
                CmdResult::None
            }
            Cmd::Move(CmdDirection::Up) => {
                self.select_prev();
                CmdResult::None
            }
            Cmd::Type(c) => match self.rows.get_mut(self.selected) {
                Some(row) => {
                    row.value.push(c);
                    CmdResult::Changed(self.state())
                }
                None => CmdResult::None,
            },
            Cmd::Delete => match self.rows.get_mut(self.selected) {
                Some(row) => {
                    if row.value.pop().is_some() {
                        CmdResult::Changed(self.state())
                    } else {
                        CmdResult::None
                    }
                }
                None => CmdResult::None,
            },
            Cmd::Submit => CmdResult::Submit(self.state()),
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for ParamForm {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        if !self.focused() {
            return None;
        }

        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        // Raw text input first so printable keys never reach the dispatcher
        let plain = !key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match key_event.code {
            Key::Char(c) if plain => return self.changed(Cmd::Type(c)),
            Key::Backspace => return self.changed(Cmd::Delete),
            Key::Enter => {
                self.perform(Cmd::Submit);
                return Some(Msg::Submit);
            }
            Key::Esc => return Some(Msg::Quit),
            _ => {}
        }

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        match action {
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next))
            | AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                self.perform(Cmd::Move(CmdDirection::Down));
                None
            }
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev))
            | AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                self.perform(Cmd::Move(CmdDirection::Up));
                None
            }
            AppAction::Tui(TuiEvent::Input(InputEvent::Confirm)) => Some(Msg::Submit),
            _ => None,
        }
    }
}
