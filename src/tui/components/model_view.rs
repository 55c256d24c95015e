//! Read-only view of the edited model.

use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color as TermColor, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use tuirealm::{
    MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::model::Color;

/// Terminal color used to draw a carried model color.
pub fn chip_color(color: Color) -> TermColor {
    match color {
        Color::Red => TermColor::Red,
        Color::Green => TermColor::Green,
        Color::Blue => TermColor::Blue,
        Color::Yellow => TermColor::Yellow,
        Color::Purple => TermColor::Magenta,
        Color::Orange => TermColor::Rgb(255, 165, 0),
        Color::Black => TermColor::Black,
        Color::White => TermColor::White,
    }
}

/// Scrollable rendered model plus a strip of color chips.
pub struct ModelView {
    props: Props,
    lines: Vec<String>,
    colors: Vec<Color>,
    scroll: usize,
    visible_height: usize,
}

impl ModelView {
    pub fn new(text: &str, colors: Vec<Color>) -> Self {
        Self {
            props: Props::default(),
            lines: text.lines().map(str::to_string).collect(),
            colors,
            scroll: 0,
            visible_height: 20,
        }
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        let max_scroll = self.lines.len().saturating_sub(self.visible_height);
        self.scroll = (self.scroll + 1).min(max_scroll);
    }

    fn chips_line(&self) -> Line<'static> {
        if self.colors.is_empty() {
            return Line::from(Span::styled(
                "no colors",
                Style::default().fg(TermColor::DarkGray),
            ));
        }
        let mut spans = Vec::new();
        for color in &self.colors {
            spans.push(Span::styled("  ", Style::default().bg(chip_color(*color))));
            spans.push(Span::raw(format!(" {color:?} ").to_lowercase()));
        }
        Line::from(spans)
    }
}

impl MockComponent for ModelView {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let block = Block::default().title(" Model ").borders(Borders::ALL);
        let inner = block.inner(rows[0]);
        frame.render_widget(block, rows[0]);

        self.visible_height = inner.height as usize;

        let visible: Vec<Line> = self
            .lines
            .iter()
            .skip(self.scroll)
            .take(inner.height as usize)
            .map(|l| Line::from(l.as_str()))
            .collect();
        frame.render_widget(Paragraph::new(visible), inner);

        if self.lines.len() > inner.height as usize {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
            let mut scrollbar_state = ScrollbarState::new(self.lines.len()).position(self.scroll);
            frame.render_stateful_widget(scrollbar, rows[0], &mut scrollbar_state);
        }

        frame.render_widget(Paragraph::new(self.chips_line()), rows[1]);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.scroll))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Scroll(CmdDirection::Up) => {
                self.scroll_up();
                CmdResult::Changed(self.state())
            }
            Cmd::Scroll(CmdDirection::Down) => {
                self.scroll_down();
                CmdResult::Changed(self.state())
            }
            _ => CmdResult::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_is_clamped() {
        let mut view = ModelView::new("a\nb\nc", Vec::new());
        view.visible_height = 2;
        view.perform(Cmd::Scroll(CmdDirection::Down));
        view.perform(Cmd::Scroll(CmdDirection::Down));
        assert_eq!(view.state(), State::One(StateValue::Usize(1)));
        view.perform(Cmd::Scroll(CmdDirection::Up));
        view.perform(Cmd::Scroll(CmdDirection::Up));
        assert_eq!(view.state(), State::One(StateValue::Usize(0)));
    }

    #[test]
    fn chips_name_each_color() {
        let view = ModelView::new("", vec![Color::Purple, Color::Orange]);
        let text: String = view
            .chips_line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("purple"));
        assert!(text.contains("orange"));
    }
}
