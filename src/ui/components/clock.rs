use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::{ui::screen::Screen, util::colors};

/// Greeting, clock digits with the timezone abbreviation, and the location
/// line, stacked in the lower-left of the main surface.
pub struct ClockPanel<'a> {
    screen: &'a Screen,
}

impl<'a> ClockPanel<'a> {
    pub fn new(screen: &'a Screen) -> Self {
        Self { screen }
    }
}

impl Widget for ClockPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = area.inner(Margin::new(2, 1));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(inner);

        let night = self.screen.night;

        let greeting_style = if self.screen.greeting_dimmed {
            Style::new().fg(colors::DIMMED)
        } else if night {
            Style::new().fg(colors::ACCENT)
        } else {
            Style::new().fg(colors::text(night))
        };
        let greeting = self
            .screen
            .greeting
            .map(|phase| phase.greeting())
            .unwrap_or_default();

        let mut clock_line = Line::default();
        if let Some(clock) = &self.screen.clock {
            clock_line.push_span(Span::styled(
                clock.clone(),
                Style::new().fg(colors::text(night)).bold(),
            ));
        }
        if let Some(abbreviation) = &self.screen.abbreviation {
            clock_line.push_span(" ");
            clock_line.push_span(Span::styled(
                abbreviation.clone(),
                Style::new().fg(colors::DIMMED),
            ));
        }

        let location = self.screen.location.clone().unwrap_or_default();

        let text = vec![
            Line::styled(greeting, greeting_style),
            clock_line,
            Line::styled(location, Style::new().fg(colors::DIMMED).italic()),
        ];
        Paragraph::new(text).render(chunks[1], buf);
    }
}
