use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{ui::screen::Screen, util::colors};

pub struct DetailsPanel<'a> {
    screen: &'a Screen,
}

impl<'a> DetailsPanel<'a> {
    pub fn new(screen: &'a Screen) -> Self {
        Self { screen }
    }
}

impl Widget for DetailsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let night = self.screen.night;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::DIMMED));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(fields) = &self.screen.details else {
            return;
        };

        let rows: [(&str, String); 4] = [
            ("Current timezone", fields.timezone.clone()),
            ("Day of the year", fields.day_of_year.to_string()),
            ("Day of the week", fields.day_of_week.clone()),
            ("Week number", fields.week_number.to_string()),
        ];

        let label_width = rows
            .iter()
            .map(|(label, _)| label.width())
            .max()
            .unwrap_or(0);

        let lines: Vec<Line> = rows
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(
                        format!("{label:<label_width$}  "),
                        Style::new().fg(colors::DIMMED),
                    ),
                    Span::styled(value, Style::new().fg(colors::text(night)).bold()),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
