use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols::border,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::{ui::components::spinner::Spinner, ui::screen::Screen, util::colors};

pub struct QuotePanel<'a> {
    screen: &'a Screen,
}

impl<'a> QuotePanel<'a> {
    pub fn new(screen: &'a Screen) -> Self {
        Self { screen }
    }
}

impl Widget for QuotePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let night = self.screen.night;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::DIMMED));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some((content, author)) = &self.screen.quote else {
            return;
        };

        // The committed quote stays visible but dimmed while a replacement
        // is in flight.
        let text_style = if self.screen.quote_refreshing {
            Style::new().fg(colors::DIMMED)
        } else {
            Style::new().fg(colors::text(night))
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        Paragraph::new(format!("\u{201c}{content}\u{201d}"))
            .style(text_style)
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        Paragraph::new(format!("— {author}"))
            .style(text_style.italic())
            .right_aligned()
            .render(chunks[1], buf);

        if self.screen.quote_refreshing && inner.width > 2 {
            let spinner_area = Rect::new(inner.right().saturating_sub(2), inner.y, 1, 1);
            Spinner::new()
                .with_style(Style::new().fg(colors::ACCENT))
                .render(spinner_area, buf);
        }
    }
}
