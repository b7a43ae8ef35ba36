use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use crate::{ui::components::spinner::Spinner, util::colors};

/// Full-screen loading state shown until the bootstrap settles.
pub struct LoadingScreen;

impl Widget for LoadingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::new().bg(colors::NIGHT_BACKGROUND));

        Spinner::new()
            .with_label("Loading your day...")
            .with_style(Style::new().fg(colors::ACCENT))
            .render(area, buf);
    }
}
