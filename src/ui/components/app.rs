use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::{
    clock::state::{PanelMode, Session},
    ui::{
        app::App,
        components::{
            clock::ClockPanel, details::DetailsPanel, loading::LoadingScreen, quote::QuotePanel,
        },
    },
    util::colors,
};

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.session {
            Session::Loading => LoadingScreen.render(area, buf),
            Session::Failed(_) => render_fatal_error(&self.screen.fatal_error, area, buf),
            Session::Ready(_) => render_dashboard(self, area, buf),
        }
    }
}

fn render_dashboard(app: &App, area: Rect, buf: &mut Buffer) {
    let night = app.screen.night;
    buf.set_style(area, Style::new().bg(colors::background(night)));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(area);

    ClockPanel::new(&app.screen).render(chunks[0], buf);

    if app.screen.details_visible {
        DetailsPanel::new(&app.screen).render(chunks[1], buf);
    } else {
        QuotePanel::new(&app.screen).render(chunks[1], buf);
    }

    let mode = if app.screen.details_visible {
        PanelMode::Details
    } else {
        PanelMode::Quote
    };
    let hints = Line::from(format!("q quit · r new quote · d {}", mode.toggle_label()))
        .style(Style::new().fg(colors::DIMMED));
    Paragraph::new(hints).centered().render(chunks[2], buf);
}

fn render_fatal_error(message: &Option<String>, area: Rect, buf: &mut Buffer) {
    buf.set_style(area, Style::new().bg(colors::NIGHT_BACKGROUND));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Min(4),
            Constraint::Percentage(40),
        ])
        .split(area);

    let text = vec![
        Line::styled("Error", Style::new().fg(colors::ERROR).bold()),
        Line::raw(""),
        Line::styled(
            message.clone().unwrap_or_default(),
            Style::new().fg(colors::NIGHT_TEXT),
        ),
        Line::styled(
            "Restart daydash to try again..",
            Style::new().fg(colors::DIMMED),
        ),
    ];
    Paragraph::new(text)
        .centered()
        .wrap(Wrap { trim: true })
        .render(chunks[1], buf);
}
