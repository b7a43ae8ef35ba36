use crate::clock::phase::DayPhase;
use crate::clock::snapshot::DetailFields;
use crate::render::DisplaySurface;

/// Committed display model the widgets draw from every frame. Writes only
/// arrive through the [`DisplaySurface`] implementation, i.e. through the
/// renderer's diff gate or a transition machine, so what is on screen is
/// exactly what was last committed.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub clock: Option<String>,
    pub abbreviation: Option<String>,
    pub greeting: Option<DayPhase>,
    pub greeting_dimmed: bool,
    pub night: bool,
    pub location: Option<String>,
    pub details: Option<DetailFields>,
    pub quote: Option<(String, String)>,
    pub details_visible: bool,
    pub quote_refreshing: bool,
    pub fatal_error: Option<String>,
}

impl DisplaySurface for Screen {
    fn render_clock(&mut self, text: &str) {
        self.clock = Some(text.to_owned());
    }

    fn render_abbreviation(&mut self, text: &str) {
        self.abbreviation = Some(text.to_owned());
    }

    fn render_greeting(&mut self, phase: DayPhase) {
        self.greeting = Some(phase);
    }

    fn set_greeting_dimmed(&mut self, dimmed: bool) {
        self.greeting_dimmed = dimmed;
    }

    fn render_background(&mut self, night: bool) {
        self.night = night;
    }

    fn render_location(&mut self, text: &str) {
        self.location = Some(text.to_owned());
    }

    fn render_details(&mut self, fields: &DetailFields) {
        self.details = Some(fields.clone());
    }

    fn render_quote(&mut self, content: &str, author: &str) {
        self.quote = Some((content.to_owned(), author.to_owned()));
    }

    fn set_details_visible(&mut self, visible: bool) {
        self.details_visible = visible;
    }

    fn set_quote_refreshing(&mut self, refreshing: bool) {
        self.quote_refreshing = refreshing;
    }

    fn show_fatal_error(&mut self, message: &str) {
        self.fatal_error = Some(message.to_owned());
    }
}
