use crate::clock::phase::DayPhase;
use crate::clock::snapshot::DetailFields;

pub mod transition;

/// The display the core projects onto. Implemented by the terminal shell's
/// screen model; tests substitute a recording surface.
pub trait DisplaySurface {
    fn render_clock(&mut self, text: &str);
    fn render_abbreviation(&mut self, text: &str);
    fn render_greeting(&mut self, phase: DayPhase);
    fn set_greeting_dimmed(&mut self, dimmed: bool);
    fn render_background(&mut self, night: bool);
    fn render_location(&mut self, text: &str);
    fn render_details(&mut self, fields: &DetailFields);
    fn render_quote(&mut self, content: &str, author: &str);
    fn set_details_visible(&mut self, visible: bool);
    fn set_quote_refreshing(&mut self, refreshing: bool);
    fn show_fatal_error(&mut self, message: &str);
}

/// Diffing gateway in front of a [`DisplaySurface`]. Every operation
/// compares the proposed value against the last committed one and only
/// touches the surface on a genuine change, so unchanged ticks cost no
/// display work and transitions fire once per change.
#[derive(Debug, Default)]
pub struct Renderer {
    clock: Option<String>,
    abbreviation: Option<String>,
    greeting: Option<DayPhase>,
    night: Option<bool>,
    location: Option<String>,
    details: Option<DetailFields>,
    quote: Option<(String, String)>,
    details_visible: Option<bool>,
    quote_refreshing: Option<bool>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clock(&mut self, out: &mut dyn DisplaySurface, text: &str) {
        if self.clock.as_deref() != Some(text) {
            out.render_clock(text);
            self.clock = Some(text.to_owned());
        }
    }

    pub fn abbreviation(&mut self, out: &mut dyn DisplaySurface, text: &str) {
        if self.abbreviation.as_deref() != Some(text) {
            out.render_abbreviation(text);
            self.abbreviation = Some(text.to_owned());
        }
    }

    /// Greeting swaps are driven by the fade transition; the committed
    /// phase still guards against a redundant swap.
    pub fn greeting(&mut self, out: &mut dyn DisplaySurface, phase: DayPhase) {
        if self.greeting != Some(phase) {
            out.render_greeting(phase);
            self.greeting = Some(phase);
        }
    }

    pub fn background(&mut self, out: &mut dyn DisplaySurface, night: bool) {
        if self.night != Some(night) {
            out.render_background(night);
            self.night = Some(night);
        }
    }

    pub fn location(&mut self, out: &mut dyn DisplaySurface, text: &str) {
        if self.location.as_deref() != Some(text) {
            out.render_location(text);
            self.location = Some(text.to_owned());
        }
    }

    pub fn details(&mut self, out: &mut dyn DisplaySurface, fields: &DetailFields) {
        if self.details.as_ref() != Some(fields) {
            out.render_details(fields);
            self.details = Some(fields.clone());
        }
    }

    pub fn quote(&mut self, out: &mut dyn DisplaySurface, content: &str, author: &str) {
        let changed = self
            .quote
            .as_ref()
            .is_none_or(|(c, a)| c.as_str() != content || a.as_str() != author);
        if changed {
            out.render_quote(content, author);
            self.quote = Some((content.to_owned(), author.to_owned()));
        }
    }

    pub fn details_visible(&mut self, out: &mut dyn DisplaySurface, visible: bool) {
        if self.details_visible != Some(visible) {
            out.set_details_visible(visible);
            self.details_visible = Some(visible);
        }
    }

    pub fn quote_refreshing(&mut self, out: &mut dyn DisplaySurface, refreshing: bool) {
        if self.quote_refreshing != Some(refreshing) {
            out.set_quote_refreshing(refreshing);
            self.quote_refreshing = Some(refreshing);
        }
    }
}
