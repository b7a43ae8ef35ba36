use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::{error, info, warn};

use crate::{
    clock::{
        format, phase,
        snapshot::{LocationInfo, Quote, TimeSnapshot},
        state::{DashState, Session},
    },
    config::AppConfig,
    event::events::Event,
    http::{self, ApiService},
    render::{
        DisplaySurface, Renderer,
        transition::{FadeStep, GreetingFade, QuoteRefresh},
    },
    util::task::{TaskManager, TaskSlot},
};

use super::{
    message::AppMessage,
    screen::Screen,
    tui,
    util::handler::EventHandler,
};

pub struct App {
    pub config: AppConfig,
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub api: Arc<ApiService>,
    pub session: Session,
    pub screen: Screen,
    pub renderer: Renderer,
    pub greeting_fade: GreetingFade,
    pub quote_refresh: QuoteRefresh,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> color_eyre::Result<Self> {
        let config = AppConfig::default();
        let (event_tx, event_rx) = flume::unbounded();
        let api = Arc::new(ApiService::new()?);
        let greeting_fade = GreetingFade::new(config.greeting_fade());
        let quote_refresh = QuoteRefresh::new(config.spinner_cycle());

        Ok(Self {
            config,
            event_rx,
            event_tx,
            api,
            session: Session::Loading,
            screen: Screen::default(),
            renderer: Renderer::new(),
            greeting_fade,
            quote_refresh,
            task_manager: TaskManager::new(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new(self.config.tick_interval())?;
        tui.enter()?;

        self.spawn_bootstrap();
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(&self, frame: &mut Frame) {
        if self.has_focus {
            frame.render_widget(self, frame.area());
        }
    }

    fn spawn_bootstrap(&mut self) {
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        self.task_manager.spawn(
            TaskSlot::Bootstrap,
            tokio::spawn(async move {
                match http::bootstrap(&api).await {
                    Ok((time, location, quote)) => {
                        let _ = tx.send(Event::Bootstrapped {
                            time,
                            location,
                            quote,
                        });
                    }
                    Err(e) => {
                        let _ = tx.send(Event::BootstrapFailed(e.to_string()));
                    }
                }
            }),
        );
    }

    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::ToggleDetails => {
                if let Session::Ready(dash) = &mut self.session {
                    dash.panel = dash.panel.toggled();
                    self.renderer
                        .details_visible(&mut self.screen, dash.panel.details_visible());
                }
            }
            AppMessage::RefreshQuote => self.request_quote_refresh(),
        }
    }

    fn request_quote_refresh(&mut self) {
        let Session::Ready(dash) = &self.session else {
            return;
        };
        // The refresh control lives on the quote panel; no quote panel, no
        // refresh.
        if dash.panel.details_visible() {
            return;
        }
        if !self.quote_refresh.request(Instant::now()) {
            return;
        }

        self.renderer.quote_refreshing(&mut self.screen, true);

        let api = self.api.clone();
        let tx = self.event_tx.clone();
        self.task_manager.spawn(
            TaskSlot::QuoteRefresh,
            tokio::spawn(async move {
                match api.fetch_quote().await {
                    Ok(quote) => {
                        let _ = tx.send(Event::QuoteFetched(quote));
                    }
                    Err(e) => {
                        let _ = tx.send(Event::QuoteFetchFailed(e.to_string()));
                    }
                }
            }),
        );
    }

    pub fn on_event(&mut self, event: Event) {
        match event {
            Event::Bootstrapped {
                time,
                location,
                quote,
            } => self.seed(time, location, quote),
            Event::BootstrapFailed(message) => {
                error!("bootstrap failed: {message}");
                self.screen.show_fatal_error(&message);
                self.session = Session::Failed(message);
            }
            Event::QuoteFetched(quote) => {
                self.quote_refresh.resolve(quote, Instant::now());
            }
            Event::QuoteFetchFailed(message) => {
                warn!("quote refresh failed: {message}");
                self.quote_refresh.fail();
                self.renderer.quote_refreshing(&mut self.screen, false);
            }
        }
    }

    /// First full paint. Everything visible is committed here once; later
    /// ticks only touch the slices that actually change.
    fn seed(&mut self, time: TimeSnapshot, location: LocationInfo, quote: Quote) {
        let dash = DashState::new(time, location, quote);
        info!(
            "bootstrap complete: {} ({}), {:?}",
            dash.time.timezone.name(),
            dash.time.abbreviation,
            dash.phase
        );

        self.renderer.clock(
            &mut self.screen,
            &format::clock_text(dash.time.instant_utc, dash.time.timezone),
        );
        self.renderer
            .abbreviation(&mut self.screen, &dash.time.abbreviation);
        self.renderer.greeting(&mut self.screen, dash.phase);
        self.renderer
            .background(&mut self.screen, dash.phase.is_night());
        self.renderer
            .location(&mut self.screen, &format::location_line(&dash.location));
        self.renderer
            .details(&mut self.screen, &dash.time.detail_fields());
        self.renderer
            .quote(&mut self.screen, &dash.quote.content, &dash.quote.author);
        self.renderer
            .details_visible(&mut self.screen, dash.panel.details_visible());

        self.session = Session::Ready(dash);
    }

    pub fn on_tick(&mut self) {
        self.tick_at(Utc::now(), Instant::now());
    }

    /// One scheduler tick: recompute the phase against the bootstrap
    /// timezone, advance the transitions, refresh the clock digits. Network
    /// data is never touched here.
    fn tick_at(&mut self, now_utc: DateTime<Utc>, now: Instant) {
        let Session::Ready(dash) = &mut self.session else {
            return;
        };

        let new_phase = phase::classify(now_utc, dash.time.timezone);
        if new_phase != dash.phase {
            info!("day phase changed: {:?} -> {:?}", dash.phase, new_phase);
            dash.phase = new_phase;
            self.renderer
                .background(&mut self.screen, new_phase.is_night());
            self.greeting_fade.begin(new_phase, now);
            self.screen.set_greeting_dimmed(true);
        }

        match self.greeting_fade.tick(now) {
            Some(FadeStep::Swap(phase)) => {
                self.screen.set_greeting_dimmed(false);
                self.renderer.greeting(&mut self.screen, phase);
            }
            Some(FadeStep::Settled) | None => {}
        }

        if let Some(quote) = self.quote_refresh.tick(now) {
            dash.quote = quote;
            self.renderer
                .quote(&mut self.screen, &dash.quote.content, &dash.quote.author);
            self.renderer.quote_refreshing(&mut self.screen, false);
        }

        self.renderer.clock(
            &mut self.screen,
            &format::clock_text(now_utc, dash.time.timezone),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::phase::DayPhase;
    use chrono::TimeZone;
    use std::time::Duration;

    fn snapshot(hour: u32, minute: u32) -> TimeSnapshot {
        TimeSnapshot {
            instant_utc: Utc.with_ymd_and_hms(2024, 5, 5, hour, minute, 0).unwrap(),
            timezone: chrono_tz::Tz::UTC,
            abbreviation: "UTC".into(),
            day_of_week: "Sunday".into(),
            day_of_year: 126,
            week_number: 18,
        }
    }

    fn location() -> LocationInfo {
        LocationInfo {
            city: Some("Berlin".into()),
            country: "Germany".into(),
        }
    }

    fn quote(content: &str) -> Quote {
        Quote {
            content: content.into(),
            author: "Someone".into(),
        }
    }

    fn seeded_app(hour: u32, minute: u32) -> App {
        let mut app = App::new().unwrap();
        app.on_event(Event::Bootstrapped {
            time: snapshot(hour, minute),
            location: location(),
            quote: quote("first"),
        });
        app
    }

    fn utc(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 5, hour, minute, second).unwrap()
    }

    #[test]
    fn bootstrap_failure_commits_no_state_and_no_chrome() {
        let mut app = App::new().unwrap();
        app.on_event(Event::BootstrapFailed("request failed".into()));

        assert!(matches!(app.session, Session::Failed(_)));
        assert_eq!(app.screen.fatal_error.as_deref(), Some("request failed"));
        assert_eq!(app.screen.clock, None);
        assert_eq!(app.screen.greeting, None);
        assert_eq!(app.screen.quote, None);
        assert_eq!(app.screen.location, None);
    }

    #[test]
    fn bootstrap_success_paints_every_slice() {
        let app = seeded_app(9, 0);

        assert!(matches!(app.session, Session::Ready(_)));
        assert_eq!(app.screen.clock.as_deref(), Some("09:00"));
        assert_eq!(app.screen.abbreviation.as_deref(), Some("UTC"));
        assert_eq!(app.screen.greeting, Some(DayPhase::Morning));
        assert!(!app.screen.night);
        assert_eq!(app.screen.location.as_deref(), Some("in Berlin, Germany"));
        assert!(app.screen.details.is_some());
        assert_eq!(
            app.screen.quote,
            Some(("first".into(), "Someone".into()))
        );
        assert!(!app.screen.details_visible);
        assert_eq!(app.screen.fatal_error, None);
    }

    #[test]
    fn ticks_within_one_hour_never_fire_the_transition() {
        let mut app = seeded_app(9, 0);
        let base = Instant::now();

        for i in 0..100u64 {
            app.tick_at(utc(9, 1, (i % 60) as u32), base + Duration::from_millis(i * 500));
        }

        assert_eq!(app.screen.greeting, Some(DayPhase::Morning));
        assert!(!app.screen.greeting_dimmed);
        assert!(app.greeting_fade.is_idle());
        assert_eq!(app.screen.clock.as_deref(), Some("09:01"));
    }

    #[test]
    fn crossing_a_phase_boundary_fires_the_transition_once() {
        let mut app = seeded_app(11, 59);
        let base = Instant::now();

        app.tick_at(utc(12, 0, 0), base);
        // Fade-out began; the old greeting is still committed, dimmed.
        assert_eq!(app.screen.greeting, Some(DayPhase::Morning));
        assert!(app.screen.greeting_dimmed);

        app.tick_at(utc(12, 0, 1), base + Duration::from_millis(400));
        assert_eq!(app.screen.greeting, Some(DayPhase::Afternoon));
        assert!(!app.screen.greeting_dimmed);

        for i in 0..100u64 {
            app.tick_at(utc(12, 1, 0), base + Duration::from_millis(1000 + i * 500));
        }
        assert_eq!(app.screen.greeting, Some(DayPhase::Afternoon));
        assert!(app.greeting_fade.is_idle());
        assert!(!app.screen.greeting_dimmed);
    }

    #[test]
    fn evening_boundary_switches_the_background_immediately() {
        let mut app = seeded_app(17, 59);
        assert!(!app.screen.night);

        app.tick_at(utc(18, 0, 0), Instant::now());
        assert!(app.screen.night);
        // The greeting has not swapped yet; the background does not wait.
        assert_eq!(app.screen.greeting, Some(DayPhase::Afternoon));
    }

    #[tokio::test]
    async fn quote_refresh_commits_after_the_spinner_cycle() {
        let mut app = seeded_app(9, 0);

        app.update(AppMessage::RefreshQuote);
        assert!(app.screen.quote_refreshing);
        assert!(app.quote_refresh.is_active());

        app.on_event(Event::QuoteFetched(quote("second")));
        // Still the old quote until the cycle boundary passes.
        assert_eq!(app.screen.quote.as_ref().unwrap().0, "first");

        app.tick_at(utc(9, 0, 3), Instant::now() + Duration::from_secs(3));
        assert_eq!(app.screen.quote.as_ref().unwrap().0, "second");
        assert!(!app.screen.quote_refreshing);
        if let Session::Ready(dash) = &app.session {
            assert_eq!(dash.quote.content, "second");
        } else {
            panic!("session should be ready");
        }
    }

    #[tokio::test]
    async fn failed_refresh_keeps_the_previous_quote() {
        let mut app = seeded_app(9, 0);

        app.update(AppMessage::RefreshQuote);
        app.on_event(Event::QuoteFetchFailed("request failed".into()));

        assert!(!app.screen.quote_refreshing);
        assert!(!app.quote_refresh.is_active());
        assert_eq!(app.screen.quote.as_ref().unwrap().0, "first");

        app.tick_at(utc(9, 0, 5), Instant::now() + Duration::from_secs(5));
        assert_eq!(app.screen.quote.as_ref().unwrap().0, "first");
    }

    #[tokio::test]
    async fn refresh_trigger_is_inert_while_one_is_in_flight() {
        let mut app = seeded_app(9, 0);

        app.update(AppMessage::RefreshQuote);
        app.update(AppMessage::RefreshQuote);

        assert!(app.quote_refresh.is_active());
        assert!(app.screen.quote_refreshing);
    }

    #[tokio::test]
    async fn refresh_is_unavailable_while_details_are_open() {
        let mut app = seeded_app(9, 0);

        app.update(AppMessage::ToggleDetails);
        app.update(AppMessage::RefreshQuote);

        assert!(!app.quote_refresh.is_active());
        assert!(!app.screen.quote_refreshing);
    }

    #[test]
    fn details_toggle_is_a_two_state_flip() {
        let mut app = seeded_app(9, 0);
        assert!(!app.screen.details_visible);

        app.update(AppMessage::ToggleDetails);
        assert!(app.screen.details_visible);
        if let Session::Ready(dash) = &app.session {
            assert_eq!(dash.panel.toggle_label(), "Less");
        }

        app.update(AppMessage::ToggleDetails);
        assert!(!app.screen.details_visible);
        if let Session::Ready(dash) = &app.session {
            assert_eq!(dash.panel.toggle_label(), "More");
        }
    }

    #[test]
    fn ticks_before_bootstrap_are_ignored() {
        let mut app = App::new().unwrap();
        app.tick_at(utc(9, 0, 0), Instant::now());
        assert_eq!(app.screen.clock, None);
    }
}
