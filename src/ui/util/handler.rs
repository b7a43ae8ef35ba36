use crate::ui::{
    app::App,
    input::InputHandler,
    tui::{TerminalEvent, Tui},
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_terminal_event(app, evt);
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            app.on_event(evt);
        }

        Ok(())
    }

    fn handle_terminal_event(app: &mut App, evt: TerminalEvent) {
        match evt {
            TerminalEvent::Tick => app.on_tick(),
            TerminalEvent::Key(key) => {
                if let Some(msg) = InputHandler::handle_key(key) {
                    app.update(msg);
                }
            }
            TerminalEvent::FocusGained => app.has_focus = true,
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Resize(_, _) => {}
        }
    }
}
