/// User intents produced by the input handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    Quit,
    ToggleDetails,
    RefreshQuote,
}
