use crate::clock::snapshot::{LocationInfo, Quote, TimeSnapshot};

/// Results posted by background fetch tasks into the app event loop.
#[derive(Debug, Clone)]
pub enum Event {
    /// All three bootstrap sources resolved.
    Bootstrapped {
        time: TimeSnapshot,
        location: LocationInfo,
        quote: Quote,
    },
    /// At least one bootstrap source failed; the session is unrecoverable.
    BootstrapFailed(String),
    QuoteFetched(Quote),
    QuoteFetchFailed(String),
}
