pub mod format;
pub mod phase;
pub mod snapshot;
pub mod state;
