use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unrecognized timezone identifier: {0}")]
    UnknownTimezone(String),
}
