//! Network services for the chainkit CLI: update checks and usage telemetry.
//!
//! Nothing in this crate is allowed to fail a command. Every call returns a
//! [`BestEffort`] instead of a `Result`, and callers log [`BestEffort::Ignored`]
//! at `debug` level before moving on.

use std::time::Duration;

pub mod telemetry;
pub mod update;

pub use telemetry::Telemetry;
pub use update::Updater;

/// Environment variable read by the CLI to disable every network call.
pub const NO_TELEMETRY_ENV: &str = "CHAINKIT_NO_TELEMETRY";

/// Requests are abandoned after this long; there is no retry.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

/// Outcome of a call whose failure must never surface to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BestEffort<T> {
    Done(T),
    Ignored(String),
}

impl<T> BestEffort<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// The value, or `None` after logging why the call was ignored.
    pub fn log_ignored(self, what: &str) -> Option<T> {
        match self {
            Self::Done(value) => Some(value),
            Self::Ignored(reason) => {
                tracing::debug!(%reason, "{what} skipped");
                None
            }
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for BestEffort<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Done(value),
            Err(e) => Self::Ignored(e.to_string()),
        }
    }
}

fn http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("chainkit/", env!("CARGO_PKG_VERSION")))
        .build()
}
