//! Failures of the remote feed API

use std::error::Error as _;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::domain::item::ItemId;

lazy_static! {
    /// Signature of "the network is not there" failures
    static ref CONNECTIVITY_FAILURE: Regex = Regex::new(
        r"(?i)failed to fetch|connection refused|network is unreachable|dns error"
    )
    .expect("connectivity pattern is valid");
}

/// Prefix used for connect-class transport errors
const FAILED_TO_FETCH: &str = "Failed to fetch";

/// A single failed request. The message is what ends up in the state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("item {0} does not exist")]
    Missing(ItemId),
}

impl FetchError {
    /// Whether this failure means the client is probably offline
    pub fn is_connectivity_failure(&self) -> bool {
        is_connectivity_message(&self.to_string())
    }
}

/// Pattern match against the connectivity-failure signature
pub fn is_connectivity_message(message: &str) -> bool {
    CONNECTIVITY_FAILURE.is_match(message)
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return FetchError::Status {
                status: status.as_u16(),
                url: err.url().map(ToString::to_string).unwrap_or_default(),
            };
        }
        if err.is_decode() {
            return FetchError::Decode(error_chain(&err));
        }
        // A slow response is a per-item failure, not an outage
        if err.is_connect() {
            return FetchError::Transport(format!("{FAILED_TO_FETCH}: {}", error_chain(&err)));
        }
        FetchError::Transport(error_chain(&err))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Render an error with all of its sources, `outer: inner: innermost`
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Failed to fetch")]
    #[case("TypeError: failed to fetch")]
    #[case("error sending request for url (https://x/): client error (Connect): tcp connect error: Connection refused (os error 111)")]
    #[case("dns error: failed to lookup address information")]
    #[case("Network is unreachable (os error 101)")]
    fn test_connectivity_messages(#[case] message: &str) {
        assert!(is_connectivity_message(message));
        assert!(FetchError::Transport(message.to_string()).is_connectivity_failure());
    }

    #[rstest]
    #[case(FetchError::Decode("expected value at line 1 column 1".to_string()))]
    #[case(FetchError::Status { status: 500, url: "https://x/item/1.json".to_string() })]
    #[case(FetchError::Missing(ItemId(1)))]
    #[case(FetchError::Transport("connection closed before message completed".to_string()))]
    #[case(FetchError::Transport(
        "error sending request for url (https://x/item/1.json): operation timed out".to_string()
    ))]
    fn test_generic_failures(#[case] error: FetchError) {
        assert!(!error.is_connectivity_failure());
    }

    #[test]
    fn test_display() {
        assert_eq!(FetchError::Missing(ItemId(7)).to_string(), "item 7 does not exist");
        assert_eq!(
            FetchError::Status {
                status: 404,
                url: "https://x/topstories.json".to_string()
            }
            .to_string(),
            "HTTP 404 from https://x/topstories.json"
        );
    }
}
