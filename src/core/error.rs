use thiserror::Error;

/// Errors surfaced by the network collaborator while retrieving a payload.
///
/// This is the `cause` carried by [`FetchError::Transport`]. It is forwarded unmodified and never
/// inspected by the fetcher.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A failure reported by a custom [`StaticDataService`](crate::StaticDataService) implementation.
    #[error("{0}")]
    Other(String),
}

/// The error half of a [`FetchOutcome`](crate::FetchOutcome).
///
/// Exactly two kinds ever reach the caller. A malformed payload is deliberately undifferentiated:
/// callers cannot tell which of the sale, JWT or paddle number was missing.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The network collaborator failed; the cause is passed through as-is.
    #[error("transport error: {0}")]
    Transport(#[from] ApiError),

    /// The payload arrived but one or more required fields could not be located or typed.
    #[error("static data payload is malformed or missing a required field")]
    MalformedPayload,
}

impl FetchError {
    /// Returns `true` for [`FetchError::MalformedPayload`].
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedPayload)
    }

    /// The upstream cause, if this is a transport failure.
    #[must_use]
    pub const fn transport_cause(&self) -> Option<&ApiError> {
        match self {
            Self::Transport(cause) => Some(cause),
            Self::MalformedPayload => None,
        }
    }
}
