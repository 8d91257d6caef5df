//! Portal [`Api`]-related implementations.

#[cfg(feature = "http")]
pub mod http;

use derive_more::{Display, Error as StdError};

#[cfg(feature = "http")]
pub use self::http::Http;

/// Portal API operation.
pub use common::Handler as Api;

/// [`Api`] error.
#[derive(Clone, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// [`Api`] gateway configuration is invalid.
    #[display("invalid gateway configuration: {_0}")]
    InvalidConfig(#[error(not(source))] String),

    /// Successful response carries a body of an unexpected shape.
    #[display("malformed response: {_0}")]
    MalformedResponse(#[error(not(source))] String),

    /// Transport failure while reaching the portal.
    #[display("network error: {_0}")]
    Network(#[error(not(source))] String),

    /// Portal doesn't know the requested entity.
    #[display("not found")]
    NotFound {
        /// Message provided by the portal, if any.
        message: Option<String>,
    },

    /// Portal rejected or failed to process the request.
    #[display("portal responded with status {status}")]
    Server {
        /// HTTP status code of the response.
        status: u16,

        /// Message provided by the portal, if any.
        message: Option<String>,
    },

    /// Request exceeded the configured deadline.
    #[display("request timed out")]
    Timeout,
}

impl Error {
    /// Returns the portal-provided message of this [`Error`], if any.
    ///
    /// Intended for display: callers fall back to a generic localized
    /// message when [`None`] is returned.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::NotFound { message } | Self::Server { message, .. } => {
                message.as_deref()
            }
            Self::InvalidConfig(_)
            | Self::MalformedResponse(_)
            | Self::Network(_)
            | Self::Timeout => None,
        }
    }
}
