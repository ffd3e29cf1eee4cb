//! Error taxonomy shared across flows and transports.
//!
//! Every fallible operation in the crate returns [`Result`]; malformed callbacks and
//! response bodies surface as typed errors, never as panics.

// self
use crate::{_prelude::*, message::OAuth2Error};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by every flow operation.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The authorization callback carried no URL.
	#[error("Authorization callback carried no URL.")]
	MissingCallbackUrl,
	/// A required query parameter was absent from a success-shaped callback.
	#[error("Authorization callback is missing the `{name}` parameter.")]
	MissingParameter {
		/// Name of the absent parameter.
		name: &'static str,
	},
	/// The remote party reported an RFC 6749 error, either via the callback query or an
	/// error response body.
	#[error(transparent)]
	Server(#[from] OAuth2Error),
	/// Transport failure (DNS, TCP, TLS, timeout); opaque to the protocol core.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response bytes matched neither the token shape nor the error shape.
	#[error("Token endpoint returned a response that does not match the token shape.")]
	Decode {
		/// Structured parsing failure for the token shape, annotated with the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the endpoint.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
