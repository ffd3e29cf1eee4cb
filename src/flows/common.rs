//! Shared submit + decode path for token-endpoint flows.

// self
use crate::{
	_prelude::*,
	flows::Courier,
	http::Transport,
	message::{OAuth2Error, TokenGrant},
	obs::{self, FlowKind},
};

/// Submits a form to the token endpoint and decodes the response.
///
/// The future resolves exactly once; the transport's exactly-once completion guarantee
/// is forwarded, never retried.
pub(crate) async fn submit_token_request<T>(
	courier: &Courier<T>,
	kind: FlowKind,
	stage: &'static str,
	endpoint: &Url,
	form: Vec<(String, String)>,
) -> Result<TokenGrant>
where
	T: ?Sized + Transport,
{
	obs::observe_async(kind, stage, async move {
		let bytes = courier.transport.post(endpoint, &form).await?;

		decode_token_response(&bytes)
	})
	.await
}

/// Decodes token-endpoint response bytes into a [`TokenGrant`].
///
/// Bytes that do not match the RFC 6749 §5.1 token shape are re-read as a §5.2 error
/// body (required `error` member) and surfaced as [`Error::Server`]; anything else is
/// an [`Error::Decode`] carrying the path-annotated token-shape failure.
pub(crate) fn decode_token_response(bytes: &[u8]) -> Result<TokenGrant> {
	let mut deserializer = serde_json::Deserializer::from_slice(bytes);

	match serde_path_to_error::deserialize::<_, TokenGrant>(&mut deserializer) {
		Ok(grant) => Ok(grant),
		Err(source) => {
			if let Ok(server) = serde_json::from_slice::<OAuth2Error>(bytes) {
				return Err(Error::Server(server));
			}

			Err(Error::Decode { source })
		},
	}
}
