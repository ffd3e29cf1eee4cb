//! Refresh-token exchange (RFC 6749 §6); shares the submit/decode path with the
//! code-for-token exchange.

// self
use crate::{
	_prelude::*,
	flows::{Courier, common},
	http::Transport,
	message::TokenGrant,
	obs::FlowKind,
};

const GRANT_TYPE: &str = "refresh_token";

/// Parameters for refreshing an access token.
///
/// `grant_type=refresh_token` is supplied by the flow, never by the caller.
#[derive(Clone, Debug)]
pub struct RefreshTokenRequest {
	/// Token endpoint of the provider.
	pub endpoint: Url,
	/// Refresh token issued alongside an earlier grant.
	pub refresh_token: String,
	/// Scope to narrow the refreshed grant to; omitted from the form when `None`.
	pub scope: Option<String>,
}

impl<T> Courier<T>
where
	T: ?Sized + Transport,
{
	/// Refreshes an access token, yielding a new [`TokenGrant`].
	///
	/// Submits `grant_type=refresh_token` and `refresh_token`, plus `scope` only when
	/// one was requested. Decoding and error mapping are identical to
	/// [`Courier::exchange_token`], and the future resolves exactly once.
	pub async fn refresh(&self, request: &RefreshTokenRequest) -> Result<TokenGrant> {
		common::submit_token_request(
			self,
			FlowKind::Refresh,
			"refresh",
			&request.endpoint,
			form_parameters(request),
		)
		.await
	}
}

pub(crate) fn form_parameters(request: &RefreshTokenRequest) -> Vec<(String, String)> {
	let mut parameters = vec![
		("grant_type".to_owned(), GRANT_TYPE.to_owned()),
		("refresh_token".to_owned(), request.refresh_token.clone()),
	];

	if let Some(scope) = &request.scope {
		parameters.push(("scope".to_owned(), scope.clone()));
	}

	parameters
}
