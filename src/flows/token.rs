//! Authorization-code-for-token exchange (RFC 6749 §4.1.3).

// self
use crate::{
	_prelude::*,
	flows::{Courier, common},
	http::Transport,
	message::{OAuthClient, TokenGrant},
	obs::FlowKind,
};

const GRANT_TYPE: &str = "authorization_code";

/// Parameters for exchanging an authorization code at the token endpoint.
///
/// `grant_type=authorization_code` is supplied by the flow, never by the caller.
#[derive(Clone, Debug)]
pub struct TokenExchangeRequest {
	/// Token endpoint of the provider.
	pub endpoint: Url,
	/// Authorization code received via the callback.
	pub code: String,
	/// Registered application identity; `client_secret` is sent only when present.
	pub client: OAuthClient,
	/// Redirect URI; must be identical to the one used in the authorization request
	/// for this flow instance.
	pub redirect_uri: Url,
}

impl<T> Courier<T>
where
	T: ?Sized + Transport,
{
	/// Exchanges an authorization code for a [`TokenGrant`].
	///
	/// Submits `grant_type=authorization_code`, `code`, `redirect_uri`, and `client_id`,
	/// plus `client_secret` for confidential clients only. The returned future resolves
	/// exactly once; a failed exchange is never retried by the crate.
	pub async fn exchange_token(&self, request: &TokenExchangeRequest) -> Result<TokenGrant> {
		common::submit_token_request(
			self,
			FlowKind::TokenExchange,
			"exchange_token",
			&request.endpoint,
			form_parameters(request),
		)
		.await
	}
}

pub(crate) fn form_parameters(request: &TokenExchangeRequest) -> Vec<(String, String)> {
	let mut parameters = vec![
		("grant_type".to_owned(), GRANT_TYPE.to_owned()),
		("code".to_owned(), request.code.clone()),
		("redirect_uri".to_owned(), request.redirect_uri.to_string()),
		("client_id".to_owned(), request.client.client_id.clone()),
	];

	if let Some(secret) = &request.client.client_secret {
		parameters.push(("client_secret".to_owned(), secret.clone()));
	}

	parameters
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn request(client: OAuthClient) -> TokenExchangeRequest {
		TokenExchangeRequest {
			endpoint: Url::parse("https://provider.example/token")
				.expect("Token endpoint fixture should parse successfully."),
			code: "abc".into(),
			client,
			redirect_uri: Url::parse("https://app.example/cb")
				.expect("Redirect URI fixture should parse successfully."),
		}
	}

	#[test]
	fn public_client_form_omits_client_secret() {
		let parameters = form_parameters(&request(OAuthClient::new("app-id")));

		assert_eq!(
			parameters,
			vec![
				("grant_type".to_owned(), "authorization_code".to_owned()),
				("code".to_owned(), "abc".to_owned()),
				("redirect_uri".to_owned(), "https://app.example/cb".to_owned()),
				("client_id".to_owned(), "app-id".to_owned()),
			],
		);
	}

	#[test]
	fn confidential_client_form_carries_client_secret() {
		let parameters =
			form_parameters(&request(OAuthClient::new("app-id").with_client_secret("s3cr3t")));

		assert!(parameters.contains(&("client_secret".to_owned(), "s3cr3t".to_owned())));
	}
}
