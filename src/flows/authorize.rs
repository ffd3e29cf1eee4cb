//! Authorization redirect construction and callback parsing (RFC 6749 §4.1.1–§4.1.2).

// self
use crate::{
	_prelude::*,
	flows::Courier,
	http::{self, Transport, WireMethod, WireRequest},
	message::{OAuth2Error, OAuthClient},
	obs::{self, FlowKind},
};

const RESPONSE_TYPE_CODE: &str = "code";

/// Parameters for the authorization redirect the caller sends the end-user to.
///
/// `response_type=code` is supplied by the flow, never by the caller, so a request can
/// never pair the wrong response type with this grant.
#[derive(Clone, Debug)]
pub struct AuthorizationRequest {
	/// Authorization endpoint of the provider.
	pub endpoint: Url,
	/// Registered application identity; only `client_id` rides in the redirect.
	pub client: OAuthClient,
	/// Redirect URI the provider calls back on. Must be identical to the one later
	/// placed in the token exchange for the same flow instance (protocol requirement;
	/// the crate does not enforce it).
	pub redirect_uri: Url,
	/// Requested scope, verbatim.
	pub scope: String,
	/// Caller-supplied opaque state for CSRF binding. The caller must persist it and
	/// compare it against the callback's `state`; see
	/// [`Courier::handle_authorization_callback`].
	pub state: String,
}

/// Outcome of a granted authorization callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationResult {
	/// Authorization code to exchange at the token endpoint.
	pub code: String,
	/// State echoed by the provider, for the caller's CSRF comparison.
	pub state: String,
}

impl<T> Courier<T>
where
	T: ?Sized + Transport,
{
	/// Builds the GET request for the authorization redirect.
	///
	/// The query carries exactly `client_id`, `response_type=code`, `redirect_uri`,
	/// `scope`, and `state`, taken verbatim from `request`. No PKCE parameters are
	/// emitted; PKCE is a future extension of this crate.
	pub fn authorization_request(&self, request: &AuthorizationRequest) -> WireRequest {
		let parameters = [
			("client_id".to_owned(), request.client.client_id.clone()),
			("response_type".to_owned(), RESPONSE_TYPE_CODE.to_owned()),
			("redirect_uri".to_owned(), request.redirect_uri.to_string()),
			("scope".to_owned(), request.scope.clone()),
			("state".to_owned(), request.state.clone()),
		];

		http::build_request(&request.endpoint, WireMethod::Get, &parameters)
	}

	/// Parses the authorization callback URL into a code/state pair.
	///
	/// A callback carrying an `error` parameter (RFC 6749 §4.1.2.1) surfaces as
	/// [`Error::Server`] with `error_description`, `error_uri`, and `state` populated
	/// from the query; a success-shaped callback missing `code` or `state` surfaces as
	/// [`Error::MissingParameter`].
	///
	/// # CSRF
	///
	/// The returned `state` is NOT compared against the originating request's `state`.
	/// The caller must perform that comparison against the value it persisted before
	/// initiating the flow; skipping it defeats the CSRF protection the parameter
	/// exists for.
	pub fn handle_authorization_callback(
		&self,
		callback: Option<&Url>,
	) -> Result<AuthorizationResult> {
		obs::observe(FlowKind::Authorization, "handle_authorization_callback", || {
			parse_callback(callback)
		})
	}
}

fn parse_callback(callback: Option<&Url>) -> Result<AuthorizationResult> {
	let url = callback.ok_or(Error::MissingCallbackUrl)?;
	let mut parameters = http::parse_query_parameters(url);

	if let Some(error) = parameters.remove("error") {
		return Err(OAuth2Error {
			error,
			error_description: parameters.remove("error_description"),
			error_uri: parameters.remove("error_uri"),
			state: parameters.remove("state"),
		}
		.into());
	}

	let code = parameters.remove("code").ok_or(Error::MissingParameter { name: "code" })?;
	let state = parameters.remove("state").ok_or(Error::MissingParameter { name: "state" })?;

	Ok(AuthorizationResult { code, state })
}
