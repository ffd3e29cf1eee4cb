//! Wire-level entities shared by the flows: client credentials, the RFC 6749 §5.1
//! token response, and the RFC 6749 §5.2/§4.1.2.1 error shape.
//!
//! All of these are short-lived value objects; nothing here survives beyond a single
//! flow invocation.

// self
use crate::_prelude::*;

/// Registered application identity presented to the authorization server.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthClient {
	/// Public client identifier issued during registration.
	pub client_id: String,
	/// Client secret for confidential clients; `None` for public clients, in which case
	/// no `client_secret` parameter is ever sent.
	pub client_secret: Option<String>,
}
impl OAuthClient {
	/// Creates a public client (no secret).
	pub fn new(client_id: impl Into<String>) -> Self {
		Self { client_id: client_id.into(), client_secret: None }
	}

	/// Sets or replaces the client secret, turning this into a confidential client.
	pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
		self.client_secret = Some(secret.into());

		self
	}
}
impl Debug for OAuthClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuthClient")
			.field("client_id", &self.client_id)
			.field("client_secret_set", &self.client_secret.is_some())
			.finish()
	}
}

/// Successful token response per RFC 6749 §5.1.
///
/// The value is terminal; construct a new grant rather than mutating one. Unknown
/// response members land in [`extra`](Self::extra), the protocol's extension slot
/// (RFC 6749 §8.2).
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenGrant {
	/// Access token issued by the authorization server; avoid logging it.
	pub access_token: String,
	/// Token type, typically `bearer`.
	pub token_type: String,
	/// Lifetime of the access token in seconds, when the server advertises one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub expires_in: Option<u64>,
	/// Refresh token, if the server issued one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<String>,
	/// Granted scope, when it differs from (or restates) the requested scope.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scope: Option<String>,
	/// Extension parameters the server included beyond the registered members.
	#[serde(flatten)]
	pub extra: BTreeMap<String, serde_json::Value>,
}
impl Debug for TokenGrant {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenGrant")
			.field("access_token", &"<redacted>")
			.field("token_type", &self.token_type)
			.field("expires_in", &self.expires_in)
			.field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
			.field("scope", &self.scope)
			.field("extra", &self.extra)
			.finish()
	}
}

/// Error reported by the authorization server, per RFC 6749 §5.2 (token endpoint body)
/// and §4.1.2.1 (authorization callback query).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuth2Error {
	/// Registered error code (e.g. `access_denied`, `invalid_grant`).
	pub error: String,
	/// Human-readable description, when supplied.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error_description: Option<String>,
	/// URI pointing at a human-readable error page, when supplied.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error_uri: Option<String>,
	/// State echoed by the server, when supplied.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub state: Option<String>,
}
impl OAuth2Error {
	/// Creates an error carrying only the registered code.
	pub fn new(error: impl Into<String>) -> Self {
		Self { error: error.into(), error_description: None, error_uri: None, state: None }
	}
}
impl Display for OAuth2Error {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match &self.error_description {
			Some(description) =>
				write!(f, "Authorization server reported `{}`: {description}.", self.error),
			None => write!(f, "Authorization server reported `{}`.", self.error),
		}
	}
}
impl StdError for OAuth2Error {}
