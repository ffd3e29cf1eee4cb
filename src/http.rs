//! Transport primitives for OAuth flows.
//!
//! The module exposes the [`Transport`] capability alongside [`WireRequest`] so
//! downstream crates can integrate custom HTTP clients. The protocol core consumes
//! exactly three operations: [`Transport::post`], [`build_request`], and
//! [`parse_query_parameters`]; it never inspects transport internals such as headers
//! or status codes beyond the success/failure of the call itself.

// std
use std::ops::Deref;
// crates.io
use url::form_urlencoded;
// self
use crate::{_prelude::*, error::TransportError};

/// Boxed single-resolution future returned by [`Transport::post`].
pub type TransportFuture<'a, T> =
	Pin<Box<dyn Future<Output = std::result::Result<T, TransportError>> + 'a + Send>>;

/// HTTP methods the flows emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WireMethod {
	/// Parameters ride in the URL query string.
	Get,
	/// Parameters ride in an `application/x-www-form-urlencoded` body.
	Post,
}

/// Fully-encoded request the caller hands to whatever user agent or HTTP stack it
/// owns. Building one performs no network I/O.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireRequest {
	/// HTTP method to submit with.
	pub method: WireMethod,
	/// Target URL; for GET requests the parameters are already encoded into its query.
	pub url: Url,
	/// Form-urlencoded body for POST requests, `None` for GET.
	pub body: Option<String>,
}

/// Deterministically encodes `parameters` into a [`WireRequest`] for `url`.
///
/// GET appends the parameters to the URL's existing query; POST leaves the URL
/// untouched and form-urlencodes the parameters into the body.
pub fn build_request(url: &Url, method: WireMethod, parameters: &[(String, String)]) -> WireRequest {
	match method {
		WireMethod::Get => {
			let mut url = url.clone();

			{
				let mut pairs = url.query_pairs_mut();

				for (key, value) in parameters {
					pairs.append_pair(key, value);
				}
			}

			WireRequest { method, url, body: None }
		},
		WireMethod::Post => {
			let mut serializer = form_urlencoded::Serializer::new(String::new());

			for (key, value) in parameters {
				serializer.append_pair(key, value);
			}

			WireRequest { method, url: url.clone(), body: Some(serializer.finish()) }
		},
	}
}

/// Decodes a URL's query component into a key/value map.
///
/// Repeated keys keep the last occurrence, matching what authorization servers send
/// in practice (they do not repeat callback parameters).
pub fn parse_query_parameters(url: &Url) -> HashMap<String, String> {
	url.query_pairs().map(|(key, value)| (key.into_owned(), value.into_owned())).collect()
}

/// Abstraction over HTTP transports capable of executing OAuth token exchanges.
///
/// The trait is the crate's only dependency on an HTTP stack. Implementations must
/// uphold the exactly-once contract: the returned future resolves exactly once, with
/// the raw response body bytes for any HTTP response actually received (success or
/// error status alike, since the flows classify outcomes by body shape, never by
/// status), or with a [`TransportError`] when no response was obtained at all.
/// Dropping the future cancels the call; no separate cancellation primitive exists.
pub trait Transport
where
	Self: 'static + Send + Sync,
{
	/// Submits `form` to `endpoint` as an `application/x-www-form-urlencoded` POST and
	/// resolves with the response body bytes.
	fn post<'a>(&'a self, endpoint: &'a Url, form: &'a [(String, String)])
	-> TransportFuture<'a, Vec<u8>>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
/// Token requests should not follow redirects, matching OAuth 2.0 guidance that token
/// endpoints return results directly instead of delegating to another URI; configure
/// any custom [`ReqwestClient`] accordingly.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Transport for ReqwestTransport {
	fn post<'a>(
		&'a self,
		endpoint: &'a Url,
		form: &'a [(String, String)],
	) -> TransportFuture<'a, Vec<u8>> {
		Box::pin(async move {
			let response =
				self.0.post(endpoint.clone()).form(form).send().await.map_err(TransportError::from)?;
			let bytes = response.bytes().await.map_err(TransportError::from)?;

			Ok(bytes.to_vec())
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
		pairs.iter().map(|(key, value)| ((*key).to_owned(), (*value).to_owned())).collect()
	}

	#[test]
	fn get_request_encodes_parameters_into_query() {
		let url = Url::parse("https://example.com/authorize")
			.expect("Endpoint URL fixture should parse successfully.");
		let request = build_request(
			&url,
			WireMethod::Get,
			&params(&[("client_id", "app"), ("state", "s p a c e")]),
		);

		assert_eq!(request.method, WireMethod::Get);
		assert_eq!(request.body, None);
		assert_eq!(
			request.url.as_str(),
			"https://example.com/authorize?client_id=app&state=s+p+a+c+e",
		);
	}

	#[test]
	fn get_request_preserves_existing_query() {
		let url = Url::parse("https://example.com/authorize?tenant=acme")
			.expect("Endpoint URL fixture should parse successfully.");
		let request = build_request(&url, WireMethod::Get, &params(&[("client_id", "app")]));

		assert_eq!(request.url.as_str(), "https://example.com/authorize?tenant=acme&client_id=app");
	}

	#[test]
	fn post_request_encodes_parameters_into_body() {
		let url = Url::parse("https://example.com/token")
			.expect("Endpoint URL fixture should parse successfully.");
		let request = build_request(
			&url,
			WireMethod::Post,
			&params(&[("grant_type", "authorization_code"), ("code", "a/b")]),
		);

		assert_eq!(request.method, WireMethod::Post);
		assert_eq!(request.url.as_str(), "https://example.com/token");
		assert_eq!(request.body.as_deref(), Some("grant_type=authorization_code&code=a%2Fb"));
	}

	#[test]
	fn query_parameters_decode_percent_escapes() {
		let url = Url::parse("https://app.example/cb?code=abc&state=x%20y")
			.expect("Callback URL fixture should parse successfully.");
		let parsed = parse_query_parameters(&url);

		assert_eq!(parsed.get("code").map(String::as_str), Some("abc"));
		assert_eq!(parsed.get("state").map(String::as_str), Some("x y"));
	}
}
