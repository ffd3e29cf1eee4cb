#![cfg(all(feature = "reqwest", feature = "test"))]

// crates.io
use httpmock::prelude::*;
// self
use oauth2_courier::{_preludet::*, flows::TokenExchangeRequest, message::OAuthClient};

const CLIENT_ID: &str = "client-exchange";
const CLIENT_SECRET: &str = "secret-exchange";

fn build_request(server: &MockServer, client: OAuthClient) -> TokenExchangeRequest {
	TokenExchangeRequest {
		endpoint: Url::parse(&server.url("/token"))
			.expect("Mock token endpoint should parse successfully."),
		code: "code-abc".into(),
		client,
		redirect_uri: Url::parse("https://app.example/cb")
			.expect("Redirect URI fixture should parse successfully."),
	}
}

#[tokio::test]
async fn exchange_decodes_grant_with_extension_parameters() {
	let server = MockServer::start_async().await;
	let courier = build_reqwest_test_courier();
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/token")
				.body_includes("grant_type=authorization_code")
				.body_includes("code=code-abc")
				.body_includes("redirect_uri=https%3A%2F%2Fapp.example%2Fcb")
				.body_includes(format!("client_id={CLIENT_ID}"))
				.body_includes(format!("client_secret={CLIENT_SECRET}"));
			then.status(200)
				.header("content-type", "application/json")
				.body(
					"{\"access_token\":\"access-new\",\"token_type\":\"bearer\",\"expires_in\":3600,\"refresh_token\":\"refresh-new\",\"example_parameter\":\"example_value\"}",
				);
		})
		.await;
	let grant = courier
		.exchange_token(&build_request(
			&server,
			OAuthClient::new(CLIENT_ID).with_client_secret(CLIENT_SECRET),
		))
		.await
		.expect("Token exchange should succeed.");

	mock.assert_async().await;

	assert_eq!(grant.access_token, "access-new");
	assert_eq!(grant.token_type, "bearer");
	assert_eq!(grant.expires_in, Some(3600));
	assert_eq!(grant.refresh_token.as_deref(), Some("refresh-new"));
	assert_eq!(grant.scope, None);
	assert_eq!(
		grant.extra.get("example_parameter").and_then(|value| value.as_str()),
		Some("example_value"),
	);
}

#[tokio::test]
async fn exchange_for_public_client_sends_no_client_secret() {
	let server = MockServer::start_async().await;
	let courier = build_reqwest_test_courier();
	// Matches only bodies that leak a secret; the public-client exchange must never hit it.
	let secret_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token").body_includes("client_secret");
			then.status(500);
		})
		.await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/token")
				.body_includes("grant_type=authorization_code")
				.body_includes(format!("client_id={CLIENT_ID}"));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"access-public\",\"token_type\":\"bearer\"}");
		})
		.await;
	let grant = courier
		.exchange_token(&build_request(&server, OAuthClient::new(CLIENT_ID)))
		.await
		.expect("Public-client exchange should succeed.");

	secret_mock.assert_calls_async(0).await;
	mock.assert_async().await;

	assert_eq!(grant.access_token, "access-public");
}

#[tokio::test]
async fn exchange_surfaces_oauth_error_body() {
	let server = MockServer::start_async().await;
	let courier = build_reqwest_test_courier();
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(400)
				.header("content-type", "application/json")
				.body("{\"error\":\"invalid_grant\",\"error_description\":\"Code expired\"}");
		})
		.await;
	let err = courier
		.exchange_token(&build_request(&server, OAuthClient::new(CLIENT_ID)))
		.await
		.expect_err("OAuth error bodies should surface to the caller.");

	mock.assert_async().await;

	let Error::Server(server_error) = err else {
		panic!("OAuth error bodies should surface as server errors.");
	};

	assert_eq!(server_error.error, "invalid_grant");
	assert_eq!(server_error.error_description.as_deref(), Some("Code expired"));
}

#[tokio::test]
async fn exchange_surfaces_decode_error_for_malformed_body() {
	let server = MockServer::start_async().await;
	let courier = build_reqwest_test_courier();
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(502).header("content-type", "text/html").body("<html>Bad Gateway</html>");
		})
		.await;
	let err = courier
		.exchange_token(&build_request(&server, OAuthClient::new(CLIENT_ID)))
		.await
		.expect_err("Malformed bodies should surface to the caller.");

	mock.assert_async().await;

	assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn exchange_surfaces_transport_error_for_unreachable_endpoint() {
	let courier = build_reqwest_test_courier();
	let request = TokenExchangeRequest {
		// Loopback discard port; nothing listens there.
		endpoint: Url::parse("http://127.0.0.1:9/token")
			.expect("Unreachable endpoint fixture should parse successfully."),
		code: "code-abc".into(),
		client: OAuthClient::new(CLIENT_ID),
		redirect_uri: Url::parse("https://app.example/cb")
			.expect("Redirect URI fixture should parse successfully."),
	};
	let err = courier
		.exchange_token(&request)
		.await
		.expect_err("Unreachable endpoints should surface to the caller.");

	assert!(matches!(err, Error::Transport(_)));
}
