//! Flow orchestrators for the authorization-code grant.
//!
//! Each authorization-code flow instance walks `Idle → AuthorizationRequested →
//! {AuthorizationGranted | AuthorizationDenied} → TokenRequested → {TokenObtained |
//! TokenExchangeFailed}`; refresh runs its own `Idle → RefreshRequested →
//! {RefreshObtained | RefreshFailed}`. The courier keeps no state between calls, so
//! those transitions are realized by the caller's call sequence: build the redirect,
//! hand the callback URL back, exchange the code, refresh later. Failed exchanges are
//! never retried automatically; retry policy belongs to the caller.

pub mod authorize;
pub mod refresh;
pub mod token;

mod common;

pub use authorize::*;
pub use refresh::*;
pub use token::*;

// self
use crate::{_prelude::*, http::Transport};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Courier specialized for the crate's default reqwest transport.
pub type ReqwestCourier = Courier<ReqwestTransport>;

/// Coordinates OAuth 2.0 flows over a single transport capability.
///
/// The courier owns nothing but the transport reference; every request carries its own
/// endpoints and credentials, and no flow state survives a call. Concurrent use of one
/// courier for independent flows is therefore inherently safe.
#[derive(Clone)]
pub struct Courier<T>
where
	T: ?Sized + Transport,
{
	/// Transport used for every outbound token-endpoint request.
	pub transport: Arc<T>,
}
impl<T> Courier<T>
where
	T: ?Sized + Transport,
{
	/// Creates a courier that reuses the caller-provided transport.
	pub fn with_transport(transport: impl Into<Arc<T>>) -> Self {
		Self { transport: transport.into() }
	}
}
#[cfg(feature = "reqwest")]
impl Courier<ReqwestTransport> {
	/// Creates a courier backed by a fresh reqwest transport.
	pub fn new() -> Self {
		Self::with_transport(ReqwestTransport::default())
	}
}
#[cfg(feature = "reqwest")]
impl Default for Courier<ReqwestTransport> {
	fn default() -> Self {
		Self::new()
	}
}
impl<T> Debug for Courier<T>
where
	T: ?Sized + Transport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Courier").finish_non_exhaustive()
	}
}
