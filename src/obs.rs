//! Optional observability helpers for courier flows.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth2_courier.flow` with the `flow` (grant)
//!   and `stage` (call site) fields around every observed operation.
//! - Enable `metrics` to increment the `oauth2_courier_flow_total` counter for every
//!   attempt/success/failure, labeled by `flow` + `outcome`.
//!
//! With both features off, [`observe`] and [`observe_async`] reduce to plain calls.

// self
use crate::_prelude::*;

/// OAuth flow kinds observed by the courier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// Authorization redirect building and callback parsing.
	Authorization,
	/// Authorization-code-for-token exchange.
	TokenExchange,
	/// Refresh token flow.
	Refresh,
}
impl FlowKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::Authorization => "authorization",
			FlowKind::TokenExchange => "token_exchange",
			FlowKind::Refresh => "refresh",
		}
	}
}
impl Display for FlowKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Entry to a courier helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl FlowOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}

	fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => FlowOutcome::Success,
			Err(_) => FlowOutcome::Failure,
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records a flow outcome via the global metrics recorder (when enabled).
pub fn record_flow_outcome(kind: FlowKind, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_courier_flow_total",
			"flow" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Runs a synchronous flow operation with attempt/outcome accounting and, when the
/// `tracing` feature is on, a span covering the whole call.
pub fn observe<T>(kind: FlowKind, stage: &'static str, op: impl FnOnce() -> Result<T>) -> Result<T> {
	#[cfg(feature = "tracing")]
	let _entered =
		tracing::info_span!("oauth2_courier.flow", flow = kind.as_str(), stage).entered();
	#[cfg(not(feature = "tracing"))]
	let _ = stage;

	record_flow_outcome(kind, FlowOutcome::Attempt);

	let result = op();

	record_flow_outcome(kind, FlowOutcome::of(&result));

	result
}

/// Runs an asynchronous flow operation with attempt/outcome accounting and, when the
/// `tracing` feature is on, a span instrumenting the future (no guard is held across
/// `.await` points).
pub async fn observe_async<T, Fut>(kind: FlowKind, stage: &'static str, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	record_flow_outcome(kind, FlowOutcome::Attempt);

	#[cfg(feature = "tracing")]
	let result = {
		use tracing::Instrument;

		fut.instrument(tracing::info_span!("oauth2_courier.flow", flow = kind.as_str(), stage))
			.await
	};
	#[cfg(not(feature = "tracing"))]
	let result = {
		let _ = stage;

		fut.await
	};

	record_flow_outcome(kind, FlowOutcome::of(&result));

	result
}
