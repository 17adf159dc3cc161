use thiserror::Error;

/// Failure surfaced by the provider's account API.
///
/// Nothing in this workspace catches these: fetch failures propagate to the
/// host's per-entity update handling, which owns retry scheduling.
#[derive(Clone, Debug, Error)]
pub enum ApiError {
	#[error("failed to send request to the account API")]
	Request,

	#[error("failed to decode account API response")]
	Decode,

	#[error("account API rejected the session credentials")]
	Unauthorized,
}
