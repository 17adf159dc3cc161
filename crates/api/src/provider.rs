use crate::{
	error::ApiError,
	ids::{AccountId, ObjectId},
	payment::Payment,
	work::Work,
};
use async_trait::async_trait;

/// Boundary to the provider's account API.
///
/// Network transport, session handling and authentication all live behind
/// this trait. Implementations return full snapshots; partial results are
/// not part of the contract.
#[async_trait]
pub trait ProviderApi: Send + Sync {
	/// Works currently published for the given residential object.
	async fn works(&self, object: &ObjectId) -> Result<Vec<Work>, ApiError>;

	/// The most recent payment on the account, if any payment exists yet.
	async fn last_payment(&self, account: &AccountId) -> Result<Option<Payment>, ApiError>;
}

static_assertions::assert_obj_safe!(ProviderApi);
