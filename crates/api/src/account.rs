use crate::{
	error::ApiError,
	ids::{AccountId, AccountNumber, ObjectId},
	payment::Payment,
	provider::ProviderApi,
	work::Work,
};
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};
use tracing::trace;

/// The physical premise associated with an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidentialObject {
	/// Identifier used to scope works queries.
	pub id: ObjectId,

	/// Street address, if the provider reports one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub address: Option<String>,
}

/// A utility-provider account, owned by the host configuration entry and
/// long-lived for the integration's lifetime.
#[derive(Clone)]
pub struct Account {
	id: AccountId,
	number: AccountNumber,
	residential_object: Option<ResidentialObject>,
	api: Arc<dyn ProviderApi>,
}

impl Account {
	pub fn new(
		id: impl Into<AccountId>,
		number: impl Into<AccountNumber>,
		residential_object: Option<ResidentialObject>,
		api: Arc<dyn ProviderApi>,
	) -> Self {
		Account {
			id: id.into(),
			number: number.into(),
			residential_object,
			api,
		}
	}

	pub fn id(&self) -> &AccountId {
		&self.id
	}

	pub fn number(&self) -> &AccountNumber {
		&self.number
	}

	pub fn residential_object(&self) -> Option<&ResidentialObject> {
		self.residential_object.as_ref()
	}

	/// Current works for the account's residential object.
	///
	/// Accounts without a residential object have no works scope; the
	/// result is an empty snapshot, not an error.
	pub async fn current_works(&self) -> Result<Vec<Work>, ApiError> {
		match &self.residential_object {
			Some(object) => self.api.works(&object.id).await,
			None => {
				trace!(account = %self.id, "no residential object, works snapshot is empty");
				Ok(Vec::new())
			}
		}
	}

	/// The most recent payment on the account.
	///
	/// `None` means no payment exists yet, which callers treat as "no data"
	/// rather than a failure.
	pub async fn last_payment(&self) -> Result<Option<Payment>, ApiError> {
		self.api.last_payment(&self.id).await
	}
}

impl fmt::Debug for Account {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Account")
			.field("id", &self.id)
			.field("number", &self.number)
			.field("residential_object", &self.residential_object)
			.finish_non_exhaustive()
	}
}
