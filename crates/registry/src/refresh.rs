use crate::{host::EntityHost, store::EntityStore};
use tracing::debug;
use uacct_api::Account;
use uacct_entity::{EntityIdentity, LastPaymentSensor, SensorOptions, WorksSensor};

/// Construction and enablement surface the refresh routine needs from a
/// sensor variant.
pub trait AccountEntity: EntityIdentity {
	fn for_account(account: Account, options: &SensorOptions) -> Self;
	fn enabled(&self) -> bool;
}

impl AccountEntity for WorksSensor {
	fn for_account(account: Account, _options: &SensorOptions) -> Self {
		WorksSensor::new(account)
	}

	fn enabled(&self) -> bool {
		self.enabled()
	}
}

impl AccountEntity for LastPaymentSensor {
	fn for_account(account: Account, options: &SensorOptions) -> Self {
		LastPaymentSensor::new(account, options.clone())
	}

	fn enabled(&self) -> bool {
		self.enabled()
	}
}

/// Result of one registration/refresh pass for one account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
	/// No entity existed for the account; one was created and handed to the
	/// host for addition.
	Created,

	/// An enabled entity already existed; the host was asked for a forced
	/// state refresh.
	RefreshRequested,

	/// A disabled entity already existed; nothing to do.
	SkippedDisabled,
}

/// Create-or-refresh one sensor variant for one account.
///
/// First sight of an account id is the create path, not an error. There is
/// no eviction; the store only grows.
pub fn refresh_account<E, S, H>(
	store: &mut S,
	host: &mut H,
	account: &Account,
	options: &SensorOptions,
) -> RefreshOutcome
where
	E: AccountEntity,
	S: EntityStore<E> + ?Sized,
	H: EntityHost<E> + ?Sized,
{
	let key = account.id().clone();

	match store.get(&key) {
		None => {
			let entity = E::for_account(account.clone(), options);
			debug!(account = %key, unique_id = %entity.unique_id(), "registering new entity");

			host.add(&entity);
			store.insert(key, entity);
			RefreshOutcome::Created
		}
		Some(entity) if entity.enabled() => {
			debug!(account = %key, unique_id = %entity.unique_id(), "requesting forced refresh");

			host.request_refresh(entity);
			RefreshOutcome::RefreshRequested
		}
		Some(_) => RefreshOutcome::SkippedDisabled,
	}
}
