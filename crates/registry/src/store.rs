use std::collections::HashMap;
use uacct_api::AccountId;

/// Keyed store of per-account entity instances.
///
/// The host owns the backing storage; the refresh routine is its only
/// writer. Entities are never evicted: once created they live for the
/// lifetime of the configuration entry.
pub trait EntityStore<E> {
	fn get(&self, key: &AccountId) -> Option<&E>;
	fn get_mut(&mut self, key: &AccountId) -> Option<&mut E>;
	fn insert(&mut self, key: AccountId, entity: E);
}

impl<E> EntityStore<E> for HashMap<AccountId, E> {
	fn get(&self, key: &AccountId) -> Option<&E> {
		HashMap::get(self, key)
	}

	fn get_mut(&mut self, key: &AccountId) -> Option<&mut E> {
		HashMap::get_mut(self, key)
	}

	fn insert(&mut self, key: AccountId, entity: E) {
		HashMap::insert(self, key, entity);
	}
}
