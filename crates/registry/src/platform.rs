use crate::{
	host::EntityHost,
	refresh::{refresh_account, RefreshOutcome},
};
use std::collections::HashMap;
use uacct_api::{Account, AccountId};
use uacct_entity::{EntityUpdate, LastPaymentSensor, SensorOptions, UpdateError, WorksSensor};

/// Entity stores for both sensor variants of one configuration entry.
///
/// This is the crate's rendition of the host's "common setup" factory: one
/// value owning the per-variant mappings and running the registration
/// routine for both sensor kinds per account.
pub struct AccountPlatform {
	options: SensorOptions,
	works: HashMap<AccountId, WorksSensor>,
	last_payment: HashMap<AccountId, LastPaymentSensor>,
}

impl AccountPlatform {
	pub fn new(options: SensorOptions) -> Self {
		AccountPlatform {
			options,
			works: HashMap::new(),
			last_payment: HashMap::new(),
		}
	}

	pub fn options(&self) -> &SensorOptions {
		&self.options
	}

	/// Run the registration/refresh routine for both sensor variants.
	pub fn refresh_account<H>(
		&mut self,
		host: &mut H,
		account: &Account,
	) -> (RefreshOutcome, RefreshOutcome)
	where
		H: EntityHost<WorksSensor> + EntityHost<LastPaymentSensor>,
	{
		let works = refresh_account(&mut self.works, &mut *host, account, &self.options);
		let last_payment = refresh_account(&mut self.last_payment, host, account, &self.options);

		(works, last_payment)
	}

	pub fn works_sensor(&self, account: &AccountId) -> Option<&WorksSensor> {
		self.works.get(account)
	}

	pub fn last_payment_sensor(&self, account: &AccountId) -> Option<&LastPaymentSensor> {
		self.last_payment.get(account)
	}

	pub fn works_sensors(&self) -> impl Iterator<Item = &WorksSensor> {
		self.works.values()
	}

	pub fn last_payment_sensors(&self) -> impl Iterator<Item = &LastPaymentSensor> {
		self.last_payment.values()
	}

	/// Update every entity in place, replacing each cached snapshot
	/// wholesale. The first failure aborts the pass and propagates; retry
	/// scheduling stays with the host.
	pub async fn update_all(&mut self) -> error_stack::Result<(), UpdateError> {
		for sensor in self.works.values_mut() {
			sensor.update().await?;
		}

		for sensor in self.last_payment.values_mut() {
			sensor.update().await?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_matches::assert_matches;
	use async_trait::async_trait;
	use chrono::{TimeZone, Utc};
	use std::sync::Arc;
	use uacct_api::{ApiError, ObjectId, Payment, ProviderApi, ResidentialObject, Work};
	use uacct_entity::{BinarySensorState, EntityIdentity, EntityState};

	struct FixedApi;

	#[async_trait]
	impl ProviderApi for FixedApi {
		async fn works(&self, _object: &ObjectId) -> Result<Vec<Work>, ApiError> {
			Ok(vec![Work {
				kind: "plumbing".into(),
				start: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
				end: Utc.with_ymd_and_hms(2024, 3, 1, 17, 0, 0).unwrap(),
				description: None,
				active: true,
			}])
		}

		async fn last_payment(&self, _account: &AccountId) -> Result<Option<Payment>, ApiError> {
			Ok(Some(Payment {
				id: "pay-1".into(),
				amount: 1234.56,
				created_at: Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 0).unwrap(),
				period: None,
				accepted: true,
				services: Vec::new(),
			}))
		}
	}

	#[derive(Default)]
	struct RecordingHost {
		added: Vec<String>,
		refreshed: Vec<String>,
	}

	impl<E: EntityIdentity> EntityHost<E> for RecordingHost {
		fn add(&mut self, entity: &E) {
			self.added.push(entity.unique_id().to_string());
		}

		fn request_refresh(&mut self, entity: &E) {
			self.refreshed.push(entity.unique_id().to_string());
		}
	}

	fn account() -> Account {
		Account::new(
			"acct-1",
			"0123456789",
			Some(ResidentialObject {
				id: ObjectId::from("obj-1"),
				address: None,
			}),
			Arc::new(FixedApi),
		)
	}

	#[test]
	fn refresh_registers_both_variants() {
		let mut platform = AccountPlatform::new(SensorOptions::new());
		let mut host = RecordingHost::default();
		let account = account();

		let (works, last_payment) = platform.refresh_account(&mut host, &account);
		assert_eq!(works, RefreshOutcome::Created);
		assert_eq!(last_payment, RefreshOutcome::Created);
		assert_eq!(host.added.len(), 2);

		let (works, last_payment) = platform.refresh_account(&mut host, &account);
		assert_eq!(works, RefreshOutcome::RefreshRequested);
		assert_eq!(last_payment, RefreshOutcome::RefreshRequested);
		assert_eq!(host.added.len(), 2);
	}

	#[tokio::test]
	async fn update_all_loads_every_snapshot() {
		let mut platform = AccountPlatform::new(SensorOptions::new());
		let mut host = RecordingHost::default();
		let account = account();

		platform.refresh_account(&mut host, &account);
		platform.update_all().await.expect("should update");

		assert_matches!(platform.works_sensor(account.id()), Some(sensor) => {
			assert_eq!(sensor.state(), BinarySensorState::On);
		});
		assert_matches!(platform.last_payment_sensor(account.id()), Some(sensor) => {
			assert_eq!(sensor.state(), BinarySensorState::On);
		});
	}
}
