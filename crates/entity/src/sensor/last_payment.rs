use crate::{
	attributes::PaymentAttributes,
	identity::{DeviceClass, EntityId, UniqueId},
	options::SensorOptions,
	sensor::{EntityAttributes, EntityIdentity, EntityState, EntityUpdate, UpdateError},
	state::BinarySensorState,
};
use async_trait::async_trait;
use error_stack::ResultExt;
use tracing::debug;
use uacct_api::{Account, Payment};

/// Binary sensor reporting whether the account's most recent payment was
/// accepted by the provider.
#[derive(Debug)]
pub struct LastPaymentSensor {
	account: Account,
	options: SensorOptions,
	unique_id: UniqueId,
	entity_id: EntityId,
	enabled: bool,
	payment: Option<Payment>,
}

impl LastPaymentSensor {
	pub fn new(account: Account, options: SensorOptions) -> Self {
		let unique_id = UniqueId::last_payment(account.id());
		let entity_id = EntityId::last_payment(account.number());

		LastPaymentSensor {
			account,
			options,
			unique_id,
			entity_id,
			enabled: true,
			payment: None,
		}
	}

	/// True iff a payment is cached and the provider accepted it.
	pub fn is_on(&self) -> bool {
		self.payment.as_ref().is_some_and(|payment| payment.accepted)
	}

	/// The cached payment; `None` until a payment has been fetched.
	pub fn payment(&self) -> Option<&Payment> {
		self.payment.as_ref()
	}

	pub fn enabled(&self) -> bool {
		self.enabled
	}

	pub fn set_enabled(&mut self, enabled: bool) {
		self.enabled = enabled;
	}
}

impl EntityIdentity for LastPaymentSensor {
	fn unique_id(&self) -> &UniqueId {
		&self.unique_id
	}

	fn entity_id(&self) -> &EntityId {
		&self.entity_id
	}

	fn device_class(&self) -> DeviceClass {
		DeviceClass::Payment
	}

	fn icon(&self) -> &'static str {
		"mdi:cash-multiple"
	}
}

impl EntityState for LastPaymentSensor {
	fn state(&self) -> BinarySensorState {
		match &self.payment {
			None => BinarySensorState::Unknown,
			Some(_) => BinarySensorState::from_flag(self.is_on()),
		}
	}
}

impl EntityAttributes for LastPaymentSensor {
	type Document = PaymentAttributes;

	fn attributes(&self) -> Option<PaymentAttributes> {
		let payment = self.payment.as_ref()?;
		let doc = PaymentAttributes::from(payment);

		if self.options.dev_presentation_enabled() {
			Some(doc.redacted())
		} else {
			Some(doc)
		}
	}
}

#[async_trait]
impl EntityUpdate for LastPaymentSensor {
	async fn update(&mut self) -> error_stack::Result<(), UpdateError> {
		let payment = self
			.account
			.last_payment()
			.await
			.change_context(UpdateError::LastPayment)?;

		debug!(unique_id = %self.unique_id, cached = payment.is_some(), "replaced payment snapshot");
		self.payment = payment;

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::redact::PLACEHOLDER;
	use async_trait::async_trait;
	use chrono::{TimeZone, Utc};
	use std::sync::Arc;
	use uacct_api::{AccountId, ApiError, ObjectId, ProviderApi, Service, Work};

	struct FixedApi {
		payment: Option<Payment>,
	}

	#[async_trait]
	impl ProviderApi for FixedApi {
		async fn works(&self, _object: &ObjectId) -> Result<Vec<Work>, ApiError> {
			Ok(Vec::new())
		}

		async fn last_payment(&self, _account: &AccountId) -> Result<Option<Payment>, ApiError> {
			Ok(self.payment.clone())
		}
	}

	fn payment(accepted: bool) -> Payment {
		Payment {
			id: "pay-1".into(),
			amount: 1234.56,
			created_at: Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 0).unwrap(),
			period: Some("2024-02".into()),
			accepted,
			services: vec![Service {
				id: "svc-001".into(),
				code: "electricity".into(),
				name: "Electricity".into(),
				amount: 1234.56,
			}],
		}
	}

	fn sensor(payment: Option<Payment>, options: SensorOptions) -> LastPaymentSensor {
		let account = Account::new("acct-1", "0123456789", None, Arc::new(FixedApi { payment }));
		LastPaymentSensor::new(account, options)
	}

	#[test]
	fn unloaded_sensor_is_unknown_without_attributes() {
		let sensor = sensor(None, SensorOptions::new());

		assert_eq!(sensor.state(), BinarySensorState::Unknown);
		assert!(sensor.attributes().is_none());
		// availability is not tied to the payment cache
		assert!(sensor.available());
	}

	#[tokio::test]
	async fn accepted_payment_turns_the_sensor_on() {
		let mut sensor = sensor(Some(payment(true)), SensorOptions::new());
		sensor.update().await.expect("should update");

		assert_eq!(sensor.state(), BinarySensorState::On);
	}

	#[tokio::test]
	async fn rejected_payment_leaves_the_sensor_off() {
		let mut sensor = sensor(Some(payment(false)), SensorOptions::new());
		sensor.update().await.expect("should update");

		assert_eq!(sensor.state(), BinarySensorState::Off);
	}

	#[tokio::test]
	async fn absent_payment_stays_unknown_after_update() {
		let mut sensor = sensor(None, SensorOptions::new());
		sensor.update().await.expect("should update");

		assert_eq!(sensor.state(), BinarySensorState::Unknown);
		assert!(sensor.attributes().is_none());
	}

	#[tokio::test]
	async fn attributes_follow_the_cached_payment() {
		let mut sensor = sensor(Some(payment(true)), SensorOptions::new());
		sensor.update().await.expect("should update");

		let doc = sensor.attributes().expect("should have attributes");
		let value = serde_json::to_value(&doc).expect("should serialize");

		assert_eq!(value["amount"], 1234.56);
		assert_eq!(value["paid_at"], "2024-03-05T12:30:00+00:00");
		assert_eq!(value["services"][0]["id"], "svc-001");
	}

	#[tokio::test]
	async fn presentation_mode_masks_attributes() {
		let mut sensor = sensor(
			Some(payment(true)),
			SensorOptions::new().dev_presentation(true),
		);
		sensor.update().await.expect("should update");

		let doc = sensor.attributes().expect("should have attributes");
		let value = serde_json::to_value(&doc).expect("should serialize");

		assert_eq!(value["paid_at"], PLACEHOLDER);
		assert_eq!(value["period"], PLACEHOLDER);
		assert_eq!(value["amount"], "****.**");
		assert_eq!(value["services"][0]["id"], "***-***");

		// state is unaffected by presentation mode
		assert_eq!(sensor.state(), BinarySensorState::On);
	}

	#[tokio::test]
	async fn update_is_idempotent_for_identical_responses() {
		let mut sensor = sensor(Some(payment(true)), SensorOptions::new());

		sensor.update().await.expect("should update");
		let first_state = sensor.state();
		let first_doc = sensor.attributes();

		sensor.update().await.expect("should update");
		assert_eq!(sensor.state(), first_state);
		assert_eq!(sensor.attributes(), first_doc);
	}

	#[test]
	fn identity() {
		let sensor = sensor(None, SensorOptions::new());

		assert_eq!(sensor.unique_id().as_str(), "account_acct-1_lastpayment");
		assert_eq!(
			sensor.entity_id().as_str(),
			"binary_sensor.0123456789-last-payment"
		);
		assert_eq!(sensor.device_class(), DeviceClass::Payment);
		assert_eq!(sensor.icon(), "mdi:cash-multiple");
	}
}
