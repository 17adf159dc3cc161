use crate::{
	identity::{DeviceClass, EntityId, UniqueId},
	state::BinarySensorState,
};
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

mod last_payment;
mod works;

pub use last_payment::LastPaymentSensor;
pub use works::WorksSensor;

/// Context attached to entity update failures. The underlying API error
/// travels inside the report; the host owns retry scheduling.
#[derive(Clone, Debug, Error)]
pub enum UpdateError {
	#[error("failed to fetch current works")]
	Works,

	#[error("failed to fetch the last payment")]
	LastPayment,
}

/// Stable identity the host registry keys on.
pub trait EntityIdentity {
	fn unique_id(&self) -> &UniqueId;
	fn entity_id(&self) -> &EntityId;
	fn device_class(&self) -> DeviceClass;
	fn icon(&self) -> &'static str;
}

/// Host-facing state of an entity.
pub trait EntityState {
	fn state(&self) -> BinarySensorState;

	/// Whether the entity has data to report. Entities that gate on their
	/// snapshot override this; the default is always-available.
	fn available(&self) -> bool {
		true
	}
}

/// Attribute document published alongside the state.
pub trait EntityAttributes {
	type Document: Serialize;

	fn attributes(&self) -> Option<Self::Document>;
}

/// Pull a fresh snapshot from the account API, replacing the cached one
/// wholesale. Failures propagate unchanged.
#[async_trait]
pub trait EntityUpdate {
	async fn update(&mut self) -> error_stack::Result<(), UpdateError>;
}
