pub mod attributes;
pub mod identity;
pub mod options;
pub mod redact;
pub mod sensor;
pub mod state;

pub use identity::{DeviceClass, EntityId, UniqueId};
pub use options::SensorOptions;
pub use sensor::{
	EntityAttributes, EntityIdentity, EntityState, EntityUpdate, LastPaymentSensor, UpdateError,
	WorksSensor,
};
pub use state::BinarySensorState;

/// Integration domain. Qualifies device classes exposed to the host.
pub const DOMAIN: &str = "uacct";
