use crate::{
	attributes::WorksAttributes,
	identity::{DeviceClass, EntityId, UniqueId},
	sensor::{EntityAttributes, EntityIdentity, EntityState, EntityUpdate, UpdateError},
	state::BinarySensorState,
};
use async_trait::async_trait;
use error_stack::ResultExt;
use tracing::debug;
use uacct_api::{Account, Work};

/// Binary sensor reporting whether maintenance works are currently active
/// for the account's residential object.
#[derive(Debug)]
pub struct WorksSensor {
	account: Account,
	unique_id: UniqueId,
	entity_id: EntityId,
	enabled: bool,
	works: Option<Vec<Work>>,
}

impl WorksSensor {
	pub fn new(account: Account) -> Self {
		let unique_id = UniqueId::works(account.id());
		let entity_id = EntityId::works(account.number());

		WorksSensor {
			account,
			unique_id,
			entity_id,
			enabled: true,
			works: None,
		}
	}

	/// True iff at least one fetched work is still marked active.
	pub fn is_on(&self) -> bool {
		self
			.works
			.as_deref()
			.is_some_and(|works| works.iter().any(|work| work.active))
	}

	/// The cached snapshot; `None` until the first update completes.
	pub fn works(&self) -> Option<&[Work]> {
		self.works.as_deref()
	}

	pub fn enabled(&self) -> bool {
		self.enabled
	}

	pub fn set_enabled(&mut self, enabled: bool) {
		self.enabled = enabled;
	}
}

impl EntityIdentity for WorksSensor {
	fn unique_id(&self) -> &UniqueId {
		&self.unique_id
	}

	fn entity_id(&self) -> &EntityId {
		&self.entity_id
	}

	fn device_class(&self) -> DeviceClass {
		DeviceClass::Works
	}

	fn icon(&self) -> &'static str {
		"mdi:tools"
	}
}

impl EntityState for WorksSensor {
	fn state(&self) -> BinarySensorState {
		match &self.works {
			None => BinarySensorState::Unknown,
			Some(_) => BinarySensorState::from_flag(self.is_on()),
		}
	}

	// An empty snapshot still counts as loaded.
	fn available(&self) -> bool {
		self.works.is_some()
	}
}

impl EntityAttributes for WorksSensor {
	type Document = WorksAttributes;

	fn attributes(&self) -> Option<WorksAttributes> {
		Some(match self.works.as_deref() {
			None | Some([]) => WorksAttributes::empty(),
			Some(works) => WorksAttributes::from(works),
		})
	}
}

#[async_trait]
impl EntityUpdate for WorksSensor {
	async fn update(&mut self) -> error_stack::Result<(), UpdateError> {
		let works = self
			.account
			.current_works()
			.await
			.change_context(UpdateError::Works)?;

		debug!(unique_id = %self.unique_id, count = works.len(), "replaced works snapshot");
		self.works = Some(works);

		Ok(())
	}
}
