/// Per-entity construction options, sourced from the host configuration
/// entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensorOptions {
	dev_presentation: bool,
}

impl SensorOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Enable the demo presentation mode: payment attribute values that
	/// identify the account are masked before they reach the host.
	pub fn dev_presentation(mut self, enabled: bool) -> Self {
		self.dev_presentation = enabled;
		self
	}

	pub fn dev_presentation_enabled(&self) -> bool {
		self.dev_presentation
	}
}
