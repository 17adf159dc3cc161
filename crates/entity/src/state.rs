use serde::{Deserialize, Serialize};
use std::fmt;

/// Host-facing state of a binary sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinarySensorState {
	/// The sensed condition currently holds.
	#[serde(rename = "on")]
	On,

	/// The sensed condition does not hold.
	#[serde(rename = "off")]
	Off,

	/// The backing snapshot has not loaded yet.
	#[serde(rename = "unknown")]
	Unknown,
}

impl BinarySensorState {
	#[inline]
	pub const fn is_unknown(&self) -> bool {
		matches!(self, Self::Unknown)
	}

	/// Collapse a loaded on/off flag into a state.
	#[inline]
	pub const fn from_flag(on: bool) -> Self {
		if on { Self::On } else { Self::Off }
	}
}

impl fmt::Display for BinarySensorState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::On => "on",
			Self::Off => "off",
			Self::Unknown => "unknown",
		})
	}
}
