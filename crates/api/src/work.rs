use chrono::{DateTime, Utc};
use semval::{context::Context, Validate, ValidationResult};
use serde::{Deserialize, Serialize};

/// A maintenance activity scoped to a residential object.
///
/// Works are ephemeral: every update replaces the previous snapshot
/// wholesale, they are never diffed or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Work {
	/// Kind of maintenance being performed (for example `plumbing`).
	#[serde(rename = "type")]
	pub kind: String,

	/// Scheduled start of the activity.
	pub start: DateTime<Utc>,

	/// Scheduled end of the activity.
	pub end: DateTime<Utc>,

	/// Free-form note from the provider, if one was published.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,

	/// Set while the activity is ongoing.
	#[serde(default)]
	pub active: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WorkInvalidity {
	KindEmpty,
	IntervalInverted,
}

impl Validate for Work {
	type Invalidity = WorkInvalidity;

	fn validate(&self) -> ValidationResult<Self::Invalidity> {
		Context::new()
			.invalidate_if(self.kind.is_empty(), WorkInvalidity::KindEmpty)
			.invalidate_if(self.end < self.start, WorkInvalidity::IntervalInverted)
			.into()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	fn work(start_hour: u32, end_hour: u32) -> Work {
		Work {
			kind: "plumbing".into(),
			start: Utc.with_ymd_and_hms(2024, 3, 1, start_hour, 0, 0).unwrap(),
			end: Utc.with_ymd_and_hms(2024, 3, 1, end_hour, 0, 0).unwrap(),
			description: None,
			active: true,
		}
	}

	#[test]
	fn forward_interval_is_valid() {
		work(8, 17).validate().expect("should be valid")
	}

	#[test]
	fn inverted_interval_is_invalid() {
		let err: Vec<_> = work(17, 8)
			.validate()
			.expect_err("should be invalid")
			.into_iter()
			.collect();

		assert_eq!(&*err, &[WorkInvalidity::IntervalInverted])
	}

	#[test]
	fn empty_kind_is_invalid() {
		let mut work = work(8, 17);
		work.kind = String::new();

		let err: Vec<_> = work
			.validate()
			.expect_err("should be invalid")
			.into_iter()
			.collect();

		assert_eq!(&*err, &[WorkInvalidity::KindEmpty])
	}
}
