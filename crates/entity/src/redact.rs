use std::fmt;

/// Placeholder substituted for values that are dropped entirely in
/// presentation mode.
pub const PLACEHOLDER: &str = "<redacted>";

/// An attribute value that can be swapped for a masked rendition when the
/// demo presentation mode is enabled.
///
/// Masking never removes the attribute key; hosts keep rendering the same
/// document shape either way.
#[derive(Debug, Clone, PartialEq)]
pub enum Redactable<T> {
	Plain(T),
	Masked(String),
}

impl<T> Redactable<T> {
	#[inline]
	pub const fn is_masked(&self) -> bool {
		matches!(self, Self::Masked(_))
	}

	/// Replace the value with the fixed placeholder.
	pub fn redact(&mut self) {
		*self = Self::Masked(PLACEHOLDER.into());
	}
}

impl<T: fmt::Display> Redactable<T> {
	/// Mask alphanumeric characters while keeping the rendered shape of the
	/// value, so `1234.56` becomes `****.**`.
	pub fn obfuscate(&mut self) {
		let rendered = match self {
			Self::Plain(value) => value.to_string(),
			Self::Masked(value) => value.clone(),
		};

		*self = Self::Masked(obfuscate(&rendered));
	}
}

impl<T> From<T> for Redactable<T> {
	#[inline]
	fn from(value: T) -> Self {
		Self::Plain(value)
	}
}

impl<T: serde::Serialize> serde::Serialize for Redactable<T> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		match self {
			Self::Plain(value) => value.serialize(serializer),
			Self::Masked(value) => serializer.serialize_str(value),
		}
	}
}

fn obfuscate(value: &str) -> String {
	value
		.chars()
		.map(|c| if c.is_alphanumeric() { '*' } else { c })
		.collect()
}
