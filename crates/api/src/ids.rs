use semval::{context::Context, Validate, ValidationResult};
use std::sync::Arc;

macro_rules! typed_id {
	($(#[$meta:meta])* $vis:vis $name:ident) => {
		$(#[$meta])*
		#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
		$vis struct $name(Arc<str>);

		impl From<&str> for $name {
			#[inline]
			fn from(value: &str) -> Self {
				Self(Arc::from(value))
			}
		}

		impl From<String> for $name {
			#[inline]
			fn from(value: String) -> Self {
				Self(value.into())
			}
		}

		impl From<Arc<str>> for $name {
			#[inline]
			fn from(value: Arc<str>) -> Self {
				Self(value)
			}
		}

		impl std::fmt::Debug for $name {
			#[inline]
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				std::fmt::Debug::fmt(&*self.0, f)
			}
		}

		impl std::fmt::Display for $name {
			#[inline]
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				std::fmt::Display::fmt(&*self.0, f)
			}
		}

		impl std::borrow::Borrow<str> for $name {
			#[inline]
			fn borrow(&self) -> &str {
				&self.0
			}
		}

		impl AsRef<str> for $name {
			#[inline]
			fn as_ref(&self) -> &str {
				&self.0
			}
		}

		impl std::ops::Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}

		impl serde::Serialize for $name {
			#[inline]
			fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
			where
				S: serde::Serializer,
			{
				serializer.serialize_str(&self.0)
			}
		}

		impl<'de> serde::Deserialize<'de> for $name {
			fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
			where
				D: serde::Deserializer<'de>,
			{
				<String as serde::Deserialize>::deserialize(deserializer).map(Self::from)
			}
		}
	};
}

typed_id!(
	/// Provider-side identifier of an account. Keys the entity mapping.
	pub AccountId
);

typed_id!(
	/// Human-facing account number, used for entity-id slugs.
	pub AccountNumber
);

typed_id!(
	/// Identifier of a residential object, used to scope works queries.
	pub ObjectId
);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AccountIdInvalidity {
	Empty,
}

impl Validate for AccountId {
	type Invalidity = AccountIdInvalidity;

	fn validate(&self) -> ValidationResult<Self::Invalidity> {
		Context::new()
			.invalidate_if(self.is_empty(), AccountIdInvalidity::Empty)
			.into()
	}
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AccountNumberInvalidity {
	Empty,
}

impl Validate for AccountNumber {
	type Invalidity = AccountNumberInvalidity;

	fn validate(&self) -> ValidationResult<Self::Invalidity> {
		Context::new()
			.invalidate_if(self.is_empty(), AccountNumberInvalidity::Empty)
			.into()
	}
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ObjectIdInvalidity {
	Empty,
}

impl Validate for ObjectId {
	type Invalidity = ObjectIdInvalidity;

	fn validate(&self) -> ValidationResult<Self::Invalidity> {
		Context::new()
			.invalidate_if(self.is_empty(), ObjectIdInvalidity::Empty)
			.into()
	}
}
