use semval::{context::Context, Validate, ValidationResult};
use slug::slugify;
use std::{fmt, sync::Arc};
use uacct_api::{AccountId, AccountNumber};

/// An ID that uniquely identifies an entity within the host registry. The
/// host raises on collisions, so these are derived from the account id.
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct UniqueId(Arc<str>);

impl UniqueId {
	pub(crate) fn works(account: &AccountId) -> Self {
		UniqueId(format!("account_{account}_works").into())
	}

	pub(crate) fn last_payment(account: &AccountId) -> Self {
		UniqueId(format!("account_{account}_lastpayment").into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Debug for UniqueId {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&*self.0, f)
	}
}

impl fmt::Display for UniqueId {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&*self.0, f)
	}
}

impl AsRef<str> for UniqueId {
	#[inline]
	fn as_ref(&self) -> &str {
		&self.0
	}
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UniqueIdInvalidity {
	Empty,
}

impl Validate for UniqueId {
	type Invalidity = UniqueIdInvalidity;

	fn validate(&self) -> ValidationResult<Self::Invalidity> {
		Context::new()
			.invalidate_if(self.0.is_empty(), UniqueIdInvalidity::Empty)
			.into()
	}
}

/// Host entity id, a `binary_sensor.` slug derived from the account number.
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct EntityId(Arc<str>);

impl EntityId {
	const PLATFORM_PREFIX: &'static str = "binary_sensor.";

	pub(crate) fn works(number: &AccountNumber) -> Self {
		Self::slugged(number, "works")
	}

	pub(crate) fn last_payment(number: &AccountNumber) -> Self {
		Self::slugged(number, "last_payment")
	}

	fn slugged(number: &AccountNumber, suffix: &str) -> Self {
		let slug = slugify(format!("{number}_{suffix}"));
		EntityId(format!("{}{slug}", Self::PLATFORM_PREFIX).into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Debug for EntityId {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&*self.0, f)
	}
}

impl fmt::Display for EntityId {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&*self.0, f)
	}
}

impl AsRef<str> for EntityId {
	#[inline]
	fn as_ref(&self) -> &str {
		&self.0
	}
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EntityIdInvalidity {
	Empty,
	MissingPlatformPrefix,
}

impl Validate for EntityId {
	type Invalidity = EntityIdInvalidity;

	fn validate(&self) -> ValidationResult<Self::Invalidity> {
		Context::new()
			.invalidate_if(self.0.is_empty(), EntityIdInvalidity::Empty)
			.invalidate_if(
				!self.0.starts_with(Self::PLATFORM_PREFIX),
				EntityIdInvalidity::MissingPlatformPrefix,
			)
			.into()
	}
}

/// The device class an entity reports, qualified by the integration domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
	Works,
	Payment,
}

impl DeviceClass {
	pub const fn as_str(&self) -> &'static str {
		match self {
			DeviceClass::Works => "uacct_works",
			DeviceClass::Payment => "uacct_payment",
		}
	}
}

impl fmt::Display for DeviceClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl serde::Serialize for DeviceClass {
	#[inline]
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::DOMAIN;

	#[test]
	fn unique_ids_are_derived_from_the_account_id() {
		let account = AccountId::from("42");
		assert_eq!(UniqueId::works(&account).as_str(), "account_42_works");
		assert_eq!(
			UniqueId::last_payment(&account).as_str(),
			"account_42_lastpayment"
		);
	}

	#[test]
	fn entity_ids_are_slugs_of_the_account_number() {
		let number = AccountNumber::from("0123 456 789");
		assert_eq!(
			EntityId::works(&number).as_str(),
			"binary_sensor.0123-456-789-works"
		);
		assert_eq!(
			EntityId::last_payment(&number).as_str(),
			"binary_sensor.0123-456-789-last-payment"
		);
	}

	#[test]
	fn entity_ids_validate() {
		EntityId::works(&AccountNumber::from("1"))
			.validate()
			.expect("should be valid")
	}

	#[test]
	fn device_classes_are_domain_qualified() {
		assert!(DeviceClass::Works.as_str().starts_with(DOMAIN));
		assert!(DeviceClass::Payment.as_str().starts_with(DOMAIN));
	}
}
