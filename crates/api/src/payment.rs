use crate::exts::ValidateContextExt;
use chrono::{DateTime, Utc};
use semval::{context::Context, Validate, ValidationResult};
use serde::{Deserialize, Serialize};

/// One billed service line item on a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
	/// Provider-side identifier of the service.
	pub id: String,

	/// Tariff code of the service.
	pub code: String,

	/// Display name of the service.
	pub name: String,

	/// Amount billed for this service.
	pub amount: f64,
}

/// The account's most recent payment and its line items.
///
/// Like works snapshots, payments are replaced wholesale on every update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
	/// Provider-side identifier of the payment.
	pub id: String,

	/// Total amount paid.
	pub amount: f64,

	/// When the payment was created.
	pub created_at: DateTime<Utc>,

	/// Billing period the payment covers, if the provider reports one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub period: Option<String>,

	/// Whether the provider accepted the payment.
	#[serde(default)]
	pub accepted: bool,

	/// Ordered service line items.
	#[serde(default)]
	pub services: Vec<Service>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ServiceInvalidity {
	IdEmpty,
	AmountNotFinite,
}

impl Validate for Service {
	type Invalidity = ServiceInvalidity;

	fn validate(&self) -> ValidationResult<Self::Invalidity> {
		Context::new()
			.invalidate_if(self.id.is_empty(), ServiceInvalidity::IdEmpty)
			.invalidate_if(!self.amount.is_finite(), ServiceInvalidity::AmountNotFinite)
			.into()
	}
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PaymentInvalidity {
	IdEmpty,
	AmountNotFinite,
	AmountNegative,
	Service(usize, ServiceInvalidity),
}

impl Validate for Payment {
	type Invalidity = PaymentInvalidity;

	fn validate(&self) -> ValidationResult<Self::Invalidity> {
		Context::new()
			.invalidate_if(self.id.is_empty(), PaymentInvalidity::IdEmpty)
			.invalidate_if(!self.amount.is_finite(), PaymentInvalidity::AmountNotFinite)
			.invalidate_if(
				self.amount.is_finite() && self.amount < 0.0,
				PaymentInvalidity::AmountNegative,
			)
			.validate_iter(&self.services, PaymentInvalidity::Service)
			.into()
	}
}
