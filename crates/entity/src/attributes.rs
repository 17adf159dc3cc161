use crate::redact::Redactable;
use serde::Serialize;
use tracing::trace;
use uacct_api::{Payment, Service, Work};

/// Attribute document published by the works sensor.
///
/// The `works` key is always present; an unloaded or empty snapshot yields
/// an empty list rather than dropping the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorksAttributes {
	pub works: Vec<WorkAttributes>,
}

impl WorksAttributes {
	/// Document for an unloaded or empty works cache.
	#[inline]
	pub fn empty() -> Self {
		Self::default()
	}
}

impl From<&[Work]> for WorksAttributes {
	fn from(works: &[Work]) -> Self {
		WorksAttributes {
			works: works.iter().map(WorkAttributes::from).collect(),
		}
	}
}

/// One work record, timestamps rendered as ISO-8601 text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkAttributes {
	#[serde(rename = "type")]
	pub kind: String,
	pub start: String,
	pub end: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl From<&Work> for WorkAttributes {
	fn from(work: &Work) -> Self {
		WorkAttributes {
			kind: work.kind.clone(),
			start: work.start.to_rfc3339(),
			end: work.end.to_rfc3339(),
			description: work.description.clone(),
		}
	}
}

/// Attribute document published by the last-payment sensor when a payment
/// snapshot is cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentAttributes {
	pub amount: Redactable<f64>,
	pub paid_at: Redactable<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub period: Option<Redactable<String>>,
	pub services: Vec<ServiceAttributes>,
}

impl From<&Payment> for PaymentAttributes {
	fn from(payment: &Payment) -> Self {
		PaymentAttributes {
			amount: payment.amount.into(),
			paid_at: payment.created_at.to_rfc3339().into(),
			period: payment.period.clone().map(Redactable::from),
			services: payment.services.iter().map(ServiceAttributes::from).collect(),
		}
	}
}

impl PaymentAttributes {
	/// Presentation-mode pass: timestamps and the billing period collapse to
	/// the fixed placeholder, amounts and service ids keep their shape with
	/// characters masked. Every key stays present.
	pub fn redacted(mut self) -> Self {
		trace!("masking payment attributes for presentation mode");

		self.amount.obfuscate();
		self.paid_at.redact();
		if let Some(period) = &mut self.period {
			period.redact();
		}

		for service in &mut self.services {
			service.id.obfuscate();
			service.amount.obfuscate();
		}

		self
	}
}

/// One billed service line item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceAttributes {
	pub id: Redactable<String>,
	pub code: String,
	pub name: String,
	pub amount: Redactable<f64>,
}

impl From<&Service> for ServiceAttributes {
	fn from(service: &Service) -> Self {
		ServiceAttributes {
			id: service.id.clone().into(),
			code: service.code.clone(),
			name: service.name.clone(),
			amount: service.amount.into(),
		}
	}
}
