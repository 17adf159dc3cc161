use async_trait::async_trait;
use chrono::{Duration, Utc};
use error_stack::ResultExt;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use uacct_api::{
	Account, AccountId, ApiError, ObjectId, Payment, ProviderApi, ResidentialObject, Service, Work,
};
use uacct_entity::{EntityAttributes, EntityIdentity, EntityState, SensorOptions};
use uacct_registry::{AccountPlatform, EntityHost};

#[derive(Debug, Error)]
enum ApplicationError {
	#[error("update entities")]
	UpdateEntities,

	#[error("serialize attributes")]
	SerializeAttributes,
}

/// In-memory stand-in for the provider's account API.
struct DemoApi;

#[async_trait]
impl ProviderApi for DemoApi {
	async fn works(&self, _object: &ObjectId) -> Result<Vec<Work>, ApiError> {
		let start = Utc::now() - Duration::hours(2);

		Ok(vec![Work {
			kind: "plumbing".into(),
			start,
			end: start + Duration::hours(8),
			description: Some("riser replacement".into()),
			active: true,
		}])
	}

	async fn last_payment(&self, _account: &AccountId) -> Result<Option<Payment>, ApiError> {
		Ok(Some(Payment {
			id: "pay-20240305".into(),
			amount: 1234.56,
			created_at: Utc::now() - Duration::days(3),
			period: Some("2024-02".into()),
			accepted: true,
			services: vec![
				Service {
					id: "svc-001".into(),
					code: "electricity".into(),
					name: "Electricity".into(),
					amount: 987.65,
				},
				Service {
					id: "svc-002".into(),
					code: "maintenance".into(),
					name: "Maintenance".into(),
					amount: 246.91,
				},
			],
		}))
	}
}

struct LoggingHost;

impl<E: EntityIdentity> EntityHost<E> for LoggingHost {
	fn add(&mut self, entity: &E) {
		info!(unique_id = %entity.unique_id(), entity_id = %entity.entity_id(), "entity added");
	}

	fn request_refresh(&mut self, entity: &E) {
		info!(unique_id = %entity.unique_id(), "forced refresh requested");
	}
}

#[tokio::main]
async fn main() -> error_stack::Result<(), ApplicationError> {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.init();

	let account = Account::new(
		"demo-account",
		"0123 456 789",
		Some(ResidentialObject {
			id: ObjectId::from("obj-1"),
			address: Some("1 Demo Street".into()),
		}),
		Arc::new(DemoApi),
	);

	let presentation = std::env::var_os("ACCOUNT_SENSORS_PRESENTATION").is_some();
	let mut platform = AccountPlatform::new(SensorOptions::new().dev_presentation(presentation));
	let mut host = LoggingHost;

	platform.refresh_account(&mut host, &account);
	platform
		.update_all()
		.await
		.change_context(ApplicationError::UpdateEntities)?;

	// second pass takes the forced-refresh path instead of creating duplicates
	platform.refresh_account(&mut host, &account);

	for sensor in platform.works_sensors() {
		print_sensor(sensor)?;
	}

	for sensor in platform.last_payment_sensors() {
		print_sensor(sensor)?;
	}

	Ok(())
}

fn print_sensor<E>(sensor: &E) -> error_stack::Result<(), ApplicationError>
where
	E: EntityIdentity + EntityState + EntityAttributes,
{
	println!("{} ({})", sensor.entity_id(), sensor.device_class());
	println!("  state: {}", sensor.state());

	if let Some(doc) = sensor.attributes() {
		let json = serde_json::to_string_pretty(&doc)
			.change_context(ApplicationError::SerializeAttributes)?;
		println!("  attributes: {json}");
	}

	Ok(())
}
