pub(crate) mod exts;

pub mod account;
pub mod error;
pub mod ids;
pub mod payment;
pub mod provider;
pub mod work;

pub use account::{Account, ResidentialObject};
pub use error::ApiError;
pub use ids::{AccountId, AccountNumber, ObjectId};
pub use payment::{Payment, Service};
pub use provider::ProviderApi;
pub use work::Work;
