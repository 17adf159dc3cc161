mod host;
mod platform;
mod refresh;
mod store;

pub use host::EntityHost;
pub use platform::AccountPlatform;
pub use refresh::{refresh_account, AccountEntity, RefreshOutcome};
pub use store::EntityStore;
