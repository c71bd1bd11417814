pub mod document;
pub mod init;
pub mod store;

pub use init::ensure_status_file;
pub use store::{Observer, StatusStore, SubscriptionId};
