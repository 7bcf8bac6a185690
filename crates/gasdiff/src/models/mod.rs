mod config;
mod endpoint;
mod error;
mod fixtures;
mod gas;
mod report;
mod transaction_payload;

pub use config::*;
pub use endpoint::*;
pub use error::*;
pub use fixtures::*;
pub use gas::*;
pub use report::*;
pub use transaction_payload::*;
