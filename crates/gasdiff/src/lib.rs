mod comparator;
mod json_rpc;
mod models;

pub mod prelude {
    // INTERNAL MODULES
    pub use crate::comparator::*;
    pub use crate::json_rpc::*;
    pub use crate::models::*;

    // STD
    pub use std::{
        borrow::Cow,
        str::FromStr,
        sync::{
            Arc,
            atomic::{AtomicU64, Ordering},
        },
        time::Duration,
    };

    // EXTERNAL CRATES
    pub use derive_builder::Builder;
    pub use getset::{CopyGetters, Getters};
    pub use log::{debug, error, info, warn};
    pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
    pub use serde_json::Value;
    pub use thiserror::Error as ThisError;
}

pub use prelude::*;
