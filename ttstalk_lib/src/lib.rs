//! Library layer for ttstalk: lookup history, exporters, analytics, and
//! the sequential batch runner around the `ttstalk_api` pipeline.

pub mod analytics;
pub mod avatar;
pub mod batch;
pub mod error;
pub mod export;
pub mod history;
pub mod validation;

pub use ttstalk_api;
pub use ttstalk_api::{Client, Error as ApiError, ProfileRecord};

pub use error::StalkError;
pub use history::{HistoryEntry, HistoryStore, HISTORY_CAP};
