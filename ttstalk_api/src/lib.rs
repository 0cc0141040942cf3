mod client;
mod errors;
pub mod extract;
pub mod normalize;
pub mod spoof;
pub mod types;

pub use self::client::Client;
pub use self::errors::Error;
pub use self::types::{ProfileRecord, ProfileStats, ProfileStatsV2, RawUser, RawUserInfo};
