mod profile;
pub use self::profile::{
    ProfileRecord, ProfileStats, ProfileStatsV2, RawStats, RawStatsV2, RawUser, RawUserInfo,
};
