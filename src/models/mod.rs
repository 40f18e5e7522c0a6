pub mod joined;
pub mod keys;
pub mod station;
pub mod summary;
pub mod weather;

pub use joined::JoinedPair;
pub use keys::{GroupKey, JoinKey};
pub use station::StationRecord;
pub use summary::{AggregationResult, MinMaxAccumulator};
pub use weather::WeatherRecord;
