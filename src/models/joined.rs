use super::{StationRecord, WeatherRecord};

/// A weather record together with the station it was matched to.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedPair {
    pub weather: WeatherRecord,
    pub station: StationRecord,
}

impl JoinedPair {
    pub fn new(weather: WeatherRecord, station: StationRecord) -> Self {
        Self { weather, station }
    }
}
