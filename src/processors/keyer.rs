use crate::models::{JoinKey, StationRecord, WeatherRecord};

/// Anything that can be placed on one side of the station join.
pub trait Keyed {
    fn usaf(&self) -> &str;
    fn wban(&self) -> &str;

    fn join_key(&self) -> JoinKey {
        JoinKey::new(self.usaf(), self.wban())
    }
}

impl Keyed for StationRecord {
    fn usaf(&self) -> &str {
        &self.usaf
    }

    fn wban(&self) -> &str {
        &self.wban
    }
}

impl Keyed for WeatherRecord {
    fn usaf(&self) -> &str {
        &self.usaf
    }

    fn wban(&self) -> &str {
        &self.wban
    }
}

pub fn key<R: Keyed + ?Sized>(record: &R) -> JoinKey {
    record.join_key()
}
