use serde::{Deserialize, Serialize};
use validator::Validate;

/// Station metadata as delivered by the record source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct StationRecord {
    #[validate(length(min = 1))]
    pub usaf: String,

    #[validate(length(min = 1))]
    pub wban: String,

    /// May be empty: some stations carry no country code.
    #[serde(default)]
    pub country: String,
}

impl StationRecord {
    pub fn new(usaf: impl Into<String>, wban: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            usaf: usaf.into(),
            wban: wban.into(),
            country: country.into(),
        }
    }
}
