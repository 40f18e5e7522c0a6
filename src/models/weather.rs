use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ProcessingError, Result};

/// A single weather observation.
///
/// `None` means the source had no valid reading for that quantity, which is
/// not the same thing as a reading of `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WeatherRecord {
    #[validate(length(min = 1))]
    pub usaf: String,

    #[validate(length(min = 1))]
    pub wban: String,

    /// Observation date, `YYYYMMDD` in the usual case.
    pub date: String,

    #[serde(default)]
    pub temperature: Option<f64>,

    #[serde(default, alias = "windSpeed")]
    pub wind_speed: Option<f64>,
}

impl WeatherRecord {
    pub fn new(
        usaf: impl Into<String>,
        wban: impl Into<String>,
        date: impl Into<String>,
        temperature: Option<f64>,
        wind_speed: Option<f64>,
    ) -> Self {
        Self {
            usaf: usaf.into(),
            wban: wban.into(),
            date: date.into(),
            temperature,
            wind_speed,
        }
    }

    pub fn has_temperature(&self) -> bool {
        self.temperature.is_some()
    }

    pub fn has_wind_speed(&self) -> bool {
        self.wind_speed.is_some()
    }

    /// Field validation plus a check that every present reading is finite.
    pub fn validate_readings(&self) -> Result<()> {
        self.validate()?;

        for (name, value) in [
            ("temperature", self.temperature),
            ("wind_speed", self.wind_speed),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(ProcessingError::InvalidFormat(format!(
                        "Non-finite {} reading {} for station {}{}",
                        name, v, self.usaf, self.wban
                    )));
                }
            }
        }

        Ok(())
    }
}
