use serde::{Deserialize, Serialize};

use super::GroupKey;

/// Running extremes for one group.
///
/// The all-`None` value (also `Default`) is the identity of
/// [`Aggregate::combine`](crate::processors::Aggregate::combine).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MinMaxAccumulator {
    pub min_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
    pub min_wind_speed: Option<f64>,
    pub max_wind_speed: Option<f64>,
}

impl MinMaxAccumulator {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn has_temperature(&self) -> bool {
        self.min_temperature.is_some()
    }

    pub fn has_wind_speed(&self) -> bool {
        self.min_wind_speed.is_some()
    }
}

/// Final output unit, one per distinct `(country, year)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub key: GroupKey,
    pub value: MinMaxAccumulator,
}

impl AggregationResult {
    pub fn new(key: GroupKey, value: MinMaxAccumulator) -> Self {
        Self { key, value }
    }
}
