use crate::models::{MinMaxAccumulator, WeatherRecord};
use std::cmp::Ordering;

/// A commutative monoid with a per-record fold.
///
/// `combine` must be associative and commutative and `Default::default()` must
/// be its identity, so partial results can be merged in any order and any
/// tree shape. `reduce` must be pure so a re-executed fold gives the same
/// answer. Readings passed to `reduce` must be finite.
pub trait Aggregate<V>: Default + Send {
    fn reduce(self, value: &V) -> Self;

    fn combine(self, other: Self) -> Self;
}

/// Extremes are picked by `f64::total_cmp`, so `-0.0` and `0.0` are ordered
/// and the winner does not depend on argument order.
fn merge_by(current: Option<f64>, candidate: Option<f64>, keep: Ordering) -> Option<f64> {
    match (current, candidate) {
        (Some(a), Some(b)) => Some(if b.total_cmp(&a) == keep { b } else { a }),
        (a, b) => a.or(b),
    }
}

fn merge_min(current: Option<f64>, candidate: Option<f64>) -> Option<f64> {
    merge_by(current, candidate, Ordering::Less)
}

fn merge_max(current: Option<f64>, candidate: Option<f64>) -> Option<f64> {
    merge_by(current, candidate, Ordering::Greater)
}

impl Aggregate<WeatherRecord> for MinMaxAccumulator {
    fn reduce(self, record: &WeatherRecord) -> Self {
        debug_assert!(
            record.temperature.map_or(true, f64::is_finite)
                && record.wind_speed.map_or(true, f64::is_finite),
            "non-finite reading for station {}{}",
            record.usaf,
            record.wban
        );

        Self {
            min_temperature: merge_min(self.min_temperature, record.temperature),
            max_temperature: merge_max(self.max_temperature, record.temperature),
            min_wind_speed: merge_min(self.min_wind_speed, record.wind_speed),
            max_wind_speed: merge_max(self.max_wind_speed, record.wind_speed),
        }
    }

    fn combine(self, other: Self) -> Self {
        Self {
            min_temperature: merge_min(self.min_temperature, other.min_temperature),
            max_temperature: merge_max(self.max_temperature, other.max_temperature),
            min_wind_speed: merge_min(self.min_wind_speed, other.min_wind_speed),
            max_wind_speed: merge_max(self.max_wind_speed, other.max_wind_speed),
        }
    }
}
