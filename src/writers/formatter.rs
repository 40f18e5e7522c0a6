use crate::models::AggregationResult;
use crate::utils::constants::{ABSENT_VALUE, FIELD_SEPARATOR, OUTPUT_PRECISION};

/// Renders results as `country,year,minT,maxT,minW,maxW`.
///
/// Absent extremes are written as `0.0`, so a group with no readings for a
/// quantity looks the same as a group whose true extreme is zero.
#[derive(Debug, Clone, Copy)]
pub struct ResultFormatter {
    precision: usize,
}

impl ResultFormatter {
    pub fn new() -> Self {
        Self {
            precision: OUTPUT_PRECISION,
        }
    }

    pub fn format(&self, result: &AggregationResult) -> String {
        let value = &result.value;
        let fields = [
            value.min_temperature,
            value.max_temperature,
            value.min_wind_speed,
            value.max_wind_speed,
        ];

        let mut line = String::with_capacity(64);
        line.push_str(&result.key.country);
        line.push(FIELD_SEPARATOR);
        line.push_str(&result.key.year);
        for field in fields {
            line.push(FIELD_SEPARATOR);
            line.push_str(&format!(
                "{:.*}",
                self.precision,
                field.unwrap_or(ABSENT_VALUE)
            ));
        }
        line
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_result(result: &AggregationResult) -> String {
    ResultFormatter::new().format(result)
}
