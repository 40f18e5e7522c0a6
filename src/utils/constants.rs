/// Number of leading date characters that form the year.
pub const YEAR_WIDTH: usize = 4;

/// Rendered in place of an absent min/max. Indistinguishable from a real 0.0.
pub const ABSENT_VALUE: f64 = 0.0;

/// Digits after the decimal point in formatted output.
pub const OUTPUT_PRECISION: usize = 6;

/// Output field separator
pub const FIELD_SEPARATOR: char = ',';

/// Output file names
pub const PART_FILE_PREFIX: &str = "part-";
pub const SUCCESS_MARKER: &str = "_SUCCESS";

/// Processing defaults
pub const DEFAULT_JOIN_PARTITIONS: usize = 16;
pub const DEFAULT_OUTPUT_PARTITIONS: usize = 1;
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB

/// Environment variable prefix for settings
pub const ENV_PREFIX: &str = "WEATHER_MINMAX";
