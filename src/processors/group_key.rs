use crate::error::{ProcessingError, Result};
use crate::models::{GroupKey, JoinedPair, WeatherRecord};
use crate::utils::constants::YEAR_WIDTH;

/// Derives the `(country, year)` aggregation key from a joined pair.
///
/// The year is the first four characters of the observation date. Dates
/// shorter than that are rejected instead of being truncated.
pub fn extract(pair: JoinedPair) -> Result<(GroupKey, WeatherRecord)> {
    let key = group_key(&pair)?;
    Ok((key, pair.weather))
}

pub fn group_key(pair: &JoinedPair) -> Result<GroupKey> {
    let year = year_of(&pair.weather.date)?;
    Ok(GroupKey::new(pair.station.country.clone(), year))
}

fn year_of(date: &str) -> Result<&str> {
    match date.char_indices().nth(YEAR_WIDTH) {
        Some((end, _)) => Ok(&date[..end]),
        None if date.chars().count() == YEAR_WIDTH => Ok(date),
        None => Err(ProcessingError::MalformedRecord {
            field: "date",
            value: date.to_string(),
            reason: format!("expected at least {} characters", YEAR_WIDTH),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StationRecord;
    use pretty_assertions::assert_eq;

    fn pair(country: &str, date: &str) -> JoinedPair {
        JoinedPair::new(
            WeatherRecord::new("001", "01", date, Some(5.0), None),
            StationRecord::new("001", "01", country),
        )
    }

    #[test]
    fn test_extract_country_and_year() {
        let (key, weather) = extract(pair("US", "20200115")).unwrap();
        assert_eq!(key, GroupKey::new("US", "2020"));
        assert_eq!(weather.date, "20200115");
        assert_eq!(weather.temperature, Some(5.0));
    }

    #[test]
    fn test_exactly_four_characters() {
        let key = group_key(&pair("DE", "1999")).unwrap();
        assert_eq!(key, GroupKey::new("DE", "1999"));
    }

    #[test]
    fn test_short_date_is_malformed() {
        for date in ["", "2", "202"] {
            match extract(pair("US", date)) {
                Err(ProcessingError::MalformedRecord { field, value, .. }) => {
                    assert_eq!(field, "date");
                    assert_eq!(value, date);
                }
                other => panic!("expected MalformedRecord for {:?}, got {:?}", date, other),
            }
        }
    }

    #[test]
    fn test_multibyte_date_does_not_split_characters() {
        let key = group_key(&pair("FR", "ÅÅÅÅ0101")).unwrap();
        assert_eq!(key.year, "ÅÅÅÅ");

        assert!(group_key(&pair("FR", "ÅÅÅ")).is_err());
    }

    #[test]
    fn test_empty_country_is_a_group() {
        let key = group_key(&pair("", "20200115")).unwrap();
        assert_eq!(key, GroupKey::new("", "2020"));
    }
}
