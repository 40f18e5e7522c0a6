use serde::{Deserialize, Serialize};
use std::fmt;

/// Equi-join key: `usaf` immediately followed by `wban`.
///
/// There is no separator, so `("1", "23")` and `("12", "3")` produce the same
/// key. Source identifiers are fixed width, which is what makes this usable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JoinKey(String);

impl JoinKey {
    pub fn new(usaf: &str, wban: &str) -> Self {
        let mut key = String::with_capacity(usaf.len() + wban.len());
        key.push_str(usaf);
        key.push_str(wban);
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JoinKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Aggregation key. Orders by country, then year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupKey {
    pub country: String,
    pub year: String,
}

impl GroupKey {
    pub fn new(country: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            year: year.into(),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.country, self.year)
    }
}
