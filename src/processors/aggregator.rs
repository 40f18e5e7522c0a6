use crate::models::WeatherRecord;
use crate::processors::accumulator::Aggregate;
use rayon::prelude::*;
use std::collections::HashMap;
use std::hash::Hash;

/// Per-key fold: each worker folds its share of the input into a partial map
/// with `reduce`, then partial maps are merged with `combine`.
///
/// The result does not depend on how rayon splits the input.
pub fn aggregate_by_key<K, A, I>(items: I) -> HashMap<K, A>
where
    K: Eq + Hash + Send,
    A: Aggregate<WeatherRecord>,
    I: IntoParallelIterator<Item = (K, WeatherRecord)>,
{
    items
        .into_par_iter()
        .fold(HashMap::new, |mut partial: HashMap<K, A>, (key, record)| {
            let current = partial.remove(&key).unwrap_or_default();
            partial.insert(key, current.reduce(&record));
            partial
        })
        .reduce(HashMap::new, merge_partials)
}

/// Merge two partial maps, combining accumulators that share a key.
pub fn merge_partials<K, A>(mut left: HashMap<K, A>, right: HashMap<K, A>) -> HashMap<K, A>
where
    K: Eq + Hash,
    A: Aggregate<WeatherRecord>,
{
    if left.len() < right.len() {
        return merge_partials(right, left);
    }
    for (key, value) in right {
        let current = left.remove(&key).unwrap_or_default();
        left.insert(key, current.combine(value));
    }
    left
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupKey, MinMaxAccumulator};
    use pretty_assertions::assert_eq;

    fn aggregate_sequential<A, I>(items: I) -> HashMap<GroupKey, A>
    where
        A: Aggregate<WeatherRecord>,
        I: IntoIterator<Item = (GroupKey, WeatherRecord)>,
    {
        let mut groups: HashMap<GroupKey, A> = HashMap::new();
        for (key, record) in items {
            let current = groups.remove(&key).unwrap_or_default();
            groups.insert(key, current.reduce(&record));
        }
        groups
    }

    fn keyed(country: &str, year: &str, t: Option<f64>, w: Option<f64>) -> (GroupKey, WeatherRecord) {
        (
            GroupKey::new(country, year),
            WeatherRecord::new("001", "01", format!("{}0101", year), t, w),
        )
    }

    fn input() -> Vec<(GroupKey, WeatherRecord)> {
        let mut items = Vec::new();
        for i in 0..300 {
            let country = ["US", "DE", "FR"][i % 3];
            let year = ["2019", "2020"][i % 2];
            let t = if i % 5 == 0 { None } else { Some(i as f64 / 10.0 - 12.0) };
            let w = if i % 11 == 0 { None } else { Some((i % 17) as f64) };
            items.push(keyed(country, year, t, w));
        }
        items
    }

    #[test]
    fn test_groups_are_independent() {
        let groups: HashMap<GroupKey, MinMaxAccumulator> = aggregate_by_key(vec![
            keyed("US", "2020", Some(5.0), Some(3.0)),
            keyed("US", "2020", Some(-2.0), Some(6.0)),
            keyed("US", "2021", Some(9.0), None),
            keyed("DE", "2020", None, Some(1.0)),
        ]);

        assert_eq!(groups.len(), 3);

        let us_2020 = groups[&GroupKey::new("US", "2020")];
        assert_eq!(us_2020.min_temperature, Some(-2.0));
        assert_eq!(us_2020.max_temperature, Some(5.0));
        assert_eq!(us_2020.min_wind_speed, Some(3.0));
        assert_eq!(us_2020.max_wind_speed, Some(6.0));

        let us_2021 = groups[&GroupKey::new("US", "2021")];
        assert_eq!(us_2021.max_temperature, Some(9.0));
        assert!(!us_2021.has_wind_speed());

        let de_2020 = groups[&GroupKey::new("DE", "2020")];
        assert!(!de_2020.has_temperature());
        assert_eq!(de_2020.max_wind_speed, Some(1.0));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let parallel: HashMap<GroupKey, MinMaxAccumulator> = aggregate_by_key(input());
        let sequential: HashMap<GroupKey, MinMaxAccumulator> = aggregate_sequential(input());
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.len(), 6);
    }

    #[test]
    fn test_merge_order_does_not_matter() {
        let items = input();
        let (a, rest) = items.split_at(70);
        let (b, c) = rest.split_at(120);

        let part = |slice: &[(GroupKey, WeatherRecord)]| -> HashMap<GroupKey, MinMaxAccumulator> {
            aggregate_sequential(slice.to_vec())
        };

        let left_first = merge_partials(merge_partials(part(a), part(b)), part(c));
        let right_first = merge_partials(part(c), merge_partials(part(b), part(a)));
        let whole: HashMap<GroupKey, MinMaxAccumulator> = aggregate_sequential(items.clone());

        assert_eq!(left_first, right_first);
        assert_eq!(left_first, whole);
    }

    #[test]
    fn test_empty_input() {
        let groups: HashMap<GroupKey, MinMaxAccumulator> = aggregate_by_key(Vec::new());
        assert!(groups.is_empty());
    }
}
