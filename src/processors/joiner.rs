use crate::models::{JoinKey, JoinedPair, StationRecord, WeatherRecord};
use crate::processors::keyer::Keyed;
use crate::utils::constants::DEFAULT_JOIN_PARTITIONS;
use rayon::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Counts collected while joining. Dropped records are reported here only;
/// they never cause an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinReport {
    pub weather_records: usize,
    pub station_records: usize,
    pub joined_pairs: usize,
    pub unmatched_weather: usize,
    pub unmatched_stations: usize,
    /// Keys shared by more than one station. Each of them fans out.
    pub duplicate_station_keys: usize,
}

impl JoinReport {
    fn merge(mut self, other: JoinReport) -> JoinReport {
        self.weather_records += other.weather_records;
        self.station_records += other.station_records;
        self.joined_pairs += other.joined_pairs;
        self.unmatched_weather += other.unmatched_weather;
        self.unmatched_stations += other.unmatched_stations;
        self.duplicate_station_keys += other.duplicate_station_keys;
        self
    }

    pub fn has_dropped_records(&self) -> bool {
        self.unmatched_weather > 0 || self.unmatched_stations > 0
    }

    pub fn summary(&self) -> String {
        format!(
            "Joined {} pairs from {} weather records and {} stations \
             ({} weather records without station, {} stations without weather, {} shared station keys)",
            self.joined_pairs,
            self.weather_records,
            self.station_records,
            self.unmatched_weather,
            self.unmatched_stations,
            self.duplicate_station_keys
        )
    }
}

/// Inner equi-join of weather records against stations on [`JoinKey`].
///
/// Both sides are hash partitioned on the key so that every partition can be
/// matched on its own; no partition needs to see the other partitions' data.
pub struct Joiner {
    partitions: usize,
}

impl Joiner {
    pub fn new(partitions: usize) -> Self {
        Self {
            partitions: partitions.max(1),
        }
    }

    pub fn partitions(&self) -> usize {
        self.partitions
    }

    pub fn join(
        &self,
        weather: Vec<WeatherRecord>,
        stations: Vec<StationRecord>,
    ) -> Vec<JoinedPair> {
        self.join_with_report(weather, stations).0
    }

    pub fn join_with_report(
        &self,
        weather: Vec<WeatherRecord>,
        stations: Vec<StationRecord>,
    ) -> (Vec<JoinedPair>, JoinReport) {
        let weather_parts = partition(weather, self.partitions);
        let station_parts = partition(stations, self.partitions);

        let joined: Vec<(Vec<JoinedPair>, JoinReport)> = weather_parts
            .into_par_iter()
            .zip(station_parts)
            .map(|(weather, stations)| join_partition(weather, stations))
            .collect();

        let mut pairs = Vec::with_capacity(joined.iter().map(|(p, _)| p.len()).sum());
        let mut report = JoinReport::default();
        for (partition_pairs, partition_report) in joined {
            pairs.extend(partition_pairs);
            report = report.merge(partition_report);
        }

        debug!(
            partitions = self.partitions,
            pairs = report.joined_pairs,
            unmatched_weather = report.unmatched_weather,
            unmatched_stations = report.unmatched_stations,
            "join complete"
        );

        (pairs, report)
    }
}

impl Default for Joiner {
    fn default() -> Self {
        Self::new(DEFAULT_JOIN_PARTITIONS)
    }
}

/// Join with the default partitioning.
pub fn join(weather: Vec<WeatherRecord>, stations: Vec<StationRecord>) -> Vec<JoinedPair> {
    Joiner::default().join(weather, stations)
}

/// Deterministic across runs and processes: `DefaultHasher::new` uses fixed keys.
fn partition_of(key: &JoinKey, partitions: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    (hasher.finish() % partitions as u64) as usize
}

fn partition<R: Keyed>(records: Vec<R>, partitions: usize) -> Vec<Vec<(JoinKey, R)>> {
    let mut parts: Vec<Vec<(JoinKey, R)>> = (0..partitions).map(|_| Vec::new()).collect();
    for record in records {
        let key = record.join_key();
        parts[partition_of(&key, partitions)].push((key, record));
    }
    parts
}

fn join_partition(
    weather: Vec<(JoinKey, WeatherRecord)>,
    stations: Vec<(JoinKey, StationRecord)>,
) -> (Vec<JoinedPair>, JoinReport) {
    let mut report = JoinReport {
        weather_records: weather.len(),
        station_records: stations.len(),
        ..JoinReport::default()
    };

    // key -> (stations, matched by at least one weather record)
    let mut index: HashMap<JoinKey, (Vec<StationRecord>, bool)> = HashMap::new();
    for (key, station) in stations {
        index.entry(key).or_default().0.push(station);
    }
    report.duplicate_station_keys = index.values().filter(|(s, _)| s.len() > 1).count();

    let mut pairs = Vec::new();
    for (key, record) in weather {
        let Some((matches, matched)) = index.get_mut(&key) else {
            report.unmatched_weather += 1;
            continue;
        };
        *matched = true;

        if let Some((last, rest)) = matches.split_last() {
            for station in rest {
                pairs.push(JoinedPair::new(record.clone(), station.clone()));
            }
            pairs.push(JoinedPair::new(record, last.clone()));
        }
    }

    report.unmatched_stations = index
        .values()
        .filter(|(_, matched)| !matched)
        .map(|(s, _)| s.len())
        .sum();
    report.joined_pairs = pairs.len();

    (pairs, report)
}
