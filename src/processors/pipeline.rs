use crate::error::Result;
use crate::models::{AggregationResult, GroupKey, MinMaxAccumulator, StationRecord, WeatherRecord};
use crate::processors::aggregator::aggregate_by_key;
use crate::processors::group_key::extract;
use crate::processors::joiner::{JoinReport, Joiner};
use crate::utils::constants::DEFAULT_JOIN_PARTITIONS;
use crate::utils::progress::ProgressReporter;
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub results: Vec<AggregationResult>,
    pub join_report: JoinReport,
}

/// Join, key, fold and gather, each stage an explicit call over owned data.
pub struct Pipeline {
    max_workers: usize,
    join_partitions: usize,
}

impl Pipeline {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers: max_workers.max(1),
            join_partitions: DEFAULT_JOIN_PARTITIONS,
        }
    }

    pub fn with_join_partitions(mut self, join_partitions: usize) -> Self {
        self.join_partitions = join_partitions.max(1);
        self
    }

    /// Run every stage on a dedicated thread pool sized by `max_workers`.
    pub fn run(
        &self,
        weather: Vec<WeatherRecord>,
        stations: Vec<StationRecord>,
        progress: Option<&ProgressReporter>,
    ) -> Result<PipelineOutput> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()?;

        pool.install(|| self.run_stages(weather, stations, progress))
    }

    fn run_stages(
        &self,
        weather: Vec<WeatherRecord>,
        stations: Vec<StationRecord>,
        progress: Option<&ProgressReporter>,
    ) -> Result<PipelineOutput> {
        if let Some(p) = progress {
            p.set_message("Joining weather records to stations...");
        }
        info!(
            weather = weather.len(),
            stations = stations.len(),
            partitions = self.join_partitions,
            "joining"
        );

        let (pairs, join_report) =
            Joiner::new(self.join_partitions).join_with_report(weather, stations);

        if join_report.has_dropped_records() {
            warn!(
                unmatched_weather = join_report.unmatched_weather,
                unmatched_stations = join_report.unmatched_stations,
                "records without a join partner were dropped"
            );
        }
        if join_report.duplicate_station_keys > 0 {
            warn!(
                keys = join_report.duplicate_station_keys,
                "station keys shared by several stations; their weather records fan out"
            );
        }

        if let Some(p) = progress {
            p.set_message("Extracting country and year...");
        }
        let keyed: Vec<(GroupKey, WeatherRecord)> = pairs
            .into_par_iter()
            .map(extract)
            .collect::<Result<Vec<_>>>()?;
        debug!(records = keyed.len(), "group keys extracted");

        if let Some(p) = progress {
            p.set_message("Aggregating min/max per country and year...");
        }
        let groups: HashMap<GroupKey, MinMaxAccumulator> = aggregate_by_key(keyed);

        let results = gather(groups);
        info!(groups = results.len(), "aggregation complete");

        Ok(PipelineOutput {
            results,
            join_report,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

/// Single fan-in point: all groups into one sequence ordered by key.
pub fn gather(groups: HashMap<GroupKey, MinMaxAccumulator>) -> Vec<AggregationResult> {
    let mut results: Vec<AggregationResult> = groups
        .into_iter()
        .map(|(key, value)| AggregationResult::new(key, value))
        .collect();
    results.sort_by(|a, b| a.key.cmp(&b.key));
    results
}
