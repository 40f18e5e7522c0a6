use crate::error::Result;
use crate::models::{StationRecord, WeatherRecord};
use crate::readers::record_reader::{RecordReader, SourceRecord};
use std::path::{Path, PathBuf};
use tokio::task::JoinHandle;
use tracing::info;

/// Both inputs of a run.
#[derive(Debug, Clone, Default)]
pub struct InputData {
    pub stations: Vec<StationRecord>,
    pub weather: Vec<WeatherRecord>,
}

/// Loads the station and weather inputs at the same time.
pub struct ConcurrentReader {
    max_workers: usize,
}

impl ConcurrentReader {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers: max_workers.max(1),
        }
    }

    pub async fn read_inputs(&self, stations_path: &Path, weather_path: &Path) -> Result<InputData> {
        let stations_handle: JoinHandle<Result<Vec<StationRecord>>> =
            Self::spawn_read(stations_path.to_path_buf(), self.max_workers);
        let weather_handle: JoinHandle<Result<Vec<WeatherRecord>>> =
            Self::spawn_read(weather_path.to_path_buf(), self.max_workers);

        let (stations, weather) = tokio::try_join!(stations_handle, weather_handle)?;
        let (stations, weather) = (stations?, weather?);

        info!(
            stations = stations.len(),
            weather = weather.len(),
            "inputs loaded"
        );

        Ok(InputData { stations, weather })
    }

    /// File reads and CSV decoding block, so they run on the blocking pool
    /// inside a rayon pool of their own.
    fn spawn_read<T: SourceRecord + 'static>(
        path: PathBuf,
        max_workers: usize,
    ) -> JoinHandle<Result<Vec<T>>> {
        tokio::task::spawn_blocking(move || {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(max_workers)
                .build()?;
            pool.install(|| RecordReader::new().read_path::<T>(&path))
        })
    }
}

impl Default for ConcurrentReader {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}
