use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use weather_minmax::cli::{run, Cli};
use weather_minmax::models::{GroupKey, StationRecord, WeatherRecord};
use weather_minmax::processors::Pipeline;
use weather_minmax::writers::format_result;
use weather_minmax::ProcessingError;

fn write_inputs(dir: &Path, stations: &str, weather: &str) -> (String, String) {
    let stations_path = dir.join("stations.csv");
    let weather_path = dir.join("weather.csv");
    fs::write(&stations_path, stations).expect("write stations");
    fs::write(&weather_path, weather).expect("write weather");
    (
        stations_path.to_string_lossy().into_owned(),
        weather_path.to_string_lossy().into_owned(),
    )
}

fn cli(stations: &str, weather: &str, output: &Path) -> Cli {
    use clap::Parser;
    let output = output.to_string_lossy().into_owned();
    Cli::try_parse_from([
        "weather-minmax",
        "--stations",
        stations,
        "--weather",
        weather,
        "--output",
        output.as_str(),
        "--max-workers",
        "2",
        "--quiet",
    ])
    .expect("valid arguments")
}

#[tokio::test]
async fn test_end_to_end_country_year_minmax() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let (stations, weather) = write_inputs(
        temp_dir.path(),
        "usaf,wban,country\n001,01,US\n002,02,DE\n",
        "usaf,wban,date,temperature,wind_speed\n\
         001,01,20200115,5.0,3.0\n\
         001,01,20200220,-2.0,6.0\n\
         002,02,20190301,,4.5\n\
         002,02,20191231,,0.5\n\
         003,03,20200101,-60.0,99.0\n",
    );
    let output = temp_dir.path().join("out");

    let report = run(cli(&stations, &weather, &output)).await.unwrap();

    assert_eq!(report.output.total_lines, 2);
    assert_eq!(report.join_report.joined_pairs, 4);
    assert_eq!(report.join_report.unmatched_weather, 1);
    assert_eq!(report.join_report.unmatched_stations, 0);
    assert!(report.join_report.has_dropped_records());
    assert!(output.join("_SUCCESS").exists());

    let content = fs::read_to_string(output.join("part-00000")).unwrap();
    assert_eq!(
        content,
        "DE,2019,0.000000,0.000000,0.500000,4.500000\n\
         US,2020,-2.000000,5.000000,3.000000,6.000000\n"
    );
}

#[tokio::test]
async fn test_short_date_aborts_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let (stations, weather) = write_inputs(
        temp_dir.path(),
        "usaf,wban,country\n001,01,US\n",
        "usaf,wban,date,temperature,wind_speed\n001,01,201,1.0,1.0\n",
    );
    let output = temp_dir.path().join("out");

    let result = run(cli(&stations, &weather, &output)).await;

    assert!(matches!(
        result,
        Err(ProcessingError::MalformedRecord { field: "date", .. })
    ));
    assert!(!output.join("_SUCCESS").exists());
}

#[test]
fn test_pipeline_scenario_renders_expected_line() {
    let stations = vec![StationRecord::new("001", "01", "US")];
    let weather = vec![
        WeatherRecord::new("001", "01", "20200115", Some(5.0), Some(3.0)),
        WeatherRecord::new("001", "01", "20200220", Some(-2.0), Some(6.0)),
    ];

    let output = Pipeline::new(2).run(weather, stations, None).unwrap();

    assert_eq!(output.results.len(), 1);
    assert_eq!(output.results[0].key, GroupKey::new("US", "2020"));
    assert_eq!(
        format_result(&output.results[0]),
        "US,2020,-2.000000,5.000000,3.000000,6.000000"
    );
}

#[test]
fn test_all_temperatures_absent_renders_zero() {
    let stations = vec![StationRecord::new("010010", "99999", "NO")];
    let weather = vec![
        WeatherRecord::new("010010", "99999", "20050101", None, Some(7.0)),
        WeatherRecord::new("010010", "99999", "20050607", None, Some(2.0)),
    ];

    let output = Pipeline::new(1).run(weather, stations, None).unwrap();

    let value = output.results[0].value;
    assert_eq!(value.min_temperature, None);
    assert_eq!(value.max_temperature, None);
    assert_eq!(
        format_result(&output.results[0]),
        "NO,2005,0.000000,0.000000,2.000000,7.000000"
    );
}

#[test]
fn test_results_independent_of_parallelism() {
    let stations: Vec<StationRecord> = (0..40)
        .map(|i| StationRecord::new(format!("{:06}", i), "99999", ["US", "DE", "FR", "SE"][i % 4]))
        .collect();
    let weather: Vec<WeatherRecord> = (0..2_000)
        .map(|i| {
            let temperature = if i % 9 == 0 { None } else { Some((i % 83) as f64 - 40.0) };
            let wind_speed = if i % 13 == 0 { None } else { Some((i % 29) as f64 / 2.0) };
            WeatherRecord::new(
                format!("{:06}", i % 50),
                "99999",
                format!("{}0101", 1990 + i % 7),
                temperature,
                wind_speed,
            )
        })
        .collect();

    let narrow = Pipeline::new(1)
        .with_join_partitions(1)
        .run(weather.clone(), stations.clone(), None)
        .unwrap();
    let wide = Pipeline::new(4)
        .with_join_partitions(13)
        .run(weather, stations, None)
        .unwrap();

    assert_eq!(narrow.results, wide.results);
    assert_eq!(narrow.join_report, wide.join_report);
    assert_eq!(narrow.join_report.unmatched_weather, 400);
}
