use crate::cli::args::Cli;
use crate::error::Result;
use crate::processors::{JoinReport, Pipeline};
use crate::readers::ConcurrentReader;
use crate::settings::Settings;
use crate::utils::filename::generate_default_output_dir;
use crate::utils::progress::ProgressReporter;
use crate::writers::{OutputInfo, TextWriter};
use tracing::info;

/// What a finished run produced, including the records the join dropped.
#[derive(Debug)]
pub struct RunReport {
    pub join_report: JoinReport,
    pub output: OutputInfo,
}

pub async fn run(cli: Cli) -> Result<RunReport> {
    let settings = Settings::load(cli.config.as_deref(), &cli.overrides())?;
    let output_dir = cli.output.clone().unwrap_or_else(generate_default_output_dir);

    info!(
        stations = %cli.stations.display(),
        weather = %cli.weather.display(),
        output = %output_dir.display(),
        workers = settings.max_workers,
        "starting weather aggregation"
    );

    let progress = ProgressReporter::new_spinner("Reading input records...", !settings.show_progress);

    let reader = ConcurrentReader::new(settings.max_workers);
    let input = reader.read_inputs(&cli.stations, &cli.weather).await?;

    let pipeline = Pipeline::new(settings.max_workers).with_join_partitions(settings.join_partitions);
    let output = pipeline.run(input.weather, input.stations, Some(&progress))?;

    progress.set_message("Writing results...");
    let writer = TextWriter::new().with_partitions(settings.output_partitions);
    let output_info = writer.write_results(&output.results, &output_dir)?;

    progress.finish_with_message(&format!(
        "Wrote {} country/year results",
        output.results.len()
    ));
    progress.println(&output.join_report.summary());
    progress.println(&output_info.summary());

    info!(
        joined_pairs = output.join_report.joined_pairs,
        unmatched_weather = output.join_report.unmatched_weather,
        unmatched_stations = output.join_report.unmatched_stations,
        duplicate_station_keys = output.join_report.duplicate_station_keys,
        results = output.results.len(),
        output = %output_info.directory.display(),
        "successfully finished processing"
    );
    Ok(RunReport {
        join_report: output.join_report,
        output: output_info,
    })
}
