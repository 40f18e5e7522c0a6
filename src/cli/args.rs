use clap::Parser;
use std::path::PathBuf;

use crate::settings::SettingsOverrides;

#[derive(Parser, Debug)]
#[command(name = "weather-minmax")]
#[command(about = "Min/max temperature and wind speed per country and year")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "Input file or directory containing station records")]
    pub stations: PathBuf,

    #[arg(short, long, help = "Input file or directory containing weather records")]
    pub weather: PathBuf,

    #[arg(
        short,
        long,
        help = "Output directory [default: output/weather-minmax-{YYMMDD}]"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Settings file (toml, yaml, json, ...)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Worker threads [default: number of CPUs]")]
    pub max_workers: Option<usize>,

    #[arg(long, help = "Hash partitions used by the join [default: 16]")]
    pub join_partitions: Option<usize>,

    #[arg(long, help = "Number of part files to write [default: 1]")]
    pub output_partitions: Option<usize>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, help = "Hide the progress spinner")]
    pub quiet: bool,
}

impl Cli {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            max_workers: self.max_workers,
            join_partitions: self.join_partitions,
            output_partitions: self.output_partitions,
            quiet: self.quiet,
        }
    }
}
