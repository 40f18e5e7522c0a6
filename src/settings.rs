use crate::error::{ProcessingError, Result};
use crate::utils::constants::{DEFAULT_JOIN_PARTITIONS, DEFAULT_OUTPUT_PARTITIONS, ENV_PREFIX};
use config::{Config, Environment, File, Map};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

/// Runtime settings: defaults, then an optional settings file, then
/// `WEATHER_MINMAX_*` environment variables, then command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct Settings {
    #[validate(range(min = 1))]
    pub max_workers: usize,

    #[validate(range(min = 1))]
    pub join_partitions: usize,

    #[validate(range(min = 1))]
    pub output_partitions: usize,

    pub show_progress: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub max_workers: Option<usize>,
    pub join_partitions: Option<usize>,
    pub output_partitions: Option<usize>,
    pub quiet: bool,
}

impl Settings {
    pub fn load(file: Option<&Path>, overrides: &SettingsOverrides) -> Result<Self> {
        Self::load_from(file, None, overrides)
    }

    /// `env` replaces the process environment when given.
    pub fn load_from(
        file: Option<&Path>,
        env: Option<Map<String, String>>,
        overrides: &SettingsOverrides,
    ) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("max_workers", num_cpus::get() as i64)?
            .set_default("join_partitions", DEFAULT_JOIN_PARTITIONS as i64)?
            .set_default("output_partitions", DEFAULT_OUTPUT_PARTITIONS as i64)?
            .set_default("show_progress", true)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(env),
        );

        let mut settings: Settings = builder.build()?.try_deserialize()?;
        settings.apply(overrides);
        settings
            .validate()
            .map_err(|e| ProcessingError::Config(e.to_string()))?;

        Ok(settings)
    }

    fn apply(&mut self, overrides: &SettingsOverrides) {
        if let Some(max_workers) = overrides.max_workers {
            self.max_workers = max_workers;
        }
        if let Some(join_partitions) = overrides.join_partitions {
            self.join_partitions = join_partitions;
        }
        if let Some(output_partitions) = overrides.output_partitions {
            self.output_partitions = output_partitions;
        }
        if overrides.quiet {
            self.show_progress = false;
        }
    }
}
