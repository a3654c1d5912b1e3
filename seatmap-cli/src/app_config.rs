use serde::Deserialize;
use seatmap_core::Aircraft;
use std::env;
use std::path::Path;

/// Everything needed to open a flight and seat its passengers
#[derive(Debug, Deserialize, Clone)]
pub struct Manifest {
    pub aircraft: Aircraft,
    pub flight: FlightConfig,
    #[serde(default)]
    pub allocations: Vec<Allocation>,
    #[serde(default)]
    pub relocations: Vec<Relocation>,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FlightConfig {
    pub number: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Allocation {
    pub seat: String,
    pub passenger: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Relocation {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Manifest {
    /// Load from `dir` using the run mode named by `RUN_MODE` (default `development`)
    pub fn load(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_for(dir, &run_mode)
    }

    /// Layers, lowest first: `default` (required), `{run_mode}`, `local`, then
    /// `SEATMAP__*` variables such as `SEATMAP__FLIGHT__NUMBER=AB99`
    pub fn load_for(dir: &Path, run_mode: &str) -> Result<Self, config::ConfigError> {
        let layer = |name: &str| config::File::with_name(&dir.join(name).to_string_lossy());

        let manifest: Manifest = config::Config::builder()
            .add_source(layer("default"))
            .add_source(layer(run_mode).required(false))
            .add_source(layer("local").required(false))
            .add_source(config::Environment::with_prefix("SEATMAP").separator("__"))
            .build()?
            .try_deserialize()?;

        tracing::debug!("Loaded manifest from {} ({})", dir.display(), run_mode);
        Ok(manifest)
    }
}
