mod geometry;
mod report;

pub use geometry::{build_system, Center};
pub use report::report_summary;

use crate::config::{Args, Config};
use crate::io::{setup_output, write_report};
use crate::system::Calculation;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use std::fs;
use std::path::Path;
use tracing::info;

pub struct ScfApplication {
    args: Args,
    config: Config,
}

impl ScfApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn new(args: Args, config: Config) -> Self {
        Self { args, config }
    }

    pub fn run(self) -> Result<Calculation> {
        setup_output(self.args.output.as_ref())?;
        info!("Configuration loaded:\n{:?}", self.config);

        let calc = self.calculate()?;
        report_summary(&calc);

        if let Some(path) = &self.args.report {
            write_report(path, &calc)?;
        }
        Ok(calc)
    }

    /// Runs the calculation without touching the global subscriber or any file.
    pub fn calculate(&self) -> Result<Calculation> {
        let system = build_system(&self.config, &self.args)?;
        let settings = self.config.scf_settings(&self.args);
        let conventions = self.config.resolved_conventions(&self.args);

        info!(
            "SCF parameters: max_cycle = {}, convergence_threshold = {:.3e}",
            settings.max_cycle, settings.convergence_threshold
        );

        let calc = system
            .run(&settings, &conventions)
            .wrap_err("SCF setup failed")?;
        Ok(calc)
    }
}

pub fn load_config(args: &Args) -> Result<Config> {
    info!("Reading configuration from: {}", args.config_file);
    load_config_file(&args.config_file)
}

pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let config_content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", path.display()))?;

    let config = serde_yml::from_str::<Config>(&config_content)
        .wrap_err("Failed to parse configuration file")?
        .with_defaults();

    Ok(config)
}
