//! Output formatting and logging utilities

use crate::system::Calculation;
use color_eyre::eyre::{Result, WrapErr};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{
    fmt::format::Writer, fmt::layer, fmt::time::FormatTime, layer::SubscriberExt,
    util::SubscriberInitExt, Registry,
};

/// Stamps each log line with the time elapsed since logging started.
struct RunClock {
    start: Instant,
}

impl RunClock {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl FormatTime for RunClock {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", clock_stamp(self.start.elapsed().as_secs()))
    }
}

/// `+HH:MM:SS`; hours keep counting past a day.
fn clock_stamp(elapsed_seconds: u64) -> String {
    format!(
        "+{:02}:{:02}:{:02}",
        elapsed_seconds / 3600,
        (elapsed_seconds / 60) % 60,
        elapsed_seconds % 60
    )
}

/// Setup output logging to file or stdout
pub fn setup_output(output_path: Option<&String>) -> Result<()> {
    match output_path {
        Some(path) => {
            let log = File::create(path)
                .wrap_err_with(|| format!("Could not create output file: {}", path))?;
            let file_layer = layer()
                .with_writer(log)
                .with_timer(RunClock::new())
                .with_ansi(false);
            Registry::default().with(file_layer).init();
            info!("Output will be written to: {}", path);
        }
        None => {
            let stdout_layer = layer()
                .with_writer(std::io::stdout)
                .with_timer(RunClock::new())
                .with_ansi(true);
            Registry::default().with(stdout_layer).init();
        }
    }
    Ok(())
}

/// Serializes the whole calculation (inputs, integrals, matrices, trace) as pretty JSON.
pub fn write_report<P: AsRef<Path>>(path: P, calc: &Calculation) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .wrap_err_with(|| format!("Unable to create report file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, calc).wrap_err("Failed to serialize report")?;
    writeln!(writer)?;
    writer.flush()?;
    info!("Report written to: {}", path.display());
    Ok(())
}
