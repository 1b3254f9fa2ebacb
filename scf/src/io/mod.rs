//! Input/Output operations for HeH+ SCF calculations
//!
//! This module handles logging setup and the JSON report.

mod output;

pub use output::{setup_output, write_report};
