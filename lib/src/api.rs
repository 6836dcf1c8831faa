//! Entry points for a complete conversion run: load the workbook named by a
//! [`Config`], convert it, and write the Turtle file.

use crate::config::Config;
use crate::convert::{ConversionReport, Converter};
use crate::util::write_graph_to_file;
use crate::workbook::Workbook;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Initializes logging for the xlsx2ttl library.
///
/// This function checks for the `XLSX2TTL_LOG` environment variable. If it is set,
/// `RUST_LOG` is set to its value. `XLSX2TTL_LOG` takes precedence over `RUST_LOG`.
/// The logger initialization (e.g., `env_logger::init()`) must be called after
/// this function for the log level to take effect.
pub fn init_logging() {
    if let Ok(log_level) = std::env::var("XLSX2TTL_LOG") {
        std::env::set_var("RUST_LOG", log_level);
    }
}

/// Outcome of [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub report: ConversionReport,
    pub output: PathBuf,
}

impl RunSummary {
    /// The one-line summary printed at the end of a run.
    pub fn message(&self) -> String {
        format!(
            "Generated {} triples in {}",
            self.report.triples,
            self.output.display()
        )
    }
}

/// Reads `config.input`, converts every sheet, and writes `config.output`.
/// Any I/O failure aborts the run.
pub fn run(config: &Config) -> Result<RunSummary> {
    let namespaces = config.namespaces()?;
    let workbook = Workbook::open(&config.input, &config.na_values)
        .with_context(|| format!("Could not load {}", config.input.display()))?;
    info!(
        "Loaded {} sheets from {}",
        workbook.len(),
        config.input.display()
    );
    let converter = Converter::new(namespaces);
    let conversion = converter.convert_workbook(&workbook);
    write_graph_to_file(&conversion.graph, converter.namespaces(), &config.output)?;
    Ok(RunSummary {
        report: conversion.report,
        output: config.output.clone(),
    })
}
