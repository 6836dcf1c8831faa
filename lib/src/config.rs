//! Defines the configuration for a conversion run: where the workbook is
//! read from, where the Turtle file is written, which cell texts count as
//! missing, and any prefixes bound on top of the built-in table.

use crate::consts::{DEFAULT_INPUT, DEFAULT_NA_VALUES, DEFAULT_OUTPUT};
use crate::namespaces::NamespaceTable;
use anyhow::Result;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_na_values() -> Vec<String> {
    DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[serde(default = "default_input")]
    #[builder(default = "default_input()")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    #[builder(default = "default_output()")]
    pub output: PathBuf,
    // cell texts loaded as empty cells
    #[serde(default = "default_na_values")]
    #[builder(default = "default_na_values()")]
    pub na_values: Vec<String>,
    // (prefix, namespace) pairs bound after the built-in prefixes
    #[serde(default)]
    #[builder(default)]
    pub extra_prefixes: Vec<(String, String)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            na_values: default_na_values(),
            extra_prefixes: vec![],
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The built-in namespace table extended with `extra_prefixes`.
    pub fn namespaces(&self) -> Result<NamespaceTable> {
        let mut table = NamespaceTable::with_defaults();
        for (prefix, iri) in &self.extra_prefixes {
            table.bind(prefix, iri)?;
        }
        Ok(table)
    }

    pub fn save_to_file(&self, file: &Path) -> Result<()> {
        let config_str = serde_json::to_string_pretty(&self)?;
        let mut file = std::fs::File::create(file)?;
        file.write_all(config_str.as_bytes())?;
        Ok(())
    }

    pub fn from_file(file: &Path) -> Result<Self> {
        let file = std::fs::File::open(file)?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Prints out the current Config in a clear and readable way for command line output.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  Input: {}", self.input.display());
        println!("  Output: {}", self.output.display());
        println!("  NA Values: {:?}", self.na_values);
        if !self.extra_prefixes.is_empty() {
            println!("  Extra Prefixes:");
            for (prefix, iri) in &self.extra_prefixes {
                println!("    - {}: <{}>", prefix, iri);
            }
        }
    }
}
