use anyhow::{anyhow, Context, Error, Result};
use clap::Parser;
use log::info;
use std::ffi::OsString;
use std::path::PathBuf;
use xlsx2ttl::config::Config;

#[derive(Debug, Parser)]
#[command(name = "xlsx2ttl")]
#[command(about = "Convert the sheets of a spreadsheet workbook into an RDF Turtle file")]
struct Cli {
    /// Verbose mode - sets the RUST_LOG level to info, defaults to warning level
    #[clap(long, short, action, default_value = "false")]
    verbose: bool,
    /// Debug mode - sets the RUST_LOG level to debug, defaults to warning level
    #[clap(long, action, default_value = "false")]
    debug: bool,
    /// JSON configuration file; command line options override its values
    #[clap(long, short)]
    config: Option<PathBuf>,
    /// Workbook to convert, defaults to 'input/resources.xlsx'
    #[clap(long, short)]
    input: Option<PathBuf>,
    /// Turtle file to write, defaults to 'output/resources.ttl'
    #[clap(long, short)]
    output: Option<PathBuf>,
    /// Additional prefix bindings, given as PREFIX=IRI
    #[clap(long = "prefix", short = 'p', value_name = "PREFIX=IRI")]
    prefixes: Vec<String>,
    /// Print the effective configuration before converting
    #[clap(long, action, default_value = "false")]
    print_config: bool,
}

pub fn run() -> Result<()> {
    xlsx2ttl::api::init_logging();
    let cmd = Cli::parse();
    execute(cmd)
}

pub fn run_from_args<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    xlsx2ttl::api::init_logging();
    let cmd = Cli::try_parse_from(args).map_err(Error::from)?;
    execute(cmd)
}

fn parse_prefix(binding: &str) -> Result<(String, String)> {
    let (prefix, iri) = binding
        .split_once('=')
        .ok_or_else(|| anyhow!("Invalid prefix binding '{}', expected PREFIX=IRI", binding))?;
    Ok((prefix.trim().to_string(), iri.trim().to_string()))
}

fn build_config(cmd: &Cli) -> Result<Config> {
    let mut config = match &cmd.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(input) = &cmd.input {
        config.input = input.clone();
    }
    if let Some(output) = &cmd.output {
        config.output = output.clone();
    }
    for binding in &cmd.prefixes {
        config.extra_prefixes.push(parse_prefix(binding)?);
    }
    Ok(config)
}

fn execute(cmd: Cli) -> Result<()> {
    // The RUST_LOG env var is set by `init_logging` if XLSX2TTL_LOG is present.
    // CLI flags for verbosity take precedence. If nothing is set, we default to "warn".
    if cmd.debug {
        std::env::set_var("RUST_LOG", "debug");
    } else if cmd.verbose {
        std::env::set_var("RUST_LOG", "info");
    } else if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "warn");
    }
    let _ = env_logger::try_init();

    let config = build_config(&cmd)?;
    if cmd.verbose || cmd.debug || cmd.print_config {
        config.print();
    }

    info!(
        "Converting {} into {}",
        config.input.display(),
        config.output.display()
    );
    let summary = xlsx2ttl::api::run(&config)?;
    println!("{}", summary.message());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefix() {
        assert_eq!(
            parse_prefix("ex=http://example.com/").unwrap(),
            ("ex".to_string(), "http://example.com/".to_string())
        );
        assert!(parse_prefix("ex").is_err());
    }

    #[test]
    fn test_defaults_without_flags() {
        let cmd = Cli::try_parse_from(["xlsx2ttl"]).unwrap();
        let config = build_config(&cmd).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cmd = Cli::try_parse_from([
            "xlsx2ttl",
            "-i",
            "data/book.xlsx",
            "--output",
            "out/book.ttl",
            "--prefix",
            "ex=http://example.com/",
        ])
        .unwrap();
        let config = build_config(&cmd).unwrap();
        assert_eq!(config.input, PathBuf::from("data/book.xlsx"));
        assert_eq!(config.output, PathBuf::from("out/book.ttl"));
        assert_eq!(
            config.extra_prefixes,
            vec![("ex".to_string(), "http://example.com/".to_string())]
        );
    }
}
