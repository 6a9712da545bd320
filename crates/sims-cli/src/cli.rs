//! CLI argument definitions for the `sims` tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use sims_model::SamplingStrategy;
use sims_report::{RecordFilter, SortKey, SortOrder};

use sims_cli::pipeline::QueryOptions;

#[derive(Parser)]
#[command(
    name = "sims",
    version,
    about = "Frequency station uploads: validate, summarize and reduce for mapping",
    long_about = "Validate frequency station CSV uploads, summarize them and reduce large\n\
                  record sets to a marker budget for map rendering."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow client and station names in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate an upload and list its warnings.
    Validate(InputArgs),

    /// Validate, filter and print dataset summary tables.
    Summary(SummaryArgs),

    /// Validate, filter and reduce an upload to the marker budget, writing CSV.
    Reduce(ReduceArgs),

    /// Write the sample upload template.
    Template(TemplateArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Station upload CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Keep only records from this city (exact match).
    #[arg(long)]
    pub city: Option<String>,

    /// Keep only records of this client (exact match).
    #[arg(long)]
    pub client: Option<String>,

    /// Keep only records of this station (exact match).
    #[arg(long)]
    pub station: Option<String>,

    /// Keep only records of this service (exact match).
    #[arg(long)]
    pub service: Option<String>,

    /// Keep only records of this subservice (exact match).
    #[arg(long)]
    pub subservice: Option<String>,

    /// Keep only records where any column contains this text (case-insensitive).
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Sort records by this column.
    #[arg(long = "sort-by", value_enum, value_name = "COLUMN")]
    pub sort_by: Option<SortByArg>,

    /// Sort in descending order.
    #[arg(long, requires = "sort_by")]
    pub descending: bool,
}

impl QueryArgs {
    pub fn to_options(&self) -> QueryOptions {
        QueryOptions {
            filter: RecordFilter {
                city: self.city.clone(),
                client: self.client.clone(),
                station: self.station.clone(),
                service: self.service.clone(),
                subservice: self.subservice.clone(),
            },
            search: self.search.clone(),
            sort: self.sort_by.map(|key| {
                let order = if self.descending {
                    SortOrder::Descending
                } else {
                    SortOrder::Ascending
                };
                (key.into(), order)
            }),
        }
    }
}

#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub query: QueryArgs,

    /// Print the summary as JSON instead of tables.
    #[arg(long)]
    pub json: bool,

    /// Also print the first ROWS records as a table.
    #[arg(long, value_name = "ROWS")]
    pub preview: Option<usize>,
}

#[derive(Args)]
pub struct ReduceArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub query: QueryArgs,

    /// Largest number of records to keep (recommended 1000-20000).
    #[arg(long = "max-markers", value_name = "N", value_parser = parse_max_markers)]
    pub max_markers: Option<usize>,

    /// How to choose the records that are kept.
    #[arg(long, value_enum)]
    pub sampling: Option<SamplingArg>,

    /// Seed for random choices.
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON settings file; explicit flags override its values.
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Write the reduced CSV here instead of stdout.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct TemplateArgs {
    /// Write the template here instead of stdout.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

fn parse_max_markers(value: &str) -> Result<usize, String> {
    let parsed: usize = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a positive whole number"))?;
    if parsed == 0 {
        return Err("max markers must be at least 1".to_string());
    }
    Ok(parsed)
}

/// CLI sampling choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SamplingArg {
    Random,
    Cluster,
    Grid,
}

impl From<SamplingArg> for SamplingStrategy {
    fn from(arg: SamplingArg) -> Self {
        match arg {
            SamplingArg::Random => SamplingStrategy::Random,
            SamplingArg::Cluster => SamplingStrategy::ClusterRepresentative,
            SamplingArg::Grid => SamplingStrategy::GridCell,
        }
    }
}

/// CLI sort column choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SortByArg {
    City,
    Client,
    Station,
    Service,
    Subservice,
    Frequency,
}

impl From<SortByArg> for SortKey {
    fn from(arg: SortByArg) -> Self {
        match arg {
            SortByArg::City => SortKey::City,
            SortByArg::Client => SortKey::ClientName,
            SortByArg::Station => SortKey::StationName,
            SortByArg::Service => SortKey::Service,
            SortByArg::Subservice => SortKey::Subservice,
            SortByArg::Frequency => SortKey::Frequency,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
