use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use sims_cli::pipeline::{
    SettingsOverrides, apply_queries, load_records, reduce_file, resolve_settings,
};
use sims_ingest::{
    records_to_dataframe, write_records_csv, write_records_csv_file, write_sample_template,
};
use sims_model::ValidationWarning;
use sims_report::{
    DatasetSummary, DatePoint, FilterOptions, ServiceCityCrosstab, TOP_N, date_trend,
    service_city_crosstab,
};

use crate::cli::{InputArgs, ReduceArgs, SummaryArgs, TemplateArgs};
use crate::summary::{
    eprint_warnings, print_dataset_summary, print_date_trend, print_reduction, print_validation,
    print_warnings,
};

/// Validate an upload. Returns whether it passed.
pub fn run_validate(args: &InputArgs) -> Result<bool> {
    let result = load_records(&args.input)?;
    print_validation(&result);
    Ok(result.ok())
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    summary: &'a DatasetSummary,
    services_by_city: &'a ServiceCityCrosstab,
    date_trend: &'a [DatePoint],
    filter_options: FilterOptions,
    warnings: &'a [ValidationWarning],
}

/// Summarize an upload. Returns whether it passed validation.
pub fn run_summary(args: &SummaryArgs) -> Result<bool> {
    let result = load_records(&args.input.input)?;
    if !result.ok() {
        print_validation(&result);
        return Ok(false);
    }
    let records = apply_queries(&result.records, &args.query.to_options());
    let summary = DatasetSummary::from_records(&records);
    let crosstab = service_city_crosstab(&records, TOP_N);
    let trend = date_trend(&records);

    if args.json {
        let report = SummaryReport {
            summary: &summary,
            services_by_city: &crosstab,
            date_trend: &trend,
            filter_options: FilterOptions::from_records(&result.records),
            warnings: &result.warnings,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(true);
    }

    print_warnings(&result.warnings);
    println!();
    print_dataset_summary(&summary, &crosstab);
    print_date_trend(&trend);
    if let Some(rows) = args.preview {
        let frame = records_to_dataframe(&records).context("build preview")?;
        println!();
        println!("{}", frame.head(Some(rows)));
    }
    Ok(true)
}

pub fn run_reduce(args: &ReduceArgs) -> Result<()> {
    let overrides = SettingsOverrides {
        max_markers: args.max_markers,
        sampling_method: args.sampling.map(Into::into),
        seed: args.seed,
    };
    let settings = resolve_settings(args.settings.as_deref(), overrides)?;
    let outcome = reduce_file(&args.input.input, &args.query.to_options(), &settings)?;
    eprint_warnings(&outcome.warnings);

    let records = &outcome.reduction.records;
    match &args.output {
        Some(path) => {
            write_records_csv_file(records, path)
                .with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), records = records.len(), "reduced records written");
        }
        None => write_records_csv(records, io::stdout().lock()).context("write to stdout")?,
    }
    print_reduction(&outcome);
    Ok(())
}

pub fn run_template(args: &TemplateArgs) -> Result<()> {
    match &args.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            write_sample_template(file).with_context(|| format!("write {}", path.display()))?;
            eprintln!("Template written to {}", path.display());
        }
        None => write_sample_template(io::stdout().lock()).context("write to stdout")?,
    }
    Ok(())
}
