use anyhow::{Result, anyhow};

use otr_core::{PriceDataset, Selection};
use otr_report::ExportFormat;

use otr_cli::pipeline::{CompareOutcome, ExportTarget, run_comparison};
use otr_cli::summary::{comparison_table, locations_table, models_table, variants_table};

use crate::cli::{CompareArgs, VariantsArgs};

/// Exit code when a comparison side has no priced record.
pub const EXIT_NOT_FOUND: i32 = 2;

pub fn run_models(dataset: &PriceDataset) -> Result<i32> {
    println!("{}", models_table(dataset.variants()));
    Ok(0)
}

pub fn run_variants(dataset: &PriceDataset, args: &VariantsArgs) -> Result<i32> {
    let variants = dataset
        .variants()
        .variants(&args.model_series)
        .ok_or_else(|| anyhow!("unknown model series '{}'", args.model_series))?;
    println!("{}", variants_table(&args.model_series, variants));
    Ok(0)
}

pub fn run_locations(dataset: &PriceDataset) -> Result<i32> {
    println!("{}", locations_table(dataset.locations()));
    Ok(0)
}

fn export_targets(args: &CompareArgs) -> Vec<ExportTarget> {
    [
        (ExportFormat::Xlsx, &args.xlsx),
        (ExportFormat::Pdf, &args.pdf),
        (ExportFormat::Csv, &args.csv),
    ]
    .into_iter()
    .filter_map(|(format, path)| {
        path.as_ref()
            .map(|path| ExportTarget::new(format, path.clone()))
    })
    .collect()
}

pub fn run_compare(dataset: &PriceDataset, args: &CompareArgs) -> Result<i32> {
    let selection = Selection {
        model_series: args.model_series.clone(),
        variant: args.variant.clone(),
        location_a: args.location_a.clone(),
        location_b: args.location_b.clone(),
    };
    let targets = export_targets(args);
    let outcome = run_comparison(dataset, &selection, &targets)?;
    let exit_code = match &outcome {
        CompareOutcome::Compared {
            result, exports, ..
        } => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(result)?);
            } else {
                println!("{}", comparison_table(result));
            }
            for export in exports {
                match &export.result {
                    Ok(()) => eprintln!(
                        "Saved {} ({}): {}",
                        export.target.format.extension().to_uppercase(),
                        export.target.format.mime_type(),
                        export.target.path.display()
                    ),
                    Err(error) => eprintln!("error: {error}"),
                }
            }
            if outcome.export_failures() > 0 { 1 } else { 0 }
        }
        CompareOutcome::NotFound(not_found) => {
            eprintln!("warning: {not_found}");
            EXIT_NOT_FOUND
        }
    };
    Ok(exit_code)
}
