//! Integration tests for the compare pipeline and console rendering.

use std::io::Write;

use otr_cli::pipeline::{CompareOutcome, ExportTarget, load_dataset, run_comparison};
use otr_cli::summary::{comparison_table, locations_table, models_table};
use otr_core::Selection;
use otr_report::ExportFormat;
use tempfile::NamedTempFile;

fn dataset_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(
        b"Model Series,Varian,Lokasi,Harga OTR\n\
          Avanza,1.3 E MT,DKI,250000000\n\
          Avanza,1.3 E MT,Jawa Barat,252500000\n\
          Avanza,1.5 G CVT,DKI,0\n\
          Avanza,1.5 G CVT,Jawa Barat,290000000\n\
          Rush,1.5 S GR,Bali,310000000\n",
    )
    .expect("write dataset");
    file
}

#[test]
fn default_selection_compares_dki_and_jawa_barat() {
    let file = dataset_file();
    let dataset = load_dataset(file.path()).expect("load dataset");

    let outcome = run_comparison(&dataset, &Selection::default(), &[]).expect("compare");
    let CompareOutcome::Compared {
        request, result, ..
    } = outcome
    else {
        panic!("expected a comparison");
    };
    assert_eq!(request.model_series, "Avanza");
    assert_eq!(request.variant, "1.3 E MT");
    assert_eq!(result.location_a, "DKI");
    assert_eq!(result.location_b, "Jawa Barat");
    assert_eq!(result.absolute_difference, 2_500_000.0);
}

#[test]
fn missing_location_reports_not_found() {
    let file = dataset_file();
    let dataset = load_dataset(file.path()).expect("load dataset");
    let selection = Selection::default()
        .with_model("Avanza")
        .with_variant("1.3 E MT")
        .with_locations("DKI", "Bali");

    let outcome = run_comparison(&dataset, &selection, &[]).expect("compare");
    match outcome {
        CompareOutcome::NotFound(not_found) => {
            assert_eq!(not_found.missing_locations(), vec!["Bali"]);
        }
        CompareOutcome::Compared { .. } => panic!("Bali has no Avanza price"),
    }
}

#[test]
fn unknown_model_is_an_error() {
    let file = dataset_file();
    let dataset = load_dataset(file.path()).expect("load dataset");

    let error = run_comparison(&dataset, &Selection::default().with_model("Innova"), &[])
        .expect_err("unknown model");
    assert!(format!("{error:#}").contains("Innova"));
}

#[test]
fn exports_are_written_and_reported() {
    let file = dataset_file();
    let dataset = load_dataset(file.path()).expect("load dataset");
    let dir = tempfile::tempdir().expect("temp dir");
    let targets = vec![
        ExportTarget::new(ExportFormat::Xlsx, dir.path().join("result.xlsx")),
        ExportTarget::new(ExportFormat::Pdf, dir.path().join("result.pdf")),
        ExportTarget::new(ExportFormat::Csv, dir.path().join("result.csv")),
        ExportTarget::new(ExportFormat::Csv, dir.path().join("missing/result.csv")),
    ];
    let selection = Selection::default().with_variant("1.5 G CVT");

    let outcome = run_comparison(&dataset, &selection, &targets).expect("compare");
    assert_eq!(outcome.export_failures(), 1);
    let CompareOutcome::Compared { exports, .. } = outcome else {
        panic!("expected a comparison");
    };
    assert_eq!(exports.len(), 4);
    assert!(exports[..3].iter().all(|export| export.result.is_ok()));
    assert!(dir.path().join("result.xlsx").exists());
    assert!(dir.path().join("result.pdf").exists());

    let csv = std::fs::read_to_string(dir.path().join("result.csv")).expect("read csv");
    let data_row = csv.lines().nth(1).expect("data row");
    assert!(data_row.ends_with(",290000000,290000000,"));
}

#[test]
fn load_failure_has_context() {
    let error = load_dataset(std::path::Path::new("/no/such/prices.csv")).expect_err("missing");
    let message = format!("{error:#}");
    assert!(message.contains("load price dataset"));
    assert!(message.contains("not found"));
}

#[test]
fn comparison_table_renders_prices() {
    let file = dataset_file();
    let dataset = load_dataset(file.path()).expect("load dataset");
    let outcome = run_comparison(&dataset, &Selection::default(), &[]).expect("compare");
    let CompareOutcome::Compared { result, .. } = outcome else {
        panic!("expected a comparison");
    };

    let rendered = comparison_table(&result).to_string();
    assert!(rendered.contains("Rp 250,000,000"));
    assert!(rendered.contains("Rp 252,500,000"));
    assert!(rendered.contains("Rp 2,500,000"));
    assert!(rendered.contains("1.00%"));
}

#[test]
fn index_tables_list_entries() {
    let file = dataset_file();
    let dataset = load_dataset(file.path()).expect("load dataset");

    let models = models_table(dataset.variants()).to_string();
    assert!(models.contains("Avanza"));
    assert!(models.contains("Rush"));

    let locations = locations_table(dataset.locations()).to_string();
    for location in ["DKI", "Jawa Barat", "Bali"] {
        assert!(locations.contains(location));
    }
}
