use anyhow::{Context, Result};
use comfy_table::{CellAlignment, Table};
use tracing::{info, info_span};

use audit_cli::pipeline::{AuditRequest, extract_stage, run_audit};
use audit_cli::types::AuditSummary;
use audit_ingest::scan_headers;
use audit_model::{AnalysisOptions, NullPolicy};

use crate::cli::{AnalyzeArgs, FeaturesArgs, InventoryArgs};
use crate::summary::{align_column, apply_table_style, header_cell};

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AuditSummary> {
    let options = AnalysisOptions::new(args.threshold)
        .context("invalid threshold")?
        .with_null_policy(NullPolicy::blank_only().with_markers(args.null_markers.iter().cloned()));
    let request = AuditRequest {
        catalog: args.catalog.clone(),
        data_dir: args.data_dir.clone(),
        output_dir: args.output_dir.clone(),
        options,
    };
    let outcome = run_audit(&request)?;
    Ok(AuditSummary::new(
        request.catalog,
        request.data_dir,
        request.output_dir,
        request.options.threshold,
        outcome,
    ))
}

pub fn run_features(args: &FeaturesArgs) -> Result<()> {
    let features = extract_stage(&args.catalog)?;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Feature"), header_cell("Searched as")]);
    apply_table_style(&mut table);
    for feature in features.iter() {
        table.add_row(vec![feature.name.as_str(), feature.mapped_name.as_str()]);
    }
    println!("{table}");
    println!("{} critical features", features.len());
    Ok(())
}

pub fn run_inventory(args: &InventoryArgs) -> Result<()> {
    let span = info_span!("inventory", dir = %args.data_dir.display());
    let _guard = span.enter();

    let (inventory, skipped) = scan_headers(&args.data_dir)
        .with_context(|| format!("scan {}", args.data_dir.display()))?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Columns"),
        header_cell("Names"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for file in inventory.files() {
        table.add_row(vec![
            file.name.clone(),
            file.columns.len().to_string(),
            file.columns.join(", "),
        ]);
    }
    println!("{table}");
    for entry in &skipped {
        eprintln!("skipped {}: {}", entry.file, entry.reason);
    }
    info!(
        file_count = inventory.len(),
        skipped_count = skipped.len(),
        "inventory listed"
    );
    Ok(())
}
