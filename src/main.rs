use anyhow::Result;
use clap::Parser;

use platrank::output::{create_writer, OutputFormat, Report, ReportWriter};
use platrank::{aggregation, reference, topsis, weights};

#[derive(Parser, Debug)]
#[command(name = "platrank")]
#[command(about = "Multi-criteria decision analysis (TOPSIS) for DataOps platform selection", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let matrix = reference::reference_matrix();
    let hierarchical = reference::default_hierarchical_weights();
    if !weights::validate(&hierarchical, weights::WEIGHT_SUM_TOLERANCE) {
        log::warn!("default hierarchical weights do not sum to 1.0");
    }

    let report = Report {
        analysis: topsis::run_analysis(&matrix, &hierarchical)?,
        dimension_scores: aggregation::dimension_scores(&matrix),
        summaries: aggregation::summary_statistics(&matrix),
    };

    create_writer(cli.format).write_report(&report)
}
