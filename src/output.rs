//! Report rendering: terminal, markdown, and JSON writers.

use std::io::Write;

use clap::ValueEnum;
use colored::*;
use serde::Serialize;

use crate::aggregation::{AlternativeSummary, DimensionScores};
use crate::topsis::TopsisAnalysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Everything a writer needs for one report: the pipeline bundle plus the
/// descriptive aggregations computed off the raw matrix.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub analysis: TopsisAnalysis,
    pub dimension_scores: DimensionScores,
    pub summaries: Vec<AlternativeSummary>,
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "# Platform Ranking Report")?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Ranking")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Rank | Platform | D+ | D- | Score |")?;
        writeln!(self.writer, "|------|----------|----|----|-------|")?;
        for row in &report.analysis.ranking {
            writeln!(
                self.writer,
                "| {} | {} | {:.4} | {:.4} | {:.4} |",
                row.rank, row.alternative, row.d_plus, row.d_minus, row.score
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## Dimension Comparison")?;
        writeln!(self.writer)?;
        let platforms = report.dimension_scores.alternatives.join(" | ");
        writeln!(self.writer, "| Dimension | {platforms} |")?;
        write!(self.writer, "|-----------|")?;
        for _ in &report.dimension_scores.alternatives {
            write!(self.writer, "---|")?;
        }
        writeln!(self.writer)?;
        for (i, dimension) in report.dimension_scores.dimensions.iter().enumerate() {
            write!(self.writer, "| {dimension} |")?;
            for value in &report.dimension_scores.rows[i] {
                write!(self.writer, " {value:.2} |")?;
            }
            writeln!(self.writer)?;
        }

        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportWriter for TerminalWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        println!("{}", "Platform Ranking (TOPSIS)".bold().blue());
        println!();

        for row in &report.analysis.ranking {
            let line = format!(
                "  {}. {:<18} score {:.4}   d+ {:.4}   d- {:.4}",
                row.rank, row.alternative, row.score, row.d_plus, row.d_minus
            );
            if row.rank == 1 {
                println!("{}", line.green().bold());
            } else {
                println!("{line}");
            }
        }
        println!();

        println!("{}", "Dimension comparison (raw score means)".bold());
        print!("  {:<22}", "");
        for platform in &report.dimension_scores.alternatives {
            print!(" {platform:>18}");
        }
        println!();
        for (i, dimension) in report.dimension_scores.dimensions.iter().enumerate() {
            print!("  {dimension:<22}");
            for value in &report.dimension_scores.rows[i] {
                print!(" {value:>18.2}");
            }
            println!();
        }
        println!();

        println!("{}", "Raw score summary".bold());
        for summary in &report.summaries {
            println!(
                "  {:<18} mean {:.2}   std {:.2}   min {:.1}   max {:.1}",
                summary.alternative, summary.mean, summary.std_dev, summary.min, summary.max
            );
        }

        Ok(())
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}
