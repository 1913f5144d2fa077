use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use salescast_core::{
    Category, CompanyChoice, CompanySize, ControlId, Genre, HistogramBins, PlatformTier,
    Prediction, Rating, RenderOutcome, SalesWindow, Selection, echo_for,
};

use crate::sweep::SweepSummary;
use crate::util::fixed;

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Serialize)]
pub struct EchoLine {
    pub control: ControlId,
    pub text: String,
}

/// Everything one `predict` run reports.
#[derive(Debug, Clone, Serialize)]
pub struct PredictReport {
    pub generated_at: String,
    pub selection: Selection,
    pub echoes: Vec<EchoLine>,
    pub title: String,
    pub predictions: Vec<Prediction>,
    pub window: Option<SalesWindow>,
    pub genre_history: usize,
    pub shown_history: usize,
    pub bins: Option<HistogramBins>,
}

impl PredictReport {
    #[must_use]
    pub fn new(selection: Selection, outcome: &RenderOutcome) -> Self {
        let shown = outcome
            .figure
            .histogram()
            .map(|hist| hist.x.clone())
            .unwrap_or_default();
        Self {
            generated_at: Utc::now().to_rfc3339(),
            selection,
            echoes: ControlId::ALL
                .iter()
                .map(|&control| EchoLine {
                    control,
                    text: echo_for(control, &selection),
                })
                .collect(),
            title: outcome.figure.layout.title.clone(),
            predictions: outcome.predictions.clone(),
            window: outcome.window,
            genre_history: outcome.genre_history,
            shown_history: shown.len(),
            bins: HistogramBins::auto(&shown),
        }
    }
}

fn prediction_label(prediction: &Prediction) -> &'static str {
    prediction.company.map_or("result", Category::value)
}

pub fn generate_console_report<W: Write>(out: &mut W, report: &PredictReport) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", report.title.bright_cyan().bold())?;
    writeln!(out, "{}", "=".repeat(report.title.len()).cyan())?;
    for echo in &report.echoes {
        writeln!(out, "{:>13}: {}", echo.control.to_string(), echo.text)?;
    }
    writeln!(out)?;

    if report.predictions.is_empty() {
        writeln!(
            out,
            "{}",
            "Selection incomplete: showing historical sales only.".yellow()
        )?;
    } else {
        writeln!(out, "{}", "Predicted first-year global sales".bold())?;
        for prediction in &report.predictions {
            writeln!(
                out,
                "  {:<16} {} million",
                prediction_label(prediction),
                fixed(prediction.sales, 2).green()
            )?;
        }
    }
    if let Some(window) = report.window {
        writeln!(
            out,
            "Window: {} to {} (exclusive)",
            fixed(window.lower, 2),
            fixed(window.upper, 2)
        )?;
    }
    writeln!(
        out,
        "Historical releases shown: {}/{}",
        report.shown_history, report.genre_history
    )?;

    if let Some(bins) = &report.bins {
        writeln!(out)?;
        let peak = bins.counts.iter().copied().max().unwrap_or(0).max(1);
        for (idx, &count) in bins.counts.iter().enumerate() {
            let (lo, hi) = bins.edges(idx);
            let bar = "#".repeat(count * BAR_WIDTH / peak);
            writeln!(
                out,
                "  {:>7} - {:<7} | {} {count}",
                fixed(lo, 2),
                fixed(hi, 2),
                bar.blue()
            )?;
        }
    }
    Ok(())
}

pub fn generate_json_report<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    let json_output = serde_json::to_string_pretty(value)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write>(out: &mut W, report: &PredictReport) -> Result<()> {
    writeln!(out, "# {}\n", report.title)?;
    writeln!(out, "_Generated {}_\n", report.generated_at)?;

    writeln!(out, "## Selection\n")?;
    for echo in &report.echoes {
        writeln!(out, "- **{}**: {}", echo.control, echo.text)?;
    }
    writeln!(out)?;

    writeln!(out, "## Predictions\n")?;
    if report.predictions.is_empty() {
        writeln!(out, "_Selection incomplete; no prediction made._\n")?;
    } else {
        writeln!(out, "| Series | Sales (million) |")?;
        writeln!(out, "| --- | ---: |")?;
        for prediction in &report.predictions {
            writeln!(
                out,
                "| {} | {} |",
                prediction_label(prediction),
                fixed(prediction.sales, 2)
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out, "## Historical Sales\n")?;
    writeln!(
        out,
        "- **Releases shown**: {}/{}",
        report.shown_history, report.genre_history
    )?;
    if let Some(bins) = &report.bins {
        writeln!(out, "\n| Bin | Count |")?;
        writeln!(out, "| --- | ---: |")?;
        for (idx, count) in bins.counts.iter().enumerate() {
            let (lo, hi) = bins.edges(idx);
            writeln!(out, "| {} - {} | {count} |", fixed(lo, 2), fixed(hi, 2))?;
        }
        writeln!(out, "| **Total** | {} |", bins.total())?;
    }
    Ok(())
}

pub fn generate_sweep_console_report<W: Write>(out: &mut W, summary: &SweepSummary) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "🔁 Sweep Results".bright_cyan().bold())?;
    writeln!(out, "{}", "================".cyan())?;
    writeln!(out, "Seed: {}", summary.seed)?;
    writeln!(out, "Iterations: {}", summary.iterations)?;
    writeln!(
        out,
        "Complete selections: {} ({} rows predicted)",
        summary.complete, summary.predicted_rows
    )?;
    writeln!(out, "Incomplete selections: {}", summary.incomplete)?;
    if let (Some(min), Some(max)) = (summary.min_sales, summary.max_sales) {
        writeln!(out, "Sales range: {} to {} million", fixed(min, 2), fixed(max, 2))?;
    }
    let status = if summary.passed() {
        "✅ PASS".green()
    } else {
        "❌ FAIL".red()
    };
    writeln!(out, "{status}")?;
    if !summary.failures.is_empty() {
        writeln!(out, "   Failures:")?;
        for failure in &summary.failures {
            writeln!(out, "     • {}", failure.red())?;
        }
    }
    Ok(())
}

pub fn generate_sweep_markdown_report<W: Write>(out: &mut W, summary: &SweepSummary) -> Result<()> {
    let status = if summary.passed() { "✅" } else { "❌" };
    writeln!(out, "# Salescast Sweep {status}\n")?;
    writeln!(out, "- **Seed**: {}", summary.seed)?;
    writeln!(out, "- **Iterations**: {}", summary.iterations)?;
    writeln!(out, "- **Complete selections**: {}", summary.complete)?;
    writeln!(out, "- **Incomplete selections**: {}", summary.incomplete)?;
    writeln!(out, "- **Rows predicted**: {}", summary.predicted_rows)?;
    if !summary.failures.is_empty() {
        writeln!(out, "- **Failures**:")?;
        for failure in &summary.failures {
            writeln!(out, "  - {failure}")?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub block: &'static str,
    pub value: &'static str,
    pub label: &'static str,
    pub column: usize,
}

fn entries<C: Category>(block: &'static str) -> impl Iterator<Item = CatalogEntry> {
    C::ALL.iter().map(move |&variant| CatalogEntry {
        block,
        value: variant.value(),
        label: variant.label(),
        column: C::OFFSET + variant.feature_index(),
    })
}

/// Lookup table from dropdown values to feature columns.
#[must_use]
pub fn catalog_entries() -> Vec<CatalogEntry> {
    entries::<CompanySize>("company")
        .chain(entries::<Rating>("rating"))
        .chain(entries::<PlatformTier>("platform"))
        .chain(entries::<Genre>("genre"))
        .collect()
}

pub fn generate_catalog_console_report<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "📚 Category Catalog".bright_cyan().bold())?;
    let mut current = "";
    for entry in catalog_entries() {
        if entry.block != current {
            current = entry.block;
            writeln!(out, "\n{}", current.bold())?;
        }
        writeln!(
            out,
            "  [{:>2}] {:<18} {}",
            entry.column, entry.value, entry.label
        )?;
    }
    writeln!(
        out,
        "\n  {:<23} {}",
        CompanyChoice::ShowAll.value(),
        CompanyChoice::ShowAll.label()
    )?;
    Ok(())
}

pub fn generate_catalog_markdown_report<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "# Salescast Category Catalog\n")?;
    writeln!(out, "| Block | Value | Label | Column |")?;
    writeln!(out, "| --- | --- | --- | ---: |")?;
    for entry in catalog_entries() {
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            entry.block, entry.value, entry.label, entry.column
        )?;
    }
    Ok(())
}
