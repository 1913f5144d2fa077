mod loader;
mod reports;
mod sweep;
mod util;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use loader::FsDataLoader;
use salescast_core::{Dashboard, RawSelection, Selection};
use util::OutputTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Predict sales for one selection and report it
    Predict,
    /// Emit the Plotly figure JSON for one selection
    Figure,
    /// Render many seeded random selections and check invariants
    Sweep,
    /// Print the category lookup table
    Catalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "salescast", version)]
#[command(about = "First-year video game sales forecasts from the command line")]
struct Args {
    /// What to run
    #[arg(long, value_enum, default_value_t = Mode::Predict)]
    mode: Mode,

    /// Company size, or "Show All"
    #[arg(long)]
    company: Option<String>,

    #[arg(long)]
    genre: Option<String>,

    /// Platform tier (PC, Handheld, Game Console)
    #[arg(long)]
    platform: Option<String>,

    /// ESRB rating tier (Level1..Level4)
    #[arg(long)]
    rating: Option<String>,

    /// Sealed price; defaults to the configured slider default
    #[arg(long, allow_negative_numbers = true)]
    price: Option<f64>,

    /// Critic score; 0 means no score
    #[arg(long, allow_negative_numbers = true)]
    score: Option<f64>,

    /// Historical sales CSV; relative paths missing from the current
    /// directory are looked up from the workspace root
    #[arg(long, default_value = "salescast-web/static/data/sales.csv")]
    data: PathBuf,

    /// Serialized forest model; resolved like `--data`
    #[arg(long, default_value = "salescast-web/static/data/model.json")]
    model: PathBuf,

    /// Dashboard config JSON; built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Random selections per sweep
    #[arg(long, default_value_t = 200)]
    iterations: usize,

    /// Sweep seed
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let start_time = Instant::now();
    let mut output_target = OutputTarget::new(args.output.clone())?;
    if output_target.is_file() {
        colored::control::set_override(false);
    }

    if args.mode == Mode::Catalog {
        match args.report {
            ReportFormat::Console => reports::generate_catalog_console_report(&mut output_target)?,
            ReportFormat::Json => {
                reports::generate_json_report(&mut output_target, &reports::catalog_entries())?;
            }
            ReportFormat::Markdown => {
                reports::generate_catalog_markdown_report(&mut output_target)?;
            }
        }
        output_target.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    let loader = FsDataLoader {
        data: util::resolve_asset(&args.data),
        model: util::resolve_asset(&args.model),
        config: args.config.as_deref().map(util::resolve_asset),
    };
    let dashboard = Dashboard::from_loader(&loader).context("failed to load dashboard assets")?;

    let code = match args.mode {
        Mode::Predict | Mode::Figure => {
            let selection = selection_from_args(args, &dashboard)?;
            let outcome = dashboard
                .render(&selection)
                .context("failed to render selection")?;
            if args.mode == Mode::Figure {
                reports::generate_json_report(&mut output_target, &outcome.figure)?;
            } else {
                let report = reports::PredictReport::new(selection, &outcome);
                match args.report {
                    ReportFormat::Console => {
                        reports::generate_console_report(&mut output_target, &report)?;
                    }
                    ReportFormat::Json => reports::generate_json_report(&mut output_target, &report)?,
                    ReportFormat::Markdown => {
                        reports::generate_markdown_report(&mut output_target, &report)?;
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Mode::Sweep => {
            let summary = sweep::run_sweep(&dashboard, args.iterations, args.seed);
            match args.report {
                ReportFormat::Console => {
                    reports::generate_sweep_console_report(&mut output_target, &summary)?;
                }
                ReportFormat::Json => reports::generate_json_report(&mut output_target, &summary)?,
                ReportFormat::Markdown => {
                    reports::generate_sweep_markdown_report(&mut output_target, &summary)?;
                }
            }
            if summary.passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Mode::Catalog => ExitCode::SUCCESS,
    };
    output_target.flush()?;
    log::info!("{:?} finished in {:?}", args.mode, start_time.elapsed());
    Ok(code)
}

fn selection_from_args(args: &Args, dashboard: &Dashboard) -> Result<Selection> {
    let cfg = dashboard.config();
    let raw = RawSelection {
        company: args.company.clone(),
        critic_score: args.score.unwrap_or(cfg.critic_score.default),
        genre: args.genre.clone(),
        platform: args.platform.clone(),
        price: args.price.unwrap_or(cfg.price.default),
        rating: args.rating.clone(),
    };
    Selection::from_raw(&raw).context("invalid selection")
}

#[cfg(test)]
mod tests {
    use super::*;
    use salescast_core::{CompanyChoice, DashboardConfig, ForestModel, SalesDataset};

    fn base_args() -> Args {
        Args {
            mode: Mode::Predict,
            company: None,
            genre: None,
            platform: None,
            rating: None,
            price: None,
            score: None,
            data: PathBuf::from("sales.csv"),
            model: PathBuf::from("model.json"),
            config: None,
            report: ReportFormat::Json,
            output: None,
            iterations: 1,
            seed: 1,
            verbose: false,
        }
    }

    fn dashboard() -> Dashboard {
        let model = ForestModel::from_json(include_str!(
            "../../salescast-web/static/data/model.json"
        ))
        .unwrap();
        Dashboard::new(
            SalesDataset::default(),
            model,
            DashboardConfig::default_config(),
        )
    }

    #[test]
    fn selection_defaults_follow_config() {
        let sel = selection_from_args(&base_args(), &dashboard()).unwrap();
        assert!((sel.price - 19.99).abs() < f64::EPSILON);
        assert!(sel.critic_score.abs() < f64::EPSILON);
        assert!(sel.complete().is_none());
    }

    #[test]
    fn selection_parses_dropdown_values() {
        let args = Args {
            company: Some("Show All".into()),
            genre: Some("Role-Playing".into()),
            platform: Some("Game Console".into()),
            rating: Some("Level2".into()),
            price: Some(39.99),
            score: Some(8.0),
            ..base_args()
        };
        let sel = selection_from_args(&args, &dashboard()).unwrap();
        assert_eq!(sel.company, Some(CompanyChoice::ShowAll));
        assert!(sel.complete().is_some());
    }

    #[test]
    fn unknown_values_are_rejected() {
        let args = Args {
            rating: Some("Level9".into()),
            ..base_args()
        };
        assert!(selection_from_args(&args, &dashboard()).is_err());
    }
}
