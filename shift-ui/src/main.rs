use std::path::PathBuf;

use anyhow::{Context, anyhow, bail};
use clap::Parser;
use shift_core::{DateSelection, TimeField};
use tracing::{debug, info, warn};

use shift_ui::logging::{self, LoggingOptions};
use shift_ui::utils::{parse_card_edit, split_list};
use shift_ui::views::TransitionOutcome;
use shift_ui::{ShiftWizard, WizardConfig, WizardError, csv_loader};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Two-step shift submission wizard.
///
/// Takes the selected dates, generates one time card per date, applies any
/// per-card edits and removals, then prints the time list and the
/// confirmation summary.
#[derive(Debug, Parser)]
struct Cli {
    /// Comma-separated ISO dates, e.g. `2024-06-15,2024-06-16`.
    #[arg(long, conflicts_with = "csv")]
    dates: Option<String>,

    /// Comma-separated ISO dates to drop from `--dates`.
    #[arg(long, requires = "dates")]
    removed_dates: Option<String>,

    /// CSV file with a `date` column and an optional `removed` column.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bulk start time for new cards (`HH:MM`, empty for none).
    #[arg(long)]
    start: Option<String>,

    /// Bulk end time for new cards (`HH:MM`, empty for none).
    #[arg(long)]
    end: Option<String>,

    /// Per-card shift, `INDEX=HH:MM-HH:MM`. May be repeated.
    #[arg(long = "set", value_name = "EDIT")]
    edits: Vec<String>,

    /// Card index to remove. May be repeated.
    #[arg(long = "remove", value_name = "INDEX")]
    removals: Vec<usize>,

    /// Log level or filter directive; overrides the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Confirm and submit after showing the summary.
    #[arg(long)]
    submit: bool,
}

fn load_selection(cli: &Cli) -> anyhow::Result<DateSelection> {
    if let Some(path) = &cli.csv {
        return csv_loader::load_from_file(path)
            .with_context(|| format!("loading selection from {}", path.display()));
    }
    let Some(dates) = &cli.dates else {
        bail!("no dates given; use --dates or --csv");
    };
    DateSelection::restore(split_list(dates), cli.removed_dates.as_deref())
        .context("parsing --dates")
}

/// Incomplete cards get a user-facing hint; anything else keeps its cause.
fn explain_submit_error(error: WizardError) -> anyhow::Error {
    match error {
        WizardError::Validation(inner) => {
            anyhow!("submission blocked: every remaining date needs a start and end time ({inner})")
        }
        other => anyhow::Error::new(other).context("requesting confirmation"),
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => WizardConfig::load(path)?,
        None => WizardConfig::default(),
    };
    if let Some(start) = &cli.start {
        config.bulk_start_time = start.clone();
    }
    if let Some(end) = &cli.end {
        config.bulk_end_time = end.clone();
    }

    logging::init_logging(&LoggingOptions {
        level: cli
            .log_level
            .clone()
            .or_else(|| cli.config.as_ref().map(|_| config.log_level.clone())),
        file: cli.log_file.clone().or_else(|| config.log_file.clone()),
        quiet: false,
    })?;
    debug!(?config, "configuration loaded");

    let selection = load_selection(&cli)?;
    let mut wizard = ShiftWizard::from_config(&config).context("invalid bulk defaults")?;

    match wizard.next_to_time(&selection)? {
        TransitionOutcome::Entered(view) => {
            info!(?view, days = selection.len(), "entered time entry");
        }
        other => bail!("could not enter time entry: {other:?}"),
    }

    for edit in &cli.edits {
        let edit = parse_card_edit(edit)?;
        wizard.set_card_time(edit.index, TimeField::Start, &edit.start.to_string())?;
        wizard.set_card_time(edit.index, TimeField::End, &edit.end.to_string())?;
    }
    for &index in &cli.removals {
        wizard.open_card_time_picker(index)?;
        if !wizard.remove_current_card()? {
            warn!(index, "card was already removed");
        }
    }

    println!("{}", wizard.progress());
    println!("{}", wizard.rendered());

    wizard.submit().await.map_err(explain_submit_error)?;
    println!("{}", wizard.rendered_confirmation());

    if cli.submit {
        let receipt = wizard.final_submit().await?;
        info!(rows = receipt.rows.len(), "submitted");
        println!("{}", receipt.message);
    } else {
        wizard.cancel_submit()?;
    }

    Ok(())
}
