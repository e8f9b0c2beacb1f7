use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use chair_loss::estimator::sweep::{sweep, SweepRange};
use chair_loss::io::display::{CsvReport, DisplaySurface, JsonReport, TextCard};
use chair_loss::io::reporting;
use chair_loss::session::console::run_console;
use chair_loss::{Estimator, EstimatorConfig, Field, Session};

/// Estimate how much revenue an empty salon chair is costing you.
#[derive(Parser, Debug)]
#[command(name = "chair-loss", version, about, long_about = None)]
struct Cli {
    /// TOML file overriding defaults, weeks-per-month/year and the intervention fee
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the loss once from the given inputs
    Estimate {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Vary one input over a range and emit one CSV row per value
    Sweep {
        #[command(flatten)]
        inputs: InputArgs,

        /// Field to vary (average-ticket, clients-per-day, empty-chairs, days-open, weeks-to-fill)
        #[arg(long)]
        field: String,

        #[arg(long)]
        from: f64,

        #[arg(long)]
        to: f64,

        #[arg(long, default_value_t = 1.0)]
        step: f64,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read `field=value` edits from stdin and re-render after each one
    Interactive {
        #[arg(long)]
        fee: Option<f64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

/// Salon inputs. Values are taken as typed and validated like form fields.
#[derive(Args, Debug, Default)]
struct InputArgs {
    /// Average service ticket in dollars
    #[arg(long, allow_hyphen_values = true)]
    average_ticket: Option<String>,

    /// Clients per stylist per day
    #[arg(long, allow_hyphen_values = true)]
    clients_per_day: Option<String>,

    /// Number of empty chairs
    #[arg(long, allow_hyphen_values = true)]
    empty_chairs: Option<String>,

    /// Operating days per week (clamped to 3..=7)
    #[arg(long, allow_hyphen_values = true)]
    days_open: Option<String>,

    /// Expected weeks to fill the seat
    #[arg(long, allow_hyphen_values = true, conflicts_with = "days_to_fill")]
    weeks_to_fill: Option<String>,

    /// Expected days to fill the seat; converted to weeks
    #[arg(long, allow_hyphen_values = true)]
    days_to_fill: Option<String>,

    /// Fee for a paid intervention; adds the break-even figure
    #[arg(long)]
    fee: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => EstimatorConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => EstimatorConfig::default(),
    };

    match cli.command {
        Commands::Estimate { inputs, format } => {
            apply_fee(&mut config, inputs.fee)?;
            let session = session_from_args(Estimator::new(config), &inputs)?;
            let mut surface = surface_for(format, io::stdout(), true);
            surface.render(&session.view())?;
        }

        Commands::Sweep {
            inputs,
            field,
            from,
            to,
            step,
            output,
        } => {
            apply_fee(&mut config, inputs.fee)?;
            let field: Field = field.parse()?;
            let session = session_from_args(Estimator::new(config), &inputs)?;
            let records = sweep(
                session.estimator(),
                session.input(),
                field,
                SweepRange::new(from, to, step),
            )?;

            match output {
                Some(path) => reporting::write_sweep_csv(&path, &records)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => reporting::write_sweep(io::stdout().lock(), &records)?,
            }
        }

        Commands::Interactive { fee, format } => {
            apply_fee(&mut config, fee)?;
            let mut session = Session::new(Estimator::new(config));
            let mut surface = surface_for(format, io::stdout(), false);
            run_console(&mut session, io::stdin().lock(), surface.as_mut())?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so JSON/CSV on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn apply_fee(config: &mut EstimatorConfig, fee: Option<f64>) -> Result<()> {
    if let Some(fee) = fee {
        if !(fee.is_finite() && fee >= 0.0) {
            bail!("--fee must be a finite, non-negative amount (got {fee})");
        }
        config.intervention_fee = Some(fee);
    }
    Ok(())
}

/// Replays the command-line inputs as form edits on a fresh session.
fn session_from_args(estimator: Estimator, args: &InputArgs) -> Result<Session> {
    let mut session = Session::new(estimator);

    let edits = [
        (Field::AverageTicket, &args.average_ticket),
        (Field::ClientsPerDay, &args.clients_per_day),
        (Field::EmptyChairs, &args.empty_chairs),
        (Field::DaysOpen, &args.days_open),
        (Field::WeeksToFill, &args.weeks_to_fill),
    ];
    for (field, raw) in edits {
        if let Some(raw) = raw {
            session
                .edit(field, raw)
                .with_context(|| format!("invalid --{field}"))?;
        }
    }

    if let Some(raw) = &args.days_to_fill {
        session
            .edit_days_to_fill(raw)
            .context("invalid --days-to-fill")?;
    }

    Ok(session)
}

fn surface_for(format: Format, out: impl Write + 'static, pretty: bool) -> Box<dyn DisplaySurface> {
    match format {
        Format::Text => Box::new(TextCard::new(out)),
        Format::Json if pretty => Box::new(JsonReport::pretty(out)),
        Format::Json => Box::new(JsonReport::lines(out)),
        Format::Csv => Box::new(CsvReport::new(out)),
    }
}
