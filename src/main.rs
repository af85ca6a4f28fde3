//! Return Calculator CLI
//!
//! Command-line interface for lump sum, SIP, and batch projections

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use return_calculator::{
    report, scenario, CalculatorConfig, InvestmentPlan, ScenarioResult, ScenarioRunner,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "return-calc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Project lump sum and SIP investment returns year by year")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file with default inputs
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    format: OutputFormat,

    /// Project inputs as given, without clamping to the calculator ranges
    #[arg(long, global = true)]
    no_clamp: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a single upfront investment
    LumpSum {
        /// Principal amount
        #[arg(short, long)]
        amount: Option<f64>,
        /// Expected annual return in percent
        #[arg(short, long)]
        rate: Option<f64>,
        /// Investment period in years
        #[arg(short, long)]
        years: Option<u32>,
    },

    /// Project a monthly systematic investment plan
    Sip {
        /// Monthly contribution
        #[arg(short, long)]
        amount: Option<f64>,
        /// Expected annual return in percent
        #[arg(short, long)]
        rate: Option<f64>,
        /// Investment period in years
        #[arg(short, long)]
        years: Option<u32>,
        /// Raise the contribution by this percent every year
        #[arg(short, long)]
        step_up: Option<f64>,
        /// Keep the contribution flat even if the config enables step-up
        #[arg(long, conflicts_with = "step_up")]
        no_step_up: bool,
    },

    /// Project every scenario in a CSV file
    Batch {
        /// Scenario CSV (ScenarioID,Mode,Amount,AnnualRate,Years,StepUp,StepUpRate)
        input: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CalculatorConfig::from_json_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    if cli.no_clamp {
        config.clamp_inputs = false;
    }

    let runner = ScenarioRunner::with_config(config);

    let (results, output) = match cli.command {
        Commands::LumpSum { amount, rate, years } => {
            let input = runner.config().lump_sum.with_overrides(amount, rate, years);
            (single(&runner, InvestmentPlan::LumpSum(input)), None)
        }
        Commands::Sip { amount, rate, years, step_up, no_step_up } => {
            let mut input = runner.config().sip.with_overrides(amount, rate, years, step_up);
            if no_step_up {
                input = input.without_step_up();
            }
            (single(&runner, InvestmentPlan::Sip(input)), None)
        }
        Commands::Batch { input, output } => {
            let scenarios = scenario::load_scenarios(&input)
                .with_context(|| format!("Failed to load scenarios from {}", input.display()))?;
            (runner.run_batch(&scenarios), output)
        }
    };

    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Unable to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    match cli.format {
        OutputFormat::Table => {
            for (i, scenario) in results.iter().enumerate() {
                if i > 0 {
                    writeln!(writer)?;
                }
                if results.len() > 1 {
                    writeln!(writer, "Scenario {}", scenario.scenario_id)?;
                }
                write!(writer, "{}", report::render_text(&scenario.result))?;
            }
        }
        OutputFormat::Csv => report::write_csv(&mut writer, &results)?,
        OutputFormat::Json => {
            report::write_json(&mut writer, &results)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;

    if let Some(path) = output {
        log::info!("Results written to {}", path.display());
    }

    Ok(())
}

fn single(runner: &ScenarioRunner, plan: InvestmentPlan) -> Vec<ScenarioResult> {
    vec![ScenarioResult {
        scenario_id: 1,
        result: runner.run(&plan),
    }]
}
