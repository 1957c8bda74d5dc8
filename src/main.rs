//! Capital Projection CLI
//!
//! Command-line interface for single projections and rate comparisons

use anyhow::{bail, Context};
use capital_projection::{
    export, GoalOutcome, InflationMode, ProjectionEngine, ProjectionRequest, RateMode,
    ScenarioRunner,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "capital_projection", about = "Compound growth projection with contributions, fees and inflation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project one parameter set
    Project {
        #[command(flatten)]
        input: InputArgs,
        /// Write all rows to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Print the full result as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Number of trailing rows to print
        #[arg(long, default_value_t = 12)]
        tail: usize,
    },
    /// Compare candidate return rates against the same base parameters
    Compare {
        #[command(flatten)]
        input: InputArgs,
        /// Candidate rates, comma separated (overrides scenario_rates in --config)
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        rates: Vec<f64>,
        /// Run candidates on the rayon thread pool
        #[arg(long)]
        parallel: bool,
        /// Write the aligned trajectories to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CliRateMode {
    Annualized,
    Periodic,
}

impl From<CliRateMode> for RateMode {
    fn from(value: CliRateMode) -> Self {
        match value {
            CliRateMode::Annualized => RateMode::Annualized,
            CliRateMode::Periodic => RateMode::Periodic,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CliInflationMode {
    Off,
    Deflate,
    FoldIntoRate,
}

impl From<CliInflationMode> for InflationMode {
    fn from(value: CliInflationMode) -> Self {
        match value {
            CliInflationMode::Off => InflationMode::Off,
            CliInflationMode::Deflate => InflationMode::Deflate,
            CliInflationMode::FoldIntoRate => InflationMode::FoldIntoRate,
        }
    }
}

#[derive(Args, Debug)]
struct InputArgs {
    /// JSON request file; when given, the flags below are ignored
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 1100.0)]
    start: f64,
    #[arg(long, default_value_t = 100.0)]
    contribution: f64,
    #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
    rate: f64,
    #[arg(long, default_value_t = 0.0)]
    fee: f64,
    #[arg(long, default_value_t = 12)]
    periods_per_year: u32,
    #[arg(long, default_value_t = 10)]
    years: u32,
    /// Horizon in periods (overrides --years)
    #[arg(long)]
    periods: Option<u32>,
    #[arg(long, default_value_t = 0.02, allow_negative_numbers = true)]
    inflation: f64,
    /// Target capital; 0 disables goal tracking
    #[arg(long, default_value_t = 20_000.0)]
    target: f64,
    #[arg(long, value_enum, default_value_t = CliRateMode::Annualized)]
    rate_mode: CliRateMode,
    #[arg(long, value_enum, default_value_t = CliInflationMode::Deflate)]
    inflation_mode: CliInflationMode,
}

impl InputArgs {
    fn into_request(self) -> anyhow::Result<ProjectionRequest> {
        if let Some(path) = &self.config {
            return ProjectionRequest::from_path(path)
                .with_context(|| format!("failed to load request from {}", path.display()));
        }

        Ok(ProjectionRequest {
            starting_capital: self.start,
            contribution: self.contribution,
            return_rate: self.rate,
            fee_rate: self.fee,
            periods_per_year: self.periods_per_year,
            periods: self.periods,
            years: Some(self.years),
            inflation_rate: self.inflation,
            target_capital: Some(self.target),
            rate_mode: self.rate_mode.into(),
            inflation_mode: self.inflation_mode.into(),
            scenario_rates: Vec::new(),
        })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Project { input, csv, json, tail } => run_project(input, csv, json, tail),
        Command::Compare { input, rates, parallel, csv } => run_compare(input, rates, parallel, csv),
    }
}

fn run_project(input: InputArgs, csv: Option<PathBuf>, json: bool, tail: usize) -> anyhow::Result<()> {
    let request = input.into_request()?;
    let params = request.parameters()?;
    let result = ProjectionEngine::new(request.config()).project(&params);

    if json {
        export::write_json(std::io::stdout().lock(), &result)?;
        println!();
    } else {
        println!("Projection over {} periods ({} per year)", params.periods, params.periods_per_year);
        println!("  Periodic rate: {:.6}%", result.periodic_rate * 100.0);
        println!();
        println!("{:>7} {:>16} {:>16}", "Period", "Nominal", "Real");
        println!("{}", "-".repeat(41));
        for row in result.tail(tail) {
            match row.real {
                Some(real) => println!("{:>7} {:>16.2} {:>16.2}", row.period, row.nominal, real),
                None => println!("{:>7} {:>16.2} {:>16}", row.period, row.nominal, "-"),
            }
        }

        let summary = result.summary();
        println!("\nSummary:");
        println!("  Final capital:       {:.2}", summary.final_nominal);
        if let Some(real) = summary.final_real {
            println!("  Final capital (real): {:.2}", real);
        }
        println!("  Total paid in:       {:.2}", summary.total_contributions);
        println!("  Total growth:        {:.2}", summary.total_growth);

        match result.goal {
            GoalOutcome::Reached { .. } => {
                if let Some((years, periods)) = result.goal.elapsed(params.periods_per_year) {
                    println!(
                        "\nTarget of {:.0} reached after {} years and {} periods.",
                        params.target_capital.unwrap_or_default(),
                        years,
                        periods
                    );
                }
            }
            GoalOutcome::NotReached => println!("\nTarget not reached within the horizon."),
            GoalOutcome::NotApplicable => {}
        }
    }

    if let Some(path) = csv {
        let file = File::create(&path).with_context(|| format!("unable to create {}", path.display()))?;
        export::write_csv(BufWriter::new(file), &result)?;
        println!("\nFull results written to: {}", path.display());
    }

    Ok(())
}

fn run_compare(input: InputArgs, rates: Vec<f64>, parallel: bool, csv: Option<PathBuf>) -> anyhow::Result<()> {
    let mut request = input.into_request()?;
    if !rates.is_empty() {
        request.scenario_rates = rates;
    }
    if request.scenario_rates.is_empty() {
        bail!("no candidate rates given (use --rates or scenario_rates in the request)");
    }

    let base = request.parameters()?;
    let runner = ScenarioRunner::new(request.config());
    let set = if parallel {
        runner.run_parallel(&base, &request.scenario_rates)
    } else {
        runner.run(&base, &request.scenario_rates)
    };

    println!("{:>10} {:>16} {:>16} {:>14}", "Rate", "Final nominal", "Final real", "Goal period");
    println!("{}", "-".repeat(59));
    for scenario in set.iter() {
        let summary = scenario.result.summary();
        let real = summary
            .final_real
            .map_or_else(|| "-".to_string(), |v| format!("{:.2}", v));
        let goal = scenario
            .result
            .goal
            .reached_period()
            .map_or_else(|| "-".to_string(), |k| k.to_string());
        println!(
            "{:>9.2}% {:>16.2} {:>16} {:>14}",
            scenario.rate * 100.0,
            summary.final_nominal,
            real,
            goal
        );
    }

    if let Some(path) = csv {
        let file = File::create(&path).with_context(|| format!("unable to create {}", path.display()))?;
        export::write_scenarios_csv(BufWriter::new(file), &set)?;
        println!("\nScenario trajectories written to: {}", path.display());
    }

    Ok(())
}
