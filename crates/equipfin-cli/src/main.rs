mod commands;
mod input;
mod logging;
mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::info;
use std::process;

use commands::financing::{AnnuityArgs, InstallmentArgs, InstallmentPlanArgs, LeasingArgs};

/// Equipment leasing and 0% installment calculations
#[derive(Parser)]
#[command(
    name = "equipfin",
    version,
    about = "Equipment leasing and installment calculations",
    long_about = "A CLI for equipment financing calculations with decimal precision. \
                  Computes annuity leasing schedules, 0% installment plans, and \
                  storefront-style quotes with down payments and display labels."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Financing config file (JSON, or YAML for .yaml/.yml)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Level-payment amortization schedule for a financed principal
    Annuity(AnnuityArgs),
    /// Split a price into equal interest-free installments
    Installment(InstallmentArgs),
    /// Leasing quote: down payment plus annuity on the remainder
    Leasing(LeasingArgs),
    /// 0% installment quote with due dates
    InstallmentPlan(InstallmentPlanArgs),
    /// Show the active financing presets and defaults
    Plans,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Commands::Version = cli.command {
        println!("equipfin {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let result = input::config::load(cli.config.as_deref()).and_then(|config| {
        info!(
            "financing config: {} leasing terms, {} installment terms",
            config.leasing_terms.len(),
            config.installment_terms.len()
        );
        match cli.command {
            Commands::Annuity(args) => commands::financing::run_annuity(args),
            Commands::Installment(args) => commands::financing::run_installment(args),
            Commands::Leasing(args) => commands::financing::run_leasing(args, &config),
            Commands::InstallmentPlan(args) => {
                commands::financing::run_installment_plan(args, &config)
            }
            Commands::Plans => commands::plans::run_plans(&config),
            Commands::Version => Ok(serde_json::json!({ "version": env!("CARGO_PKG_VERSION") })),
        }
    });

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
