//! AI Cost Calculator
//!
//! Cost estimation for AI data centers, robotics projects, and
//! engineering teams. Each subcommand runs one calculator: flags
//! override a configuration loaded from JSON (or the defaults), the
//! breakdown prints as a text report or JSON, and `--export` writes the
//! report to its canonical file name.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use ai_cost_calculator::{export, factory, input, logging, manpower, report, robot};

#[derive(Parser)]
#[command(name = "ai-cost-calculator")]
#[command(about = "Cost estimation for AI data centers, robotics projects, and engineering teams")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate build and operating costs for an AI data center
    Factory(FactoryArgs),

    /// Estimate staffing costs for an AI project team
    Manpower(ManpowerArgs),

    /// Estimate build costs for an AI robotics project
    Robot(RobotArgs),

    /// Print the default configuration for each calculator as JSON
    Defaults,
}

#[derive(Args)]
struct OutputArgs {
    /// Print the breakdown as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Write the text report into this directory
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,
}

#[derive(Args)]
struct FactoryArgs {
    /// Load the configuration from a JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Facility size in square feet
    #[arg(long)]
    facility_size: Option<u32>,

    /// Number of racks
    #[arg(long)]
    racks: Option<u32>,

    /// GPU model
    #[arg(long, value_enum)]
    gpu: Option<factory::GpuType>,

    /// GPUs installed per rack
    #[arg(long)]
    gpus_per_rack: Option<u32>,

    /// Electricity price in $/kWh
    #[arg(long)]
    power_cost: Option<f64>,

    /// Power usage effectiveness ratio
    #[arg(long)]
    pue: Option<f64>,

    /// Operations staff headcount
    #[arg(long)]
    staff: Option<u32>,

    /// Construction region
    #[arg(long, value_enum)]
    region: Option<factory::Region>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct ManpowerArgs {
    /// Load the configuration from a JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Project type label (informational only)
    #[arg(long)]
    project_type: Option<String>,

    /// Hiring region
    #[arg(long, value_enum)]
    region: Option<manpower::Region>,

    /// Employment type
    #[arg(long, value_enum)]
    employment: Option<manpower::EmploymentType>,

    /// Project duration in months
    #[arg(long)]
    duration: Option<u32>,

    /// ML engineer headcount
    #[arg(long)]
    ml_engineers: Option<u32>,

    /// AI researcher headcount
    #[arg(long)]
    ai_researchers: Option<u32>,

    /// Data scientist headcount
    #[arg(long)]
    data_scientists: Option<u32>,

    /// MLOps engineer headcount
    #[arg(long)]
    mlops_engineers: Option<u32>,

    /// DevOps engineer headcount
    #[arg(long)]
    devops_engineers: Option<u32>,

    /// Product manager headcount
    #[arg(long)]
    product_managers: Option<u32>,

    /// Apply the 15% remote-work discount
    #[arg(long)]
    remote: bool,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct RobotArgs {
    /// Load the configuration from a JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Development team size
    #[arg(long)]
    team_size: Option<u32>,

    /// Embedded compute module
    #[arg(long, value_enum)]
    module: Option<robot::ComputeModule>,

    /// LiDAR sensor model
    #[arg(long, value_enum)]
    lidar: Option<robot::LidarModel>,

    /// RGB-D camera count
    #[arg(long)]
    cameras: Option<u32>,

    /// Servo/actuator count
    #[arg(long)]
    actuators: Option<u32>,

    /// Cloud training hours
    #[arg(long)]
    training_hours: Option<u32>,

    /// Number of prototypes
    #[arg(long)]
    prototypes: Option<u32>,

    /// Cloud region for training
    #[arg(long, value_enum)]
    cloud_region: Option<robot::CloudRegion>,

    /// Electricity price in $/kWh
    #[arg(long)]
    power_cost: Option<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Factory(args) => run_factory(args),
        Commands::Manpower(args) => run_manpower(args),
        Commands::Robot(args) => run_robot(args),
        Commands::Defaults => print_defaults(),
    }
}

fn run_factory(args: FactoryArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => input::load_config::<factory::FactoryConfig>(path)?,
        None => factory::FactoryConfig::default(),
    };
    if let Some(v) = args.facility_size {
        config.facility_size = v;
    }
    if let Some(v) = args.racks {
        config.rack_count = v;
    }
    if let Some(v) = args.gpu {
        config.gpu_type = v;
    }
    if let Some(v) = args.gpus_per_rack {
        config.gpu_per_rack = v;
    }
    if let Some(v) = args.power_cost {
        config.power_cost_per_kwh = v;
    }
    if let Some(v) = args.pue {
        config.pue = v;
    }
    if let Some(v) = args.staff {
        config.staff_count = v;
    }
    if let Some(v) = args.region {
        config.region = v;
    }

    let breakdown = factory::calculate(&config);
    debug!(
        gpu_count = breakdown.compute.gpu_count,
        capex = breakdown.totals.capex,
        "factory breakdown calculated"
    );

    let text = report::factory_report(&config, &breakdown);
    emit(&args.output, &text, &breakdown, export::FACTORY_REPORT_FILENAME)
}

fn run_manpower(args: ManpowerArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => input::load_config::<manpower::ManpowerConfig>(path)?,
        None => manpower::ManpowerConfig::default(),
    };
    if let Some(v) = args.project_type {
        config.project_type = v;
    }
    if let Some(v) = args.region {
        config.region = v;
    }
    if let Some(v) = args.employment {
        config.employment_type = v;
    }
    if let Some(v) = args.duration {
        config.project_duration = v;
    }
    if let Some(v) = args.ml_engineers {
        config.ml_engineers = v;
    }
    if let Some(v) = args.ai_researchers {
        config.ai_researchers = v;
    }
    if let Some(v) = args.data_scientists {
        config.data_scientists = v;
    }
    if let Some(v) = args.mlops_engineers {
        config.mlops_engineers = v;
    }
    if let Some(v) = args.devops_engineers {
        config.devops_engineers = v;
    }
    if let Some(v) = args.product_managers {
        config.product_managers = v;
    }
    if args.remote {
        config.remote_work = true;
    }

    let breakdown = manpower::calculate(&config);
    debug!(
        team_size = breakdown.team_size,
        monthly = breakdown.monthly_cost,
        "manpower breakdown calculated"
    );

    let text = report::manpower_report(&config, &breakdown);
    emit(&args.output, &text, &breakdown, export::MANPOWER_REPORT_FILENAME)
}

fn run_robot(args: RobotArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => input::load_config::<robot::RobotConfig>(path)?,
        None => robot::RobotConfig::default(),
    };
    if let Some(v) = args.team_size {
        config.team_size = v;
    }
    if let Some(v) = args.module {
        config.compute_module = v;
    }
    if let Some(v) = args.lidar {
        config.lidar_model = v;
    }
    if let Some(v) = args.cameras {
        config.camera_count = v;
    }
    if let Some(v) = args.actuators {
        config.actuator_count = v;
    }
    if let Some(v) = args.training_hours {
        config.training_hours = v;
    }
    if let Some(v) = args.prototypes {
        config.prototype_count = v;
    }
    if let Some(v) = args.cloud_region {
        config.cloud_region = v;
    }
    if let Some(v) = args.power_cost {
        config.power_cost_per_kwh = v;
    }

    let breakdown = robot::calculate(&config);
    debug!(total = breakdown.total, "robot breakdown calculated");

    let text = report::robot_report(&config, &breakdown);
    emit(&args.output, &text, &breakdown, export::ROBOT_REPORT_FILENAME)
}

/// Print the breakdown and optionally export the text report.
fn emit<T: serde::Serialize>(
    output: &OutputArgs,
    text: &str,
    breakdown: &T,
    filename: &str,
) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(breakdown)?);
    } else {
        print!("{text}");
    }

    if let Some(dir) = &output.export {
        let path = export::write_report(dir, filename, text)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn print_defaults() -> Result<()> {
    let defaults = serde_json::json!({
        "factory": factory::FactoryConfig::default(),
        "manpower": manpower::ManpowerConfig::default(),
        "robot": robot::RobotConfig::default(),
    });
    println!("{}", serde_json::to_string_pretty(&defaults)?);
    Ok(())
}
