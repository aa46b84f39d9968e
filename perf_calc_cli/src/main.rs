use clap::{Parser, Subcommand};
use perf_calc::chart::{solve_chain, Chart};
use perf_calc::io::{read_chain_json, read_points_csv};
use perf_calc::performance::{
    accel_go_distance, accel_stop_distance, climb_one_engine_inop, landing_distance, LandingFlaps,
    Settings,
};
use perf_calc::runway::wind_components;

#[derive(Parser)]
#[command(name = "perf_calc_cli", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Accelerate-stop distance (flaps up) from OAT, pressure altitude,
    /// weight, runway slope, wind component and V1/VR ratio.
    AccelStop {
        oat: f64,
        pa: f64,
        weight: f64,
        slope: f64,
        wind: f64,
        v1_vr_ratio: f64,
        #[arg(long)]
        wet: bool,
    },
    /// Accelerate-go distance (flaps up); the chart band is selected by
    /// pressure altitude.
    AccelGo {
        oat: f64,
        pa: f64,
        weight: f64,
        slope: f64,
        wind: f64,
        v1_vr_ratio: f64,
    },
    /// Landing distance over an obstacle.
    Landing {
        oat: f64,
        pa: f64,
        weight: f64,
        slope: f64,
        wind: f64,
        #[arg(default_value_t = 50.0)]
        obstacle_height: f64,
        #[arg(long)]
        wet: bool,
        #[arg(long)]
        reverse: bool,
        #[arg(long)]
        flaps_up: bool,
    },
    /// One-engine-inoperative climb rate from OAT, pressure altitude and
    /// weight.
    Climb { oat: f64, pa: f64, weight: f64 },
    /// Resolve wind into headwind and crosswind components for a runway
    /// heading.
    Wind {
        runway_heading: f64,
        wind_direction: f64,
        wind_speed: f64,
    },
    /// Evaluate a single chart table (CSV of x,y,z samples) at a query
    /// point.
    EvalChart { table: String, x: f64, y: f64 },
    /// Evaluate a chart chain (JSON) against a comma-separated input list.
    EvalChain { chain: String, inputs: String },
}

fn print_result(value: Option<f64>, unit: &str) {
    match value {
        Some(v) => println!("{v:.0} {unit}"),
        None => {
            println!("no result");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::AccelStop {
            oat,
            pa,
            weight,
            slope,
            wind,
            v1_vr_ratio,
            wet,
        } => {
            let settings = Settings {
                wet_runway: wet,
                ..Settings::default()
            };
            print_result(
                accel_stop_distance(&settings, oat, pa, weight, slope, wind, v1_vr_ratio),
                "ft",
            );
        }
        Commands::AccelGo {
            oat,
            pa,
            weight,
            slope,
            wind,
            v1_vr_ratio,
        } => {
            let settings = Settings::default();
            print_result(
                accel_go_distance(&settings, oat, pa, weight, slope, wind, v1_vr_ratio),
                "ft",
            );
        }
        Commands::Landing {
            oat,
            pa,
            weight,
            slope,
            wind,
            obstacle_height,
            wet,
            reverse,
            flaps_up,
        } => {
            let settings = Settings {
                wet_runway: wet,
                landing_reverse: reverse,
                landing_flaps: if flaps_up {
                    LandingFlaps::Up
                } else {
                    LandingFlaps::Down
                },
                ..Settings::default()
            };
            print_result(
                landing_distance(&settings, oat, pa, weight, slope, wind, obstacle_height),
                "ft",
            );
        }
        Commands::Climb { oat, pa, weight } => {
            print_result(climb_one_engine_inop(oat, pa, weight), "ft/min");
        }
        Commands::Wind {
            runway_heading,
            wind_direction,
            wind_speed,
        } => {
            let w = wind_components(runway_heading, wind_direction, wind_speed);
            println!("headwind: {:.2} kt", w.headwind);
            println!("crosswind: {:.2} kt ({})", w.crosswind_speed, w.crosswind_direction);
            if w.is_tailwind {
                println!("tailwind: {:.2} kt", w.tailwind);
            }
        }
        Commands::EvalChart { table, x, y } => match read_points_csv(&table) {
            Ok(points) => {
                let chart = Chart::new(points);
                match chart.value_at(x, y) {
                    Some(z) => println!("{z}"),
                    None => {
                        println!("no result");
                        std::process::exit(1);
                    }
                }
            }
            Err(e) => {
                eprintln!("Error reading {}: {}", table, e);
                std::process::exit(1);
            }
        },
        Commands::EvalChain { chain, inputs } => {
            let charts = match read_chain_json(&chain) {
                Ok(charts) => charts,
                Err(e) => {
                    eprintln!("Error reading {}: {}", chain, e);
                    std::process::exit(1);
                }
            };
            let values: Result<Vec<f64>, _> =
                inputs.split(',').map(|v| v.trim().parse::<f64>()).collect();
            match values {
                Ok(values) => match solve_chain(&charts, &values) {
                    Some(z) => println!("{z}"),
                    None => {
                        println!("no result");
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    eprintln!("Error parsing inputs: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
