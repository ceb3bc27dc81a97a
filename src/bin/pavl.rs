use std::{env, path::PathBuf, process};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pavl::{
    avl::AvlRunner,
    components::{AircraftConfig, AircraftSource},
    config::RunnerConfig,
    geometry::resolve_surface,
    utils::PavlError,
};

const USAGE: &str =
    "usage: pavl <aircraft.yaml> [--case NAME] [--job NAME] [--out DIR] [--run] [--stations]";

#[derive(Debug, Default)]
struct Args {
    aircraft: Option<PathBuf>,
    case: Option<String>,
    job: Option<String>,
    out: Option<PathBuf>,
    run: bool,
    stations: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--case" => args.case = Some(iter.next().ok_or("--case needs a value")?),
            "--job" => args.job = Some(iter.next().ok_or("--job needs a value")?),
            "--out" => args.out = Some(iter.next().ok_or("--out needs a value")?.into()),
            "--run" => args.run = true,
            "--stations" => args.stations = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => return Err(format!("unknown option {}", flag)),
            path if args.aircraft.is_none() => args.aircraft = Some(PathBuf::from(path)),
            extra => return Err(format!("unexpected argument {}", extra)),
        }
    }
    Ok(args)
}

fn print_stations(aircraft: &AircraftConfig) -> Result<(), PavlError> {
    let mut surfaces = serde_json::Map::new();
    for surface in &aircraft.surfaces {
        let stations = resolve_surface(surface)?;
        surfaces.insert(surface.name.clone(), serde_json::to_value(stations)?);
    }
    println!("{}", serde_json::to_string_pretty(&surfaces)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            process::exit(2);
        }
    };

    let source = match args.aircraft {
        Some(path) => AircraftSource::File(path),
        None => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };
    let aircraft = AircraftConfig::new(source)?;
    info!(
        "Loaded aircraft '{}' with {} surfaces",
        aircraft.name,
        aircraft.surfaces.len()
    );

    if args.stations {
        print_stations(&aircraft)?;
        return Ok(());
    }

    let case = match &args.case {
        Some(name) => aircraft
            .case(name)
            .ok_or_else(|| PavlError::UnknownCase(name.clone()))?,
        None => aircraft
            .cases
            .first()
            .ok_or_else(|| PavlError::UnknownCase("<none defined>".to_string()))?,
    };
    let job = args.job.unwrap_or_else(|| case.name.replace(' ', "_"));

    let mut config = RunnerConfig::default().with_env_overrides();
    if let Some(out) = args.out {
        config = config.with_results_dir(out);
    }
    let runner = AvlRunner::new(config);

    if args.run {
        match runner.run(&job, &aircraft, case) {
            Ok(sim) => println!("{}", sim.display()),
            Err(e) => {
                error!("Run failed: {}", e);
                return Err(e.into());
            }
        }
    } else {
        let files = runner.prepare(&job, &aircraft, case)?;
        println!("{}", files.geometry.display());
        println!("{}", files.mass.display());
        println!("{}", files.run.display());
    }

    Ok(())
}
