/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use physical::{Environment, Quantity, QuantityError, Template};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Quantity renderer
///
/// Parses quantities in canonical form and prints them in the preferred
/// units of the loaded environments.
struct Args {
    #[clap(long, short)]
    /// Built-in environment to load (repeatable; defaults to "default").
    environment: Vec<String>,
    #[clap(long)]
    /// Environment definition file (JSON) to load after the built-ins.
    table: Vec<PathBuf>,
    #[clap(long, short, allow_negative_numbers = true)]
    /// Number of decimals.
    precision: Option<i64>,
    #[clap(long, value_enum, default_value = "plain")]
    /// Output markup.
    format: Format,
    #[clap(long)]
    /// Print the canonical form instead.
    canonical: bool,
    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Increase log verbosity.
    verbose: u8,
    /// Quantities, eg. "Quantity(value=5000.0, dimension=[1, 1, -2, 0, 0, 0, 0], factor=1.0)".
    quantity: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Plain,
    Html,
    Latex,
}

impl From<Format> for Template {
    fn from(format: Format) -> Self {
        match format {
            Format::Plain => Template::Plain,
            Format::Html => Template::Html,
            Format::Latex => Template::Latex,
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = simplelog::TermLogger::init(
        match args.verbose {
            0 => simplelog::LevelFilter::Warn,
            1 => simplelog::LevelFilter::Info,
            2 => simplelog::LevelFilter::Debug,
            3.. => simplelog::LevelFilter::Trace,
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Error: failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(err) = run(&args) {
        eprintln!("{}", err);
        process::exit(1)
    }
}

fn run(args: &Args) -> Result<(), QuantityError> {
    let mut env = Environment::new();
    match args.environment.is_empty() {
        true => {
            env.load("default")?;
        }
        false => {
            for name in &args.environment {
                env.load(name)?;
            }
        }
    }
    for path in &args.table {
        env.load_file(path)?;
    }
    if let Some(precision) = args.precision {
        env.set_precision(precision)?;
    }
    log::info!("loaded environments: {}", env.loaded().join(", "));

    let quantities = args
        .quantity
        .iter()
        .map(|s| s.parse::<Quantity>())
        .collect::<Result<Vec<_>, _>>()?;
    for quantity in quantities {
        match args.canonical {
            true => println!("{}", quantity.canonical()),
            false => {
                println!("{}", quantity.display_as(&env, args.format.into()))
            }
        }
    }
    Ok(())
}
