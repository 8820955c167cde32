//! A command line runner showing how exhaustive route search scales.

use std::io::Write;
use std::process;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use env_logger::{Builder, Env, Target, WriteStyle};
use log::Level;
use u_tour::benchmark::{suggest_bound, Benchmark, BenchmarkRecord};

const MAX_N_ARG_NAME: &str = "max-n";
const BUDGET_ARG_NAME: &str = "budget";
const ROUND_TRIP_ARG_NAME: &str = "round-trip";
const SEED_ARG_NAME: &str = "seed";

/// 13 locations already means 479M orderings.
const LARGEST_SUPPORTED_N: usize = 13;

fn get_app() -> Command {
    Command::new("tour-bench")
        .about("Times exhaustive route search for growing numbers of locations")
        .arg(
            Arg::new(MAX_N_ARG_NAME)
                .help("Largest number of locations (start included) to time")
                .long(MAX_N_ARG_NAME)
                .short('n')
                .value_parser(value_parser!(usize))
                .default_value("10"),
        )
        .arg(
            Arg::new(BUDGET_ARG_NAME)
                .help("Time budget in seconds used to suggest the exact search bound")
                .long(BUDGET_ARG_NAME)
                .short('b')
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new(ROUND_TRIP_ARG_NAME)
                .help("Solve closed tours instead of open paths")
                .long(ROUND_TRIP_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Use random matrices generated from this seed")
                .long(SEED_ARG_NAME)
                .short('s')
                .value_parser(value_parser!(u64)),
        )
}

fn init_logger() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{} {}", level_tag(record.level()), record.args()));

    if let Err(err) = builder.try_init() {
        eprintln!("logger init failed: {err}");
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

fn run(matches: &ArgMatches) -> Result<(), String> {
    let max_n = matches.get_one::<usize>(MAX_N_ARG_NAME).copied().unwrap_or(10);
    if max_n > LARGEST_SUPPORTED_N {
        return Err(format!(
            "--{MAX_N_ARG_NAME} {max_n} is too large, use at most {LARGEST_SUPPORTED_N}"
        ));
    }

    let mut bench = Benchmark::new(max_n).round_trip(matches.get_flag(ROUND_TRIP_ARG_NAME));
    if let Some(&seed) = matches.get_one::<u64>(SEED_ARG_NAME) {
        bench = bench.seeded(seed);
    }

    let records = bench.run();
    print_table(&records);

    if let Some(&budget) = matches.get_one::<f64>(BUDGET_ARG_NAME) {
        match suggest_bound(&records, budget) {
            Some(bound) => println!("suggested exact search bound for {budget}s: {bound} destinations"),
            None => println!("no measured size finished within {budget}s"),
        }
    }

    Ok(())
}

fn print_table(records: &[BenchmarkRecord]) {
    println!("{:>4} | {:>12} | {:>12} | {:>12}", "N", "Permutations", "Time", "Per Route");
    println!("{}", "-".repeat(52));
    for r in records {
        println!(
            "{:>4} | {:>12} | {:>11.4}s | {:>10.3}us",
            r.n,
            r.permutations,
            r.elapsed_seconds,
            r.micros_per_route()
        );
    }
}

fn main() {
    init_logger();
    let matches = get_app().get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("{err}");
        process::exit(1);
    }
}
