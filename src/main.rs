//! Sorting GA CLI - evolve a comma-separated integer list into ascending order.
//!
//! Prints one `<trial> <generation>` line per trial, suitable for plotting.

use std::process;

use u_sortevo::{
    ga::{GaConfig, GaRunner},
    input::parse_sequence,
    EvoError, Result,
};

/// Generation cap used when none is given on the command line.
const DEFAULT_MAX_GENERATIONS: usize = 1_000_000;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <values> [population_size] [mutation_rate] [trials] [seed] [max_generations]",
            args.first().map_or("u-sortevo", String::as_str)
        );
        eprintln!();
        eprintln!("Evolve a permutation of <values> until it is strictly ascending.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  values           Comma-separated integers, e.g. 5,4,3,2,1");
        eprintln!("  population_size  Individuals per generation (default: 20)");
        eprintln!("  mutation_rate    Per-individual swap probability (default: 0.05)");
        eprintln!("  trials           Independent runs to perform (default: 1)");
        eprintln!("  seed             Base seed; trial t uses seed + t, '-' for random (default: random)");
        eprintln!("  max_generations  Stop a trial after this many generations (default: {DEFAULT_MAX_GENERATIONS})");
        process::exit(1);
    }

    if let Err(e) = run(&args[1..]) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Parsed command line: input values, shared config, and trial plan.
#[derive(Debug)]
struct Invocation {
    values: Vec<i64>,
    config: GaConfig,
    trials: usize,
    seed: Option<u64>,
}

fn run(args: &[String]) -> Result<()> {
    let Invocation {
        values,
        config: base,
        trials,
        seed,
    } = parse_invocation(args)?;

    log::info!(
        "sorting {} values: population {}, mutation rate {}, {trials} trial(s)",
        values.len(),
        base.population_size,
        base.mutation_rate
    );

    for trial in 1..=trials {
        let mut config = base.clone().with_trial(trial);
        if let Some(seed) = seed {
            config = config.with_seed(seed.wrapping_add(trial as u64));
        }
        let result = GaRunner::run(&values, &config)?;
        if !result.converged {
            log::warn!("trial {trial} hit the generation cap without sorting");
        }
        println!("{trial} {}", result.generations);
    }

    Ok(())
}

fn parse_invocation(args: &[String]) -> Result<Invocation> {
    let values = parse_sequence(args.first().map_or("", String::as_str))?;
    let defaults = GaConfig::default();
    let population_size = parse_arg(args.get(1), "population_size", defaults.population_size)?;
    let mutation_rate = parse_arg(args.get(2), "mutation_rate", defaults.mutation_rate)?;
    let trials = parse_arg(args.get(3), "trials", 1usize)?;
    let seed: Option<u64> = args
        .get(4)
        .filter(|s| s.trim() != "-")
        .map(|s| parse_arg(Some(s), "seed", 0u64))
        .transpose()?;
    let max_generations = parse_arg(args.get(5), "max_generations", DEFAULT_MAX_GENERATIONS)?;

    let config = defaults
        .with_population_size(population_size)
        .with_mutation_rate(mutation_rate)
        .with_max_generations(max_generations);
    config.validate()?;

    Ok(Invocation {
        values,
        config,
        trials,
        seed,
    })
}

fn parse_arg<T: std::str::FromStr>(arg: Option<&String>, name: &'static str, default: T) -> Result<T> {
    match arg {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| EvoError::InvalidArgument {
            name,
            value: raw.clone(),
        }),
    }
}
