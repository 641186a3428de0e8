use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use integer_complexity::bounds::markov::OracleRecord;
use integer_complexity::{records, ComplexityEngineBuilder};

fn main() -> anyhow::Result<()> {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("complexities: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let mut builder = ComplexityEngineBuilder::new(options.n_max);
    if let Some(path) = &options.oracle {
        let pairs = records::load_pairs(path)
            .with_context(|| format!("reading oracle table {}", path.display()))?;
        eprintln!("loaded {} oracle records from {}", pairs.len(), path.display());
        builder = builder.with_oracle(pairs.into_iter().map(OracleRecord::from));
    }

    let engine = builder.build();
    let started = Instant::now();
    let run = engine.run();
    let elapsed = started.elapsed();

    println!(
        "c_max = {}",
        integer_complexity::utils::complexity_ceiling(options.n_max)
    );
    println!(
        "complexity({}) = {}",
        options.n_max,
        run.table.get(options.n_max)
    );
    println!("estimator improvements = {}", run.estimator_improvements);
    eprintln!("pass over 1..={} took {:.3}s", options.n_max, elapsed.as_secs_f64());

    if let Some(path) = &options.output {
        let file = File::create(path)
            .with_context(|| format!("creating output table {}", path.display()))?;
        records::write_pairs(file, run.table.iter().map(|(n, c)| (n, c as u64)))
            .with_context(|| format!("writing output table {}", path.display()))?;
        eprintln!("wrote {} entries to {}", options.n_max, path.display());
    }

    Ok(())
}

struct Options {
    n_max: u64,
    oracle: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut n_max = 2_000_000u64;
        let mut oracle = None;
        let mut output = None;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--n-max=") {
                n_max = parse_n_max(value)?;
            } else if arg == "--n-max" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --n-max".to_string())?
                    .into();
                n_max = parse_n_max(&value)?;
            } else if let Some(value) = arg.strip_prefix("--oracle=") {
                oracle = Some(PathBuf::from(value));
            } else if arg == "--oracle" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --oracle".to_string())?
                    .into();
                oracle = Some(PathBuf::from(value));
            } else if let Some(value) = arg.strip_prefix("--output=") {
                output = Some(PathBuf::from(value));
            } else if arg == "--output" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --output".to_string())?
                    .into();
                output = Some(PathBuf::from(value));
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            n_max,
            oracle,
            output,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --release --bin complexities [-- <options>]

Options:
  --n-max <N>        Compute complexities for 1..=N (default: 2000000)
  --oracle <path>    Merge externally computed 'n bound' records before the pass
  --output <path>    Write the finished table as 'n complexity' lines
  -h, --help         Print this help message

Examples:
  cargo run --release --bin complexities -- --n-max 1000000
  cargo run --release --bin complexities -- --oracle greedy_base2310.txt --output table.txt
"
        );
    }
}

fn parse_n_max(value: &str) -> Result<u64, String> {
    let n = value
        .parse::<u64>()
        .map_err(|_| "n-max must be a positive integer".to_string())?;
    if n == 0 {
        return Err("n-max must be at least 1".to_string());
    }
    Ok(n)
}
