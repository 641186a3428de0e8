use std::env;
use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use integer_complexity::records;
use integer_complexity::verify::{self, CandidateForm};

fn main() -> anyhow::Result<()> {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("verify_forms: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let table = verify::complexity_map(
        records::load_pairs(&options.table)
            .with_context(|| format!("reading complexity table {}", options.table.display()))?,
    );
    let candidates: Vec<CandidateForm> = records::load_pairs(&options.candidates)
        .with_context(|| format!("reading candidates {}", options.candidates.display()))?
        .into_iter()
        .map(CandidateForm::from)
        .collect();

    let report = verify::check_candidates(&table, &candidates)
        .context("checking candidates against the precomputed table")?;

    let file = File::create(&options.flagged)
        .with_context(|| format!("creating flagged output {}", options.flagged.display()))?;
    verify::write_flagged(file, &report.flagged)
        .with_context(|| format!("writing flagged output {}", options.flagged.display()))?;

    eprintln!(
        "{} of {} candidates flagged, flagged pairs written to {}",
        report.flagged.len(),
        candidates.len(),
        options.flagged.display()
    );
    println!("{}", report.second_pass_disagreements);

    Ok(())
}

struct Options {
    table: PathBuf,
    candidates: PathBuf,
    flagged: PathBuf,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut table = None;
        let mut candidates = None;
        let mut flagged = PathBuf::from("flagged_second_pass.txt");

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--table=") {
                table = Some(PathBuf::from(value));
            } else if arg == "--table" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --table".to_string())?
                    .into();
                table = Some(PathBuf::from(value));
            } else if let Some(value) = arg.strip_prefix("--candidates=") {
                candidates = Some(PathBuf::from(value));
            } else if arg == "--candidates" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --candidates".to_string())?
                    .into();
                candidates = Some(PathBuf::from(value));
            } else if let Some(value) = arg.strip_prefix("--flagged=") {
                flagged = PathBuf::from(value);
            } else if arg == "--flagged" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --flagged".to_string())?
                    .into();
                flagged = PathBuf::from(value);
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            table: table.ok_or_else(|| "missing required --table <path>".to_string())?,
            candidates: candidates
                .ok_or_else(|| "missing required --candidates <path>".to_string())?,
            flagged,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin verify_forms -- --table <path> --candidates <path> [--flagged <path>]

Options:
  --table <path>       Precomputed 'n complexity' records
  --candidates <path>  Candidate 'base remainder' pairs, base = 2^a*3^b
  --flagged <path>     Where to write flagged pairs (default: flagged_second_pass.txt)
  -h, --help           Print this help message

Prints the number of second-tier disagreements among flagged candidates.
"
        );
    }
}
