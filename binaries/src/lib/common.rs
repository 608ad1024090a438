//! Shared pieces of the `msqrt` binaries

pub mod cli;
pub mod render;

use std::{
    fs,
    path::Path,
    process::{self, ExitCode},
    time::{SystemTime, UNIX_EPOCH},
};

use cli::RunArgs;
use msqrt::{EngineError, Problem, RunReport, Step, StepObserver};
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
use serde::de::DeserializeOwned;

/// Reads a RON config file, exiting the process with a message if that fails
pub fn load_config_or_exit<T: DeserializeOwned>(path: &Path) -> T {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: failed to read {}: {e}", path.display());
            process::exit(2);
        }
    };
    match ron::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: failed to parse {}: {e}", path.display());
            process::exit(2);
        }
    }
}

/// The explicit seed, or one derived from the current time
pub fn seed_or_now(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    })
}

/// Pass and fail counts of a batch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub success: usize,
    pub degraded: usize,
    pub failed: usize,
    pub aborted: usize,
    /// practical runs whose residual disagrees with the oracle
    pub disagreements: usize,
}

impl Tally {
    pub fn record(&mut self, report: &RunReport) {
        if report.is_degraded() {
            self.degraded += 1;
        } else if report.is_success() {
            self.success += 1;
        } else {
            self.failed += 1;
        }
        if report.residuals_agree() == Some(false) {
            self.disagreements += 1;
        }
    }

    pub fn is_clean(&self) -> bool {
        (self.failed == 0) && (self.aborted == 0) && (self.disagreements == 0)
    }
}

/// Runs `args.runs` random problems of `processor` bits through `run`,
/// printing every report and a summary
pub fn run_batch<F>(args: &RunArgs, processor: usize, mut run: F) -> ExitCode
where
    F: FnMut(&Problem, &mut dyn StepObserver) -> Result<RunReport, EngineError>,
{
    let seed = seed_or_now(args.seed);
    println!("seed: {seed}");
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    let mut tally = Tally::default();
    for i in 0..args.runs {
        let problem = match Problem::random(processor, &mut rng) {
            Ok(problem) => problem,
            Err(e) => {
                eprintln!("error: could not build a problem: {e}");
                return ExitCode::from(2)
            }
        };
        let mut steps: Vec<Step> = vec![];
        let result = if args.trace {
            run(&problem, &mut steps)
        } else {
            run(&problem, &mut ())
        };
        println!("run {i}:");
        print!("{}", render::problem(&problem));
        for step in &steps {
            print!("{}", render::step(step));
        }
        match result {
            Ok(report) => {
                print!("{}", render::report(&report));
                tally.record(&report);
            }
            Err(e) => {
                println!("  aborted: {e}");
                tally.aborted += 1;
            }
        }
    }
    print!("{}", render::tally(&tally));
    if tally.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
