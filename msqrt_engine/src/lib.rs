//! Multiplicative square root digit recurrences
//!
//! Given operands `A` and `B` such that `sqrt(A * B)` is an exact integer
//! `S`, these engines produce the base `2^m` digits of `S` one per iteration
//! while driving a residual to zero, entirely through the hardware register
//! operations of `msqrt_core`.
//!
//! - [BasicEngine] replays the precomputed digits of `S`, verifying the update
//!   equations and register widths.
//! - [PracticalEngine] selects redundant digits from an [SrtTable] and
//!   converts them on the fly, with the basic recurrence running alongside as
//!   an oracle.
//!
//! Contract violations abort a run with an [EngineError]. Numeric faults
//! never do, they are reported through the register flags in the
//! [RunReport].
//!
//! ```
//! use msqrt_core::{bw, Register};
//! use msqrt_engine::{run_basic, BasicConfig, Problem};
//!
//! let x = Register::from_u128(bw(36), 0xa_1234_5678);
//! let y = Register::from_u128(bw(36), 0xf_edcb_a987);
//! let problem = Problem::from_seeds(bw(72), &x, &y).unwrap();
//! let report = run_basic(&BasicConfig::default(), &problem, &mut ()).unwrap();
//! assert!(report.is_success());
//! ```

// There are many guaranteed nonzero lengths
#![allow(clippy::len_without_is_empty)]

mod basic;
mod config;
mod datapath;
mod error;
mod otf;
mod practical;
mod problem;
mod report;
mod selection;
mod streams;
mod table;
mod trace;

pub use basic::BasicEngine;
pub use config::{BasicConfig, BasicLayout, PracticalConfig, PracticalLayout};
pub use error::{ConfigError, EngineError};
pub use otf::OnTheFly;
pub use practical::PracticalEngine;
pub use problem::Problem;
pub use report::{Advisory, OracleReport, RunReport};
pub use selection::{select_digit, Samples};
pub use streams::{MultiplierStream, RootStream};
pub use table::{IndexOverride, SrtTable};
pub use trace::{Step, StepObserver};

/// Runs a basic recurrence from start to finish
pub fn run_basic<O: StepObserver + ?Sized>(
    config: &BasicConfig,
    problem: &Problem,
    observer: &mut O,
) -> Result<RunReport, EngineError> {
    BasicEngine::new(config, problem)?.run(observer)
}

/// Runs a practical recurrence from start to finish
pub fn run_practical<O: StepObserver + ?Sized>(
    config: &PracticalConfig,
    problem: &Problem,
    observer: &mut O,
) -> Result<RunReport, EngineError> {
    PracticalEngine::new(config, problem)?.run(observer)
}
