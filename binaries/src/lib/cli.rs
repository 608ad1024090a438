use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "msqrt-sim",
    about = "Bit-level simulation of multiplicative SRT square root recurrences",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Seed of the operand generator, taken from the clock if absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of independent random problems
    #[arg(long, default_value_t = 1)]
    pub runs: usize,

    /// RON config file, the parameter options are applied on top of it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the registers of every iteration
    #[arg(long)]
    pub trace: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay the precomputed root digits through the residual equations
    Basic {
        /// Radix exponent, digits are m bits wide
        #[arg(short, long)]
        m: Option<usize>,

        /// Number of root digits
        #[arg(short, long)]
        n: Option<usize>,

        /// Guard bits
        #[arg(short, long)]
        z: Option<usize>,

        /// Extra residual bits
        #[arg(long)]
        guard: Option<usize>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Select redundant digits from an SRT table with on-the-fly conversion
    Practical {
        /// Radix exponent, digits are m bits wide
        #[arg(short, long)]
        m: Option<usize>,

        /// Number of root digits
        #[arg(short, long)]
        n: Option<usize>,

        /// Guard bits
        #[arg(short, long)]
        z: Option<usize>,

        #[command(flatten)]
        run: RunArgs,
    },
}
