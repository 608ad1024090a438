use std::process::ExitCode;

use clap::Parser;
use common::{
    cli::{Cli, Commands},
    load_config_or_exit, run_batch,
};
use msqrt::{run_basic, run_practical, BasicConfig, PracticalConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Basic {
            m,
            n,
            z,
            guard,
            run,
        } => {
            let mut config: BasicConfig = match &run.config {
                Some(path) => load_config_or_exit(path),
                None => BasicConfig::default(),
            };
            config.m = m.unwrap_or(config.m);
            config.n = n.unwrap_or(config.n);
            config.z = z.unwrap_or(config.z);
            config.residual_guard_bits = guard.unwrap_or(config.residual_guard_bits);
            let processor = config.m * config.n;
            run_batch(&run, processor, |problem, observer| {
                run_basic(&config, problem, observer)
            })
        }
        Commands::Practical { m, n, z, run } => {
            let mut config: PracticalConfig = match &run.config {
                Some(path) => load_config_or_exit(path),
                None => PracticalConfig::default(),
            };
            config.m = m.unwrap_or(config.m);
            config.n = n.unwrap_or(config.n);
            config.z = z.unwrap_or(config.z);
            let processor = config.m * config.n;
            run_batch(&run, processor, |problem, observer| {
                run_practical(&config, problem, observer)
            })
        }
    }
}
