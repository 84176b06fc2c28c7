use anyhow::Context;
use bank_sim::{config::Config, logging, run::run};
use std::fs::File;

fn main() -> anyhow::Result<()> {
    let config = Config::from_args(std::env::args().skip(1))?;
    logging::init(config.log_filter.as_deref());

    let input = File::open(&config.script)
        .with_context(|| format!("failed to open {}", config.script.display()))?;

    run(input, std::io::stdout().lock()).context("failed to replay operations")
}
