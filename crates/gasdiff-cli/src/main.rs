mod cli;
use cli::*;
use log::{debug, info};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Cli::parse();
    let config = match ComparisonConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {} ❌", e);
            return ExitCode::FAILURE;
        }
    };
    debug!("Comparing with config: {:?}", config);

    match GasComparator::run(&config, |outcome| println!("{}", outcome)).await {
        Ok(outcomes) => {
            let failed = outcomes.iter().filter(|o| o.is_failure()).count();
            info!(
                "Done, {} of {} endpoints failed",
                failed,
                outcomes.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {} ❌", e);
            ExitCode::FAILURE
        }
    }
}
