mod cli;
mod error;
mod logging;
mod scenario;

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use cli::Cli;
use error::CliError;
use scenario::Scenario;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    logging::init(cli.log_level.into(), cli.log_file.as_deref())?;

    let text = if cli.scenario.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&cli.scenario)?
    };
    let scenario: Scenario = serde_json::from_str(&text)?;
    info!(
        "replaying {} steps from {}",
        scenario.steps.len(),
        cli.scenario.display()
    );

    let reports = scenario::replay(&scenario)?;
    for report in &reports {
        if cli.json {
            println!("{}", serde_json::to_string(report)?);
        } else {
            println!("{}", report);
        }
    }
    Ok(())
}
