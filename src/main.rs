//! ecs-launch CLI
//!
//! Usage: ecs-launch [OPTIONS] --service-protocol <PROTOCOL> --service-port <PORT>
//!                   --service-container <NAME> <DC_PATH>

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use ecs_launch::config;
use ecs_launch::presentation::{factory, output, Cli};
use ecs_launch::ui::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    match run(&cli, &ui) {
        Ok(code) => code,
        Err(err) => {
            output::print_error(&err, ui.json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, ui: &UiContext) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let loaded = config::resolve(cli.config.as_deref(), &cwd)?;
    output::print_config_warnings(&loaded.warnings, ui);
    loaded.config.validate()?;

    let use_case = factory::create_provision_use_case(&loaded.config);
    let events = factory::create_event_sink(ui);

    match use_case.execute_with_events(&cli.provision_params(), events.as_ref()) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(failure) => {
            output::print_failure(&failure, ui);
            Ok(ExitCode::FAILURE)
        }
    }
}
