//! fnpilot CLI - version and alias lifecycle manager for serverless functions
//!
//! Usage: fnpilot <COMMAND>
//!
//! Commands:
//!   deploy    Publish the package and point an environment alias at it
//!   teardown  Remove an environment alias
//!   delete    Delete the function entirely
//!   cleanup   Delete versions no alias points at
//!   status    Show versions and aliases
//!   check     Validate the config file

use std::process::ExitCode;

use clap::Parser;

use fnpilot::presentation::{Cli, Commands};

mod commands;
mod ui;

use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    let outcome = match cli.command {
        Commands::Deploy {
            environment,
            description,
        } => commands::deploy::cmd_deploy(&cli.config, &environment, description, &ui),
        Commands::Teardown { environment } => {
            commands::teardown::cmd_teardown(&cli.config, &environment, &ui)
        }
        Commands::Delete { yes } => commands::delete::cmd_delete(&cli.config, yes, &ui),
        Commands::Cleanup => commands::cleanup::cmd_cleanup(&cli.config, &ui),
        Commands::Status => commands::status::cmd_status(&cli.config, &ui),
        Commands::Check => commands::check::cmd_check(&cli.config, &ui),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            ui::error::print_error(&err, &ui);
            ExitCode::FAILURE
        }
    }
}
