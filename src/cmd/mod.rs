//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function routes the parsed CLI to the appropriate
//! subcommand handler: [`run`] or [`health`]. Each handler lives in its
//! own submodule.

pub mod health;
pub mod run;

use crate::cli::{Cli, Commands};
use crate::error::PassageError;

pub async fn dispatch(cli: Cli) -> Result<(), PassageError> {
    match cli.command {
        Some(Commands::Run(args)) => run::execute(args).await,
        Some(Commands::Health(args)) => health::execute(args).await,
        None => {
            print_welcome();
            Ok(())
        }
    }
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  passage v{version} \u{2014} single-upstream HTTP pass-through proxy\n\n  \
         No command provided. To get started:\n\n    \
         passage run -u <URL> --prefix <SEGMENT>    Start the proxy\n    \
         passage health                             Check a running instance\n    \
         passage --help                             See all commands and options\n"
    );
}
