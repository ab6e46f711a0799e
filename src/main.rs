use std::fs::File;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Env, Target};
use log::error;

use termbrot::RunTerminalCommand;
use termbrot::cli::Cli;

/// Logs go to `--log-file` when given. Otherwise they are off unless
/// RUST_LOG asks for them, since stderr shares the screen with the grid.
fn init_logger(log_file: Option<&Path>) -> io::Result<()> {
    let mut builder = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("off")),
    };

    builder.init();
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logger(cli.log_file.as_deref()) {
        eprintln!("termbrot: cannot open log file: {err}");
        return ExitCode::FAILURE;
    }

    let startup = match cli.startup_config() {
        Ok(startup) => startup,
        Err(err) => {
            error!("{}", err);
            eprintln!("termbrot: {err}");
            return ExitCode::from(err.exit_code());
        }
    };

    match RunTerminalCommand::new(startup).execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("termbrot: {err}");
            ExitCode::FAILURE
        }
    }
}
