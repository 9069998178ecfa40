use std::io::Write;
use std::process::ExitCode;

use log::error;
use redis_parser_cli::command;
use redis_parser_cli::command::CliError;
use redis_parser_cli::config::Cli;
use redis_parser_cli::config::CliConfig;
use redis_parser_cli::config::Parser;
use redis_parser_cli::config::setup;

fn main() -> ExitCode {
	let args = Cli::parse();

	// No logger exists until setup succeeds.
	let config = match setup(&args) {
		Ok(config) => config,
		Err(e) => {
			eprintln!("Error: {}", e);
			return ExitCode::FAILURE;
		}
	};

	match run(&args, &config) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			error!("{}", e);
			ExitCode::FAILURE
		}
	}
}

fn run(args: &Cli, config: &CliConfig) -> Result<(), CliError> {
	let stdout = std::io::stdout();
	let mut out = stdout.lock();
	let result = command::run(&args.command, config, &mut out);
	out.flush()?;
	result
}
