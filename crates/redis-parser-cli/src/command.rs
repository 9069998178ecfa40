//! The `decode` and `encode` subcommands.

use std::fs::File;
use std::io;
use std::io::Read;
use std::io::Write;
use std::path::Path;

use bytes::Bytes;
use log::debug;
use log::info;
use redis_parser::Argument;
use redis_parser::BadReply;
use redis_parser::EncodeError;
use thiserror::Error;

use crate::config::CliConfig;
use crate::config::Command;
use crate::config::ConfigError;
use crate::config::OutputFormat;
use crate::render;

#[derive(Error, Debug)]
pub enum CliError {
	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error("Failed to read input '{path}': {source}")]
	Input {
		source: io::Error,
		path: String,
	},

	#[error("Failed to write output: {0}")]
	Output(#[from] io::Error),

	#[error("Input exceeds the configured limit of {limit} bytes")]
	InputTooLarge { limit: usize },

	#[error("Invalid argument {index} '{arg}': {reason}")]
	InvalidArgument {
		index: usize,
		arg: String,
		reason: String,
	},

	#[error(transparent)]
	Decode(#[from] BadReply),

	#[error(transparent)]
	Encode(#[from] EncodeError),
}

/// Run one subcommand, writing its result to `out`.
pub fn run(command: &Command, config: &CliConfig, out: &mut impl Write) -> Result<(), CliError> {
	match command {
		Command::Decode { input } => {
			let buf = match input {
				Some(path) => read_file(path, config.max_input_bytes)?,
				None => read_limited(io::stdin().lock(), "<stdin>", config.max_input_bytes)?,
			};
			decode(&buf, config.output, out)
		}
		Command::Encode { args } => encode(args, config.output, out),
	}
}

/// Decode one reply and print its kind followed by its rendering.
///
/// A bad reply is still reported on `out` with kind 0 before the error is
/// returned.
pub fn decode(buf: &Bytes, format: OutputFormat, out: &mut impl Write) -> Result<(), CliError> {
	let (result, kind) = redis_parser::decode_with_kind(buf);
	render::write_kind(out, kind)?;

	let reply = result?;
	render::write_reply(out, &reply, format)?;
	info!("Decoded {} from {} bytes", kind, buf.len());
	Ok(())
}

/// Encode the arguments as a command and print the frame.
///
/// In raw mode the frame is written exactly, with no trailing newline, so
/// it can be piped straight to a server.
pub fn encode(args: &[String], format: OutputFormat, out: &mut impl Write) -> Result<(), CliError> {
	let arguments = args
		.iter()
		.enumerate()
		.map(|(i, arg)| parse_argument(i + 1, arg))
		.collect::<Result<Vec<_>, _>>()?;

	let encoded = redis_parser::encode_command(&arguments)?;
	render::write_bytes(out, &encoded, format)?;
	if format != OutputFormat::Raw {
		out.write_all(b"\n")?;
	}
	info!("Encoded {} arguments into {} bytes", arguments.len(), encoded.len());
	Ok(())
}

/// Parse one command-line word into an argument. `index` is 1-based.
///
/// `nil` is the nil sentinel; `i:`, `f:`, `b:` and `s:` prefixes select
/// integer, number, boolean and text; anything else is text.
pub fn parse_argument(index: usize, arg: &str) -> Result<Argument, CliError> {
	let invalid = |reason: String| CliError::InvalidArgument {
		index,
		arg: arg.to_string(),
		reason,
	};

	if arg == "nil" {
		return Ok(Argument::Nil);
	}
	let Some((prefix, value)) = arg.split_once(':') else {
		return Ok(Argument::from(arg));
	};

	match prefix {
		"s" => Ok(Argument::from(value)),
		"i" => value
			.parse::<i64>()
			.map(Argument::Integer)
			.map_err(|e| invalid(e.to_string())),
		"f" => value
			.parse::<f64>()
			.map(Argument::Number)
			.map_err(|e| invalid(e.to_string())),
		"b" => match value {
			"true" | "1" => Ok(Argument::Boolean(true)),
			"false" | "0" => Ok(Argument::Boolean(false)),
			_ => Err(invalid("expected true, false, 1 or 0".to_string())),
		},
		_ => Ok(Argument::from(arg)),
	}
}

fn read_file(path: &Path, limit: usize) -> Result<Bytes, CliError> {
	let name = path.display().to_string();
	let file = File::open(path).map_err(|source| CliError::Input {
		source,
		path: name.clone(),
	})?;
	read_limited(file, &name, limit)
}

/// Read everything from `reader`, failing once more than `limit` bytes
/// arrive.
pub fn read_limited(reader: impl Read, name: &str, limit: usize) -> Result<Bytes, CliError> {
	let mut buf = Vec::new();
	reader
		.take((limit as u64).saturating_add(1))
		.read_to_end(&mut buf)
		.map_err(|source| CliError::Input {
			source,
			path: name.to_string(),
		})?;

	if buf.len() > limit {
		return Err(CliError::InputTooLarge { limit });
	}
	debug!("Read {} bytes from {}", buf.len(), name);
	Ok(Bytes::from(buf))
}
