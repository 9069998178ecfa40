//! Runs the built `redis-parser` binary to check what reaches stderr

use std::process::Command;
use std::process::Output;

fn redis_parser(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_redis-parser"))
		.args(args)
		.output()
		.unwrap()
}

#[test]
fn test_setup_failure_is_printed_once() {
	let output = redis_parser(&["--log-level", "verbose", "encode", "PING"]);
	assert!(!output.status.success());

	let stderr = String::from_utf8_lossy(&output.stderr);
	assert_eq!(stderr.matches("Invalid log level 'verbose'").count(), 1);
	assert!(output.stdout.is_empty());
}

#[test]
fn test_command_failure_is_logged_once() {
	let output = redis_parser(&["--log-level", "error", "encode"]);
	assert!(!output.status.success());

	let stderr = String::from_utf8_lossy(&output.stderr);
	assert_eq!(stderr.matches("empty command").count(), 1);
	assert!(!stderr.contains("Error: "));
}

#[test]
fn test_encode_writes_frame_to_stdout() {
	let output = redis_parser(&["--log-level", "error", "-o", "raw", "encode", "GET", "k"]);
	assert!(output.status.success());
	assert_eq!(output.stdout, b"*2\r\n$3\r\nGET\r\n$1\r\nk\r\n");
}
