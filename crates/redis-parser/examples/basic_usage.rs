//! Basic usage of the reply decoder and command encoder

use bytes::Bytes;
use redis_parser::Argument;
use redis_parser::Reply;

fn main() {
	println!("=== redis-parser Basic Usage ===\n");

	example_encode_command();
	example_decode_replies();
	example_bad_replies();
}

fn example_encode_command() {
	println!("--- Encode a command ---");

	let args = [
		Argument::from("SET"),
		Argument::from("counter"),
		Argument::from(10i64),
	];
	let encoded = redis_parser::encode_command(&args).unwrap();
	println!("Encoded: {:?}", String::from_utf8_lossy(&encoded));
	println!("Size:    {} bytes", redis_parser::encoded_len(&args).unwrap());
	println!();
}

fn example_decode_replies() {
	println!("--- Decode replies ---");

	let frames: [&'static [u8]; 5] = [
		b"+OK\r\n",
		b"-ERR wrong type\r\n",
		b":42\r\n",
		b"$-1\r\n",
		b"*3\r\n$3\r\nfoo\r\n$-1\r\n$3\r\nbar\r\n",
	];

	for frame in frames {
		let (result, kind) = redis_parser::decode_with_kind(&Bytes::from_static(frame));
		match result {
			Ok(Reply::MultiBulk(elements)) => {
				println!("{} ({}):", kind, kind.code());
				for (i, element) in elements.iter().enumerate() {
					println!("  {}) {:?}", i + 1, element);
				}
			}
			Ok(reply) => println!("{} ({}): {:?}", kind, kind.code(), reply),
			Err(e) => println!("{} ({}): {}", kind, kind.code(), e),
		}
	}
	println!();
}

fn example_bad_replies() {
	println!("--- Malformed replies ---");

	let frames: [&[u8]; 3] = [b"", b"$5\r\nabc\r\n", b"*1\r\n:1\r\n"];
	for frame in frames {
		let err = redis_parser::decode_slice(frame).unwrap_err();
		println!("{:?} -> {}", String::from_utf8_lossy(frame), err);
	}
}
